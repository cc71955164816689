//! A deterministic, fixed-point implementation of prominence based peak detection
//! for short integer signals, like a window of ADC samples on a microcontroller.
//!
//! Features
//! * `no_std`, no allocations.
//! * Q16.16 fixed-point arithmetic throughout. Floating point is only used
//!   by diagnostic helpers.
//! * MATLAB compatible [topological prominence](https://en.wikipedia.org/wiki/Topographic_prominence).
//! * Reentrant. There is no global mutable state.
//!
//! See the [peaks](peaks/index.html) module for examples.
//!
//! Diagnostic messages are emitted through the [log](https://docs.rs/log) crate.
//! The optional `serde` feature makes [PeakConfig](peaks/struct.PeakConfig.html)
//! serializable.

#![cfg_attr(not(test), no_std)]

pub mod common;
mod error;
pub mod peaks;

pub use error::PeakError;
pub use peaks::{find_prominent_peak, find_prominent_peak_buffered, peak_prominence_as_real, Peak, PeakConfig};
