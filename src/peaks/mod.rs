//! Detection of the single most prominent peak in a short integer signal.
//!
//! Samples are converted to Q16.16 fixed point and scanned once for
//! candidate indices, using the sign of the numerical gradient and a local
//! maximum test together with a noise floor and a gradient magnitude
//! threshold. The candidate with the largest
//! [topological prominence](https://www.mathworks.com/help/signal/ug/prominence.html)
//! above the prominence threshold is the result.
//!
//! * No allocations and no floating point in the detection path.
//! * Deterministic, bit exact results on all targets.
//! * No global state. Scratch memory lives on the stack, in a
//!   [PeakDetector](struct.PeakDetector.html) or in caller provided buffers.
//!
//! # Examples
//! ```
//! use micro_peak::peaks::{find_prominent_peak, PeakConfig};
//! use micro_peak::PeakError;
//!
//! let signal: [i16; 10] = [10, 40, 70, 80, 60, 40, 70, 100, 50, 20];
//! let peak = find_prominent_peak(&signal, None).unwrap();
//! assert_eq!(peak.index, 7);
//! assert_eq!(peak.prominence_f32(), 80.0);
//!
//! // Require a prominence of at least 100 signal units.
//! let config = PeakConfig::from_options(100.0, 0.1, 10.0);
//! assert_eq!(find_prominent_peak(&signal, Some(&config)), Err(PeakError::NoPeakFound));
//! ```
//!
//! Caller provided scratch memory:
//! ```
//! use micro_peak::peaks::{find_prominent_peak_buffered, MAX_PEAKS};
//!
//! let signal: [i16; 7] = [0, 10, 5, 20, 5, 15, 0];
//! let mut signal_scratch = [0_i32; 7];
//! let mut candidate_scratch = [0_usize; MAX_PEAKS];
//! let peak = find_prominent_peak_buffered(&signal, None, &mut signal_scratch, &mut candidate_scratch).unwrap();
//! assert_eq!(peak.index, 3);
//! ```

mod candidates;
mod config;
mod detector;
mod prominence;
mod selection;

pub use candidates::{find_candidates, MIN_SIGNAL_LENGTH};
pub use config::PeakConfig;
pub use detector::{
    find_prominent_peak, find_prominent_peak_buffered, peak_prominence_as_real, PeakDetector,
    PeakScratch, MAX_PEAKS, MAX_SIGNAL_LENGTH,
};
pub use prominence::topological_prominence;
pub use selection::{select_prominent_peak, Peak};
