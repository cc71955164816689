//! C ABI for micro-peak.
//!
//! `find_prominent_peak_fp` and `get_peak_prominence_float` share one
//! process wide detector. Calls through them are serialized by a mutex.
//! `find_prominent_peak_fp_buffered` only touches memory owned by the caller.

#[macro_use]
extern crate lazy_static;

use std::sync::{Mutex, MutexGuard};

use micro_peak::peaks::{find_prominent_peak_buffered, PeakDetector, MAX_PEAKS, MAX_SIGNAL_LENGTH};
use micro_peak::{Peak, PeakConfig, PeakError};

pub const PEAK_FP_OK: i32 = 0;
pub const PEAK_FP_NO_PEAK_FOUND: i32 = 1;
pub const PEAK_FP_INVALID_INPUT: i32 = 2;
pub const PEAK_FP_BUFFER_TOO_SMALL: i32 = 3;

lazy_static! {
    static ref DETECTOR: Mutex<PeakDetector> = Mutex::new(PeakDetector::new());
}

fn detector() -> MutexGuard<'static, PeakDetector> {
    // Every call overwrites the scratch memory, so a poisoned detector is still usable.
    match DETECTOR.lock() {
        Ok(detector) => detector,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn valid_length(length: i32) -> Option<usize> {
    if length <= 0 || length as usize > MAX_SIGNAL_LENGTH {
        None
    } else {
        Some(length as usize)
    }
}

fn write_result(result: Result<Peak, PeakError>, peak_index: *mut i32) -> i32 {
    match result {
        Ok(peak) => {
            unsafe { *peak_index = peak.index as i32 };
            PEAK_FP_OK
        }
        Err(error) => error.code(),
    }
}

#[no_mangle]
pub extern "C" fn peak_default_config() -> PeakConfig {
    PeakConfig::DEFAULT
}

#[no_mangle]
pub extern "C" fn find_prominent_peak_fp(
    raw_signal: *const i16,
    length: i32,
    peak_index: *mut i32,
    config: *const PeakConfig,
) -> i32 {
    if raw_signal.is_null() || peak_index.is_null() {
        return PEAK_FP_INVALID_INPUT;
    }
    let length = match valid_length(length) {
        Some(length) => length,
        None => return PEAK_FP_INVALID_INPUT,
    };

    let signal: &[i16] = unsafe { std::slice::from_raw_parts(raw_signal, length) };
    let config = unsafe { config.as_ref() };
    let result = detector().detect_with_config(signal, config);
    write_result(result, peak_index)
}

/// `signal_q16_buffer` must hold `length` values and `peaks_buffer`
/// `MAX_PEAKS` values.
#[no_mangle]
pub extern "C" fn find_prominent_peak_fp_buffered(
    raw_signal: *const i16,
    length: i32,
    peak_index: *mut i32,
    config: *const PeakConfig,
    signal_q16_buffer: *mut i32,
    peaks_buffer: *mut i32,
) -> i32 {
    if raw_signal.is_null() || peak_index.is_null() || signal_q16_buffer.is_null() || peaks_buffer.is_null() {
        return PEAK_FP_INVALID_INPUT;
    }
    let length = match valid_length(length) {
        Some(length) => length,
        None => return PEAK_FP_INVALID_INPUT,
    };

    let signal: &[i16] = unsafe { std::slice::from_raw_parts(raw_signal, length) };
    let signal_scratch: &mut [i32] = unsafe { std::slice::from_raw_parts_mut(signal_q16_buffer, length) };
    let peaks: &mut [i32] = unsafe { std::slice::from_raw_parts_mut(peaks_buffer, MAX_PEAKS) };
    let config = unsafe { config.as_ref() };

    // Candidate indices are usize in Rust, the C side stores them as i32.
    let mut candidate_scratch = [0_usize; MAX_PEAKS];
    let result = find_prominent_peak_buffered(signal, config, signal_scratch, &mut candidate_scratch);
    for (target, index) in peaks.iter_mut().zip(candidate_scratch.iter()) {
        *target = *index as i32;
    }
    write_result(result, peak_index)
}

#[no_mangle]
pub extern "C" fn get_peak_prominence_float(raw_signal: *const i16, length: i32, peak_index: i32) -> f32 {
    if raw_signal.is_null() || peak_index < 0 {
        return 0.0;
    }
    let length = match valid_length(length) {
        Some(length) => length,
        None => return 0.0,
    };
    let signal: &[i16] = unsafe { std::slice::from_raw_parts(raw_signal, length) };
    detector().prominence_as_real(signal, peak_index as usize)
}
