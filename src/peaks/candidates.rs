use crate::common::gradient_at;
use crate::error::PeakError;
use crate::peaks::config::PeakConfig;

/// The minimum number of samples needed to look for candidates.
pub const MIN_SIGNAL_LENGTH: usize = 3;

/// Scans a Q16.16 signal for indices that look like peaks.
///
/// An interior index `i` is a candidate if
/// * the gradient goes from positive to non-positive at `i`, or `signal[i]`
///   is strictly greater than both neighbors,
/// * `signal[i]` is strictly above the noise floor, and
/// * the magnitude of the gradient at `i - 1` is at least the gradient threshold.
///
/// Candidates are written to `candidates` in ascending order. Scanning stops
/// once `candidates` is full, so later candidates are never considered.
/// Returns the number of candidates found, which may be zero.
pub fn find_candidates(
    signal: &[i32],
    config: &PeakConfig,
    candidates: &mut [usize],
) -> Result<usize, PeakError> {
    let length = signal.len();
    if length < MIN_SIGNAL_LENGTH {
        return Err(PeakError::BufferTooSmall);
    }

    let mut count = 0;
    let mut grad_prev = gradient_at(signal, 0);
    for i in 1..(length - 1) {
        let grad_curr = gradient_at(signal, i);

        let is_zero_crossing = grad_prev > 0 && grad_curr <= 0;
        let is_local_max = signal[i] > signal[i - 1] && signal[i] > signal[i + 1];
        let above_noise = signal[i] > config.noise_floor;
        // unsigned_abs avoids overflowing on i32::MIN
        let strong_gradient = grad_prev.unsigned_abs() as i64 >= config.gradient_threshold as i64;

        if (is_zero_crossing || is_local_max) && above_noise && strong_gradient {
            if count == candidates.len() {
                log::trace!("Candidate buffer full at index {}, stopping scan", i);
                break;
            }
            log::trace!("Peak candidate at index {}", i);
            candidates[count] = i;
            count += 1;
        }

        grad_prev = grad_curr;
    }

    Ok(count)
}
