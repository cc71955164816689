use crate::common::q16_to_f32;
use crate::error::PeakError;
use crate::peaks::config::PeakConfig;
use crate::peaks::prominence::topological_prominence;

/// A detected peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peak {
    /// The index of the peak in the input signal.
    pub index: usize,
    /// The topological prominence of the peak, in Q16.16.
    pub prominence: i32,
}

impl Peak {
    /// The prominence in native signal units. For diagnostics only.
    pub fn prominence_f32(&self) -> f32 {
        q16_to_f32(self.prominence)
    }
}

/// Returns the candidate with the largest prominence among those meeting
/// the prominence threshold. Ties go to the candidate that comes first.
///
/// # Panics
///
/// Panics if any index in `candidates` is not less than `signal.len()`.
pub fn select_prominent_peak(
    signal: &[i32],
    candidates: &[usize],
    config: &PeakConfig,
) -> Result<Peak, PeakError> {
    let mut best: Option<Peak> = None;
    for &index in candidates.iter() {
        let prominence = topological_prominence(signal, index);
        if prominence < config.prominence_threshold {
            continue;
        }
        let is_better = match best {
            Some(peak) => prominence > peak.prominence,
            None => true,
        };
        if is_better {
            best = Some(Peak { index, prominence });
        }
    }

    best.ok_or(PeakError::NoPeakFound)
}
