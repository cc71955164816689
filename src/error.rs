use thiserror::Error;

/// Reasons peak detection did not produce a peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeakError {
    /// No candidate passed the shape filters, or none was prominent enough.
    /// This is a normal outcome, not a failure.
    #[error("no peak found")]
    NoPeakFound,
    /// The signal is empty or longer than `MAX_SIGNAL_LENGTH`, or a scratch
    /// buffer is missing or too short.
    #[error("invalid input")]
    InvalidInput,
    /// The signal has fewer than three samples.
    #[error("signal too short for peak detection")]
    BufferTooSmall,
}

impl PeakError {
    /// Returns true if this is the regular "no peak" outcome rather than
    /// an actual error.
    pub fn is_no_peak(&self) -> bool {
        *self == PeakError::NoPeakFound
    }

    /// The numeric result code of this outcome. Success is 0.
    pub fn code(&self) -> i32 {
        match self {
            PeakError::NoPeakFound => 1,
            PeakError::InvalidInput => 2,
            PeakError::BufferTooSmall => 3,
        }
    }
}
