use crate::common::{q16_from_f32, Q16_ONE};

/// Peak detection thresholds, all in Q16.16 and in the same scale
/// as the converted signal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakConfig {
    /// The minimum prominence a peak must have (inclusive).
    pub prominence_threshold: i32,
    /// The minimum magnitude of the gradient leading up to a candidate (inclusive).
    pub gradient_threshold: i32,
    /// Candidates must lie strictly above this level.
    pub noise_floor: i32,
}

impl PeakConfig {
    /// Prominence >= 1.0, gradient magnitude >= 0.1 and noise floor 10.0,
    /// in native signal units.
    pub const DEFAULT: PeakConfig = PeakConfig {
        prominence_threshold: Q16_ONE,
        gradient_threshold: Q16_ONE / 10,
        noise_floor: 10 * Q16_ONE,
    };

    pub const fn new() -> Self {
        PeakConfig::DEFAULT
    }

    /// Creates a config from thresholds given in native (unscaled) signal units.
    pub fn from_options(prominence_threshold: f32, gradient_threshold: f32, noise_floor: f32) -> Self {
        PeakConfig {
            prominence_threshold: q16_from_f32(prominence_threshold),
            gradient_threshold: q16_from_f32(gradient_threshold),
            noise_floor: q16_from_f32(noise_floor),
        }
    }

    pub fn with_prominence_threshold(mut self, prominence_threshold: i32) -> Self {
        self.prominence_threshold = prominence_threshold;
        self
    }

    pub fn with_gradient_threshold(mut self, gradient_threshold: i32) -> Self {
        self.gradient_threshold = gradient_threshold;
        self
    }

    pub fn with_noise_floor(mut self, noise_floor: i32) -> Self {
        self.noise_floor = noise_floor;
        self
    }
}

impl Default for PeakConfig {
    fn default() -> Self {
        PeakConfig::DEFAULT
    }
}
