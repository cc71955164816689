use crate::common::{convert_signal, q16_to_f32};
use crate::error::PeakError;
use crate::peaks::candidates::find_candidates;
use crate::peaks::config::PeakConfig;
use crate::peaks::prominence::topological_prominence;
use crate::peaks::selection::{select_prominent_peak, Peak};

/// The maximum number of samples in a signal.
pub const MAX_SIGNAL_LENGTH: usize = 512;
/// The maximum number of peak candidates considered per signal.
pub const MAX_PEAKS: usize = 32;

/// Working memory for a single detection.
pub struct PeakScratch {
    /// The input signal in Q16.16.
    pub(crate) signal: [i32; MAX_SIGNAL_LENGTH],
    /// Candidate indices, valid up to `candidate_count`.
    pub(crate) candidates: [usize; MAX_PEAKS],
    candidate_count: usize,
}

impl PeakScratch {
    pub const fn new() -> Self {
        PeakScratch {
            signal: [0; MAX_SIGNAL_LENGTH],
            candidates: [0; MAX_PEAKS],
            candidate_count: 0,
        }
    }
}

impl Default for PeakScratch {
    fn default() -> Self {
        PeakScratch::new()
    }
}

/// Finds the most prominent peak in `signal`.
///
/// Uses the default config if `config` is `None`. Scratch memory is placed
/// on the stack, so this is safe to call from several threads at once.
pub fn find_prominent_peak(signal: &[i16], config: Option<&PeakConfig>) -> Result<Peak, PeakError> {
    let mut scratch = PeakScratch::new();
    find_prominent_peak_buffered(signal, config, &mut scratch.signal, &mut scratch.candidates)
}

/// Finds the most prominent peak in `signal`, using caller provided
/// scratch memory.
///
/// `signal_scratch` must hold at least `signal.len()` values. At most
/// `MAX_PEAKS` elements of `candidate_scratch` are used. When the
/// candidate scratch fills up, the remaining part of the signal is not
/// searched.
pub fn find_prominent_peak_buffered(
    signal: &[i16],
    config: Option<&PeakConfig>,
    signal_scratch: &mut [i32],
    candidate_scratch: &mut [usize],
) -> Result<Peak, PeakError> {
    let mut candidate_count = 0;
    detect_into(signal, config, signal_scratch, candidate_scratch, &mut candidate_count)
}

fn detect_into(
    signal: &[i16],
    config: Option<&PeakConfig>,
    signal_scratch: &mut [i32],
    candidate_scratch: &mut [usize],
    candidate_count: &mut usize,
) -> Result<Peak, PeakError> {
    *candidate_count = 0;
    let length = signal.len();
    if length == 0 || length > MAX_SIGNAL_LENGTH {
        return Err(PeakError::InvalidInput);
    }
    if signal_scratch.len() < length || candidate_scratch.is_empty() {
        return Err(PeakError::InvalidInput);
    }

    let config = config.unwrap_or(&PeakConfig::DEFAULT);

    let signal_q16 = &mut signal_scratch[..length];
    convert_signal(signal, signal_q16);

    let capacity = core::cmp::min(candidate_scratch.len(), MAX_PEAKS);
    let candidates = &mut candidate_scratch[..capacity];
    *candidate_count = find_candidates(signal_q16, config, candidates)?;
    log::debug!("Found {} peak candidates in {} samples", *candidate_count, length);
    if *candidate_count == 0 {
        return Err(PeakError::NoPeakFound);
    }

    let peak = select_prominent_peak(signal_q16, &candidates[..*candidate_count], config)?;
    log::debug!("Selected peak at index {} with prominence {}", peak.index, peak.prominence);
    Ok(peak)
}

/// Returns the prominence of the sample at `index` in native signal units.
///
/// For diagnostics only. Returns 0 if `signal` is empty or too long, or if
/// `index` is out of bounds.
pub fn peak_prominence_as_real(signal: &[i16], index: usize) -> f32 {
    let mut scratch = PeakScratch::new();
    prominence_with_scratch(signal, index, &mut scratch.signal)
}

fn prominence_with_scratch(signal: &[i16], index: usize, signal_scratch: &mut [i32]) -> f32 {
    let length = signal.len();
    if length == 0 || length > MAX_SIGNAL_LENGTH || index >= length {
        return 0.0;
    }
    let signal_q16 = &mut signal_scratch[..length];
    convert_signal(signal, signal_q16);
    q16_to_f32(topological_prominence(signal_q16, index))
}

/// A reusable peak detector owning its config and scratch memory.
///
/// Each instance is independent. Keep one per thread, or one per
/// call site, instead of sharing a global one.
pub struct PeakDetector {
    config: PeakConfig,
    scratch: PeakScratch,
}

impl PeakDetector {
    pub const fn new() -> Self {
        PeakDetector::from_config(PeakConfig::DEFAULT)
    }

    pub const fn from_config(config: PeakConfig) -> Self {
        PeakDetector {
            config,
            scratch: PeakScratch::new(),
        }
    }

    pub fn config(&self) -> &PeakConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PeakConfig) {
        self.config = config;
    }

    /// Finds the most prominent peak in `signal` using the current config.
    pub fn detect(&mut self, signal: &[i16]) -> Result<Peak, PeakError> {
        self.detect_with_config(signal, None)
    }

    /// Like [detect](#method.detect), with an optional config overriding the
    /// detector's own for this call.
    pub fn detect_with_config(&mut self, signal: &[i16], config: Option<&PeakConfig>) -> Result<Peak, PeakError> {
        let config = config.unwrap_or(&self.config);
        let scratch = &mut self.scratch;
        detect_into(
            signal,
            Some(config),
            &mut scratch.signal,
            &mut scratch.candidates,
            &mut scratch.candidate_count,
        )
    }

    /// The candidates found by the most recent call to `detect`.
    pub fn candidates(&self) -> &[usize] {
        &self.scratch.candidates[..self.scratch.candidate_count]
    }

    /// See [peak_prominence_as_real](fn.peak_prominence_as_real.html).
    pub fn prominence_as_real(&mut self, signal: &[i16], index: usize) -> f32 {
        prominence_with_scratch(signal, index, &mut self.scratch.signal)
    }
}

impl Default for PeakDetector {
    fn default() -> Self {
        PeakDetector::new()
    }
}
