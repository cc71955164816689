use micro_peak::common::{convert_signal, Q16_ONE};
use micro_peak::peaks::{find_candidates, topological_prominence, PeakDetector, MAX_PEAKS, MAX_SIGNAL_LENGTH};
use micro_peak::{find_prominent_peak, find_prominent_peak_buffered, PeakConfig, PeakError};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SIGNALS: [&[i16]; 4] = [
    &[10, 30, 50, 70, 90, 70, 50, 30, 10],
    &[10, 40, 70, 80, 60, 40, 70, 100, 50, 20],
    &[0, 10, 5, 20, 5, 15, 0],
    &[10, 15, 20, 25, 20, 15, 10],
];

fn random_signal(rng: &mut StdRng, length: usize) -> Vec<i16> {
    (0..length).map(|_| rng.gen_range(-200..=200)).collect()
}

/// Candidates whose prominence meets `threshold`.
fn accepted(signal: &[i16], threshold: i32) -> Vec<usize> {
    let mut signal_q16 = [0; MAX_SIGNAL_LENGTH];
    convert_signal(signal, &mut signal_q16);
    let signal_q16 = &signal_q16[..signal.len()];
    let mut candidates = [0; MAX_PEAKS];
    let count = find_candidates(signal_q16, &PeakConfig::DEFAULT, &mut candidates).unwrap();
    candidates[..count]
        .iter()
        .copied()
        .filter(|index| topological_prominence(signal_q16, *index) >= threshold)
        .collect()
}

#[test]
fn test_deterministic() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut detector = PeakDetector::new();
    let mut signal_scratch = [0; MAX_SIGNAL_LENGTH];
    let mut candidate_scratch = [0; MAX_PEAKS];
    for _ in 0..50 {
        let signal = random_signal(&mut rng, 256);
        let first = find_prominent_peak(&signal, None);
        for _ in 0..3 {
            assert_eq!(find_prominent_peak(&signal, None), first);
            assert_eq!(detector.detect(&signal), first);
            assert_eq!(
                find_prominent_peak_buffered(&signal, None, &mut signal_scratch, &mut candidate_scratch),
                first
            );
        }
    }
}

#[test]
fn test_lowering_threshold_only_adds_peaks() {
    let mut rng = StdRng::seed_from_u64(2);
    let thresholds = [1000 * Q16_ONE, 100 * Q16_ONE, 10 * Q16_ONE, Q16_ONE, 0];
    for _ in 0..50 {
        let signal = random_signal(&mut rng, 128);
        let mut previous: Vec<usize> = Vec::new();
        for threshold in thresholds.iter() {
            let current = accepted(&signal, *threshold);
            assert!(previous.iter().all(|index| current.contains(index)));
            previous = current;
        }
    }
}

#[test]
fn test_lowering_threshold_keeps_a_peak() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let signal = random_signal(&mut rng, 128);
        let strict = PeakConfig::new().with_prominence_threshold(200 * Q16_ONE);
        if find_prominent_peak(&signal, Some(&strict)).is_ok() {
            assert!(find_prominent_peak(&signal, None).is_ok());
        }
    }
}

#[test]
fn test_mirrored_signal() {
    for signal in SIGNALS.iter() {
        let reversed: Vec<i16> = signal.iter().rev().copied().collect();
        let peak = find_prominent_peak(signal, None).unwrap();
        let mirrored = find_prominent_peak(&reversed, None).unwrap();
        assert_eq!(mirrored.index, signal.len() - 1 - peak.index);
        assert_eq!(mirrored.prominence, peak.prominence);
        assert_eq!(reversed[mirrored.index], signal[peak.index]);
    }
}

#[test]
fn test_mirrored_random_signals() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut forward = PeakDetector::new();
    let mut backward = PeakDetector::new();
    for _ in 0..500 {
        let signal = random_signal(&mut rng, 32);
        let reversed: Vec<i16> = signal.iter().rev().copied().collect();
        let last = signal.len() - 1;

        // Prominence does not depend on direction.
        for index in 0..signal.len() {
            assert_eq!(
                forward.prominence_as_real(&signal, index),
                backward.prominence_as_real(&reversed, last - index)
            );
        }

        let peak = forward.detect(&signal);
        let mirrored = backward.detect(&reversed);

        // The gradient test looks at the sample before each index, and ties go
        // to the first candidate, so the selected peak is only mirrored when
        // both scans see the same candidates and the best one is unique.
        let mut candidates: Vec<usize> = forward.candidates().to_vec();
        let mut mirrored_candidates: Vec<usize> = backward.candidates().iter().map(|index| last - index).collect();
        candidates.sort_unstable();
        mirrored_candidates.sort_unstable();
        if candidates != mirrored_candidates {
            continue;
        }
        let prominences: Vec<f32> = candidates
            .iter()
            .map(|index| forward.prominence_as_real(&signal, *index))
            .collect();
        let best = prominences.iter().cloned().fold(f32::MIN, f32::max);
        if prominences.iter().filter(|prominence| **prominence == best).count() > 1 {
            continue;
        }

        match (peak, mirrored) {
            (Ok(peak), Ok(mirrored)) => {
                assert_eq!(mirrored.index, last - peak.index);
                assert_eq!(mirrored.prominence, peak.prominence);
            }
            (peak, mirrored) => assert_eq!(peak.unwrap_err(), mirrored.unwrap_err()),
        }
    }
}

#[test]
fn test_no_peak_is_not_an_error() {
    let outcome = find_prominent_peak(&[50, 50, 50, 50, 50], None);
    assert!(outcome.unwrap_err().is_no_peak());
    let outcome = find_prominent_peak(&[10, 20], None);
    assert!(!outcome.unwrap_err().is_no_peak());
    assert_eq!(PeakError::NoPeakFound.to_string(), "no peak found");
}

#[test]
fn test_selected_peak_is_a_candidate() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut detector = PeakDetector::new();
    for _ in 0..50 {
        let signal = random_signal(&mut rng, 64);
        if let Ok(peak) = detector.detect(&signal) {
            assert!(detector.candidates().contains(&peak.index));
            assert!(peak.prominence >= Q16_ONE);
            let candidates = detector.candidates().to_vec();
            for index in candidates {
                let prominence = (detector.prominence_as_real(&signal, index) * Q16_ONE as f32) as i32;
                assert!(prominence <= peak.prominence);
            }
        }
    }
}
