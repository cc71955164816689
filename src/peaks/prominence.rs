/// Computes the [topological prominence](https://en.wikipedia.org/wiki/Topographic_prominence)
/// of the sample at `peak_index`, compatible with MATLAB's `findpeaks`.
///
/// Walks outward in both directions until reaching a sample at least as
/// high as the peak, or the end of the signal, keeping track of the lowest
/// sample passed on the way. The reference level is the higher of the two
/// minima, i.e the key col on the less generous side. The prominence is the
/// height of the peak above that level.
///
/// The result is zero for samples that do not stand above a neighbor.
///
/// # Panics
///
/// Panics if `peak_index` is not less than `signal.len()`.
pub fn topological_prominence(signal: &[i32], peak_index: usize) -> i32 {
    let peak_value = signal[peak_index];

    let left_min = contour_min(signal[..peak_index].iter().rev(), peak_value);
    let right_min = contour_min(signal[peak_index + 1..].iter(), peak_value);

    let reference_level = core::cmp::max(left_min, right_min);
    peak_value.saturating_sub(reference_level)
}

/// The minimum of `samples` up to, and not including, the first sample
/// that is not below `peak_value`.
fn contour_min<'a, I>(samples: I, peak_value: i32) -> i32
where
    I: Iterator<Item = &'a i32>,
{
    samples
        .take_while(|value| **value < peak_value)
        .fold(peak_value, |min, value| core::cmp::min(min, *value))
}
