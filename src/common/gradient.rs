/// Computes the numerical gradient of a Q16.16 signal at `index`.
///
/// Uses a forward difference at the first sample, a backward difference
/// at the last sample and a central difference everywhere else. The central
/// difference is halved using an arithmetic right shift, so negative odd
/// differences round toward negative infinity.
///
/// # Panics
///
/// Panics if `signal` has fewer than two samples or `index` is out of bounds.
pub fn gradient_at(signal: &[i32], index: usize) -> i32 {
    let last = signal.len() - 1;
    if index == 0 {
        signal[1].saturating_sub(signal[0])
    } else if index == last {
        signal[last].saturating_sub(signal[last - 1])
    } else {
        // Half of an i32 difference always fits in an i32.
        ((signal[index + 1] as i64 - signal[index - 1] as i64) >> 1) as i32
    }
}
