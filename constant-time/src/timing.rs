//! Statistical timing harness shared by the `constant_time_tests`
//!
//! Only compiled for tests with the `constant_time_tests` feature; the tests take minutes and are
//! noisy on shared machines.

use rand::seq::SliceRandom;
use rand::thread_rng;
use std::time::Duration;

/// Runs `measure` `n` times, half of the runs with `true` and half with `false`, in random order,
/// and asserts that the secret class does not correlate with the measured duration
/// (absolute Pearson correlation coefficient below 0.01).
pub(crate) fn assert_uncorrelated(n: usize, mut measure: impl FnMut(bool) -> Duration) {
    // Each element is a tuple of:
    // 0: the secret class passed to `measure`
    // 1: the duration it reported
    let mut tests = (0..n)
        .map(|i| (i < n / 2, Duration::ZERO))
        .collect::<Vec<_>>();
    tests.shuffle(&mut thread_rng());

    for test in tests.iter_mut() {
        test.1 = measure(test.0);
    }

    let tests = tests
        .iter()
        .map(|t| (if t.0 { 1_f64 } else { 0_f64 }, t.1.as_nanos() as f64))
        .collect::<Vec<_>>();
    // averages
    let (avg_x, avg_y): (f64, f64) = (
        tests.iter().map(|t| t.0).sum::<f64>() / n as f64,
        tests.iter().map(|t| t.1).sum::<f64>() / n as f64,
    );
    assert!((avg_x - 0.5).abs() < 1E-12);
    // standard deviations
    let sd_x = 0.5;
    let sd_y = (1_f64 / n as f64
        * tests
            .iter()
            .map(|t| {
                let difference = t.1 - avg_y;
                difference * difference
            })
            .sum::<f64>())
    .sqrt();
    // covariance
    let cv = 1_f64 / n as f64
        * tests
            .iter()
            .map(|t| (t.0 - avg_x) * (t.1 - avg_y))
            .sum::<f64>();
    // Pearson correlation
    let correlation = cv / (sd_x * sd_y);
    println!("correlation: {:.6?}", correlation);
    #[cfg(not(coverage))]
    assert!(
        correlation.abs() < 0.01,
        "execution time correlates with the secret"
    )
}
