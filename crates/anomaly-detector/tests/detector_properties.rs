//! Property-based tests for the stream detector

mod common;

use anomaly_core::{AnomalyKind, Sample};
use common::*;
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = (f64, f64, usize)> {
    (0.01f64..=1.0, 0.5f64..5.0, 1usize..40)
}

proptest! {
    // Property: window length equals min(samples seen, window_size)
    #[test]
    fn prop_window_length_bounded(
        (alpha, threshold, window_size) in config_strategy(),
        values in prop::collection::vec(-1e4..1e4, 0..200)
    ) {
        let mut det = detector(alpha, threshold, window_size);
        for (seen, sample) in indexed(&values).into_iter().enumerate() {
            det.ingest(sample).unwrap();
            prop_assert_eq!(det.window().len(), (seen + 1).min(window_size));
        }
    }

    // Property: reported stddev is the population stddev of the window tail
    #[test]
    fn prop_rolling_std_matches_reference(
        (alpha, threshold, window_size) in config_strategy(),
        values in prop::collection::vec(-1e3..1e3, 1..150)
    ) {
        let mut det = detector(alpha, threshold, window_size);
        for (i, sample) in indexed(&values).into_iter().enumerate() {
            let result = det.ingest(sample).unwrap();
            let start = (i + 1).saturating_sub(window_size);
            let expected = reference_stddev(&values[start..=i]);
            prop_assert!((result.rolling_std - expected).abs() < EPSILON);
        }
    }

    // Property: the first result's EMA is the first value, bit for bit
    #[test]
    fn prop_first_ema_is_first_value(
        (alpha, threshold, window_size) in config_strategy(),
        value in -1e9..1e9
    ) {
        let mut det = detector(alpha, threshold, window_size);
        let result = det.ingest(Sample::new(0, value)).unwrap();
        prop_assert_eq!(result.ema.to_bits(), value.to_bits());
    }

    // Property: identical input gives identical output
    #[test]
    fn prop_deterministic(
        (alpha, threshold, window_size) in config_strategy(),
        values in prop::collection::vec(-1e3..1e3, 0..150)
    ) {
        let mut a = detector(alpha, threshold, window_size);
        let mut b = detector(alpha, threshold, window_size);
        let ra: Vec<_> = a.detect_iter(indexed(&values)).collect::<Result<_, _>>().unwrap();
        let rb: Vec<_> = b.detect_iter(indexed(&values)).collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(ra, rb);
    }

    // Property: a rejected sample leaves no trace on later results
    #[test]
    fn prop_rejected_sample_is_invisible(
        (alpha, threshold, window_size) in config_strategy(),
        values in prop::collection::vec(-1e3..1e3, 2..100),
        reject_at in 1usize..100,
        use_nan in any::<bool>()
    ) {
        let reject_at = reject_at % values.len();
        let samples = indexed(&values);

        let mut clean = detector(alpha, threshold, window_size);
        let expected: Vec<_> = clean.detect_iter(samples.clone()).collect::<Result<_, _>>().unwrap();

        let mut noisy = detector(alpha, threshold, window_size);
        let mut actual = Vec::new();
        for (i, sample) in samples.into_iter().enumerate() {
            if i == reject_at {
                let bad = if use_nan || i == 0 {
                    Sample::new(sample.index, f64::NAN)
                } else {
                    // Repeats the previous index
                    Sample::new(sample.index - 1, sample.value)
                };
                prop_assert!(noisy.ingest(bad).unwrap_err().is_sample_error());
            }
            actual.push(noisy.ingest(sample).unwrap());
        }
        prop_assert_eq!(actual, expected);
    }

    // Property: a zero-variance window never trips rule A, and rule B trips
    // exactly when the value and the EMA differ
    #[test]
    fn prop_zero_variance_rules(
        alpha in 0.01f64..=1.0,
        threshold in 0.1f64..5.0,
        window_size in 1usize..20,
        value in -1e3..1e3,
        run in 0usize..40
    ) {
        let mut det = detector(alpha, threshold, window_size);
        for i in 0..(window_size + run) {
            let result = det.ingest(Sample::new(i as u64, value)).unwrap();
            prop_assert_eq!(result.rolling_std, 0.0);
            prop_assert!(!result.has_flag(AnomalyKind::ZScore));
            prop_assert_eq!(result.has_flag(AnomalyKind::EmaDeviation), value != result.ema);
        }
    }
}
