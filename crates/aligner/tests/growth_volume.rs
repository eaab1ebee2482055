//! Integration test: growth + relative-volume features aligned with growth labels
//!
//! Tests the complete flow:
//! 1. Composer builds the G and V blocks with a bias column
//! 2. Growth labels look one session ahead
//! 3. Aligner trims both to the same decision dates

use chrono::NaiveDate;
use seshat_aligner::{GrowthVolumeConfig, labeled_features, labeled_growth_volume};
use seshat_core::{Error, TimeSeries, has_na};
use seshat_labels::GrowthLabel;

/// Volume = 1, 3, 5, ..; Adj Close = 2, 4, 6, ..
fn equity_data(n: usize) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2014, 1, 6).unwrap();
    let dates = start.iter_days().take(n).collect();
    let volume = (0..n).map(|i| 1.0 + 2.0 * i as f64).collect();
    let close = (0..n).map(|i| 2.0 + 2.0 * i as f64).collect();
    TimeSeries::new(
        dates,
        vec![
            ("Volume".to_string(), volume),
            ("Adj Close".to_string(), close),
        ],
    )
    .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_growth_volume_with_growth_labels() {
    let _ = env_logger::try_init();

    let data = equity_data(10);
    let config = GrowthVolumeConfig::default()
        .with_sessions(2)
        .with_averaging_interval(3);
    let label = GrowthLabel::new(1, "Adj Close");

    let aligned = labeled_growth_volume(&data, &config, &label).unwrap();
    let (features, labels) = (&aligned.features, &aligned.labels);

    assert_eq!(features.shape(), (5, 5));
    assert_eq!(labels.shape(), (5, 1));
    assert_eq!(features.columns(), &["Constant", "-1G", "0G", "-1V", "0V"]);
    assert_eq!(features.index(), labels.index());
    assert_eq!(features.index(), &data.dates()[4..9]);
    assert!(!has_na(features));
    assert!(!has_na(labels));

    for i in 0..5 {
        let x = i as f64;
        assert_eq!(features.get(i, 0), 1.0);
        assert_close(features.get(i, 1), (x + 4.0) / (x + 3.0));
        assert_close(features.get(i, 2), (x + 5.0) / (x + 4.0));
        assert_close(features.get(i, 3), (2.0 * x + 7.0) / (2.0 * x + 3.0));
        assert_close(features.get(i, 4), (2.0 * x + 9.0) / (2.0 * x + 5.0));
        assert_close(labels.get(i, 0), (x + 6.0) / (x + 5.0));
    }
}

#[test]
fn test_lengths_always_match() {
    for n_sessions in 1..=4 {
        for interval in 1..=3 {
            let data = equity_data(30);
            let config = GrowthVolumeConfig::default()
                .with_sessions(n_sessions)
                .with_averaging_interval(5);
            let aligned =
                labeled_growth_volume(&data, &config, &GrowthLabel::new(interval, "Adj Close"))
                    .unwrap();

            assert_eq!(aligned.features.n_rows(), aligned.labels.n_rows());
            assert_eq!(aligned.features.index(), aligned.labels.index());
            assert_eq!(aligned.len(), 30 - (5 + n_sessions - 1) - interval);
        }
    }
}

#[test]
fn test_history_too_short() {
    let config = GrowthVolumeConfig::default()
        .with_sessions(2)
        .with_averaging_interval(3);
    let label = GrowthLabel::new(1, "Adj Close");

    // warm-up 4 + trailing 1 consumes all 5 sessions
    assert!(matches!(
        labeled_growth_volume(&equity_data(5), &config, &label),
        Err(Error::Alignment(_))
    ));
    // the default one-year average cannot start at all
    assert!(matches!(
        labeled_growth_volume(&equity_data(100), &GrowthVolumeConfig::default(), &label),
        Err(Error::Alignment(_))
    ));
    assert_eq!(
        labeled_growth_volume(&equity_data(6), &config, &label)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_missing_column_propagates() {
    let config = GrowthVolumeConfig::default()
        .with_averaging_interval(3)
        .with_price_column("Close");
    let result = labeled_growth_volume(&equity_data(10), &config, &GrowthLabel::new(1, "Adj Close"));
    assert!(matches!(result, Err(Error::Column(_))));
}

#[test]
fn test_alignment_is_deterministic() {
    let data = equity_data(60);
    let composer = GrowthVolumeConfig::default()
        .with_sessions(3)
        .with_averaging_interval(10)
        .composer();
    let label = GrowthLabel::new(2, "Adj Close");

    let first = labeled_features(&data, &composer, &label).unwrap();
    let second = labeled_features(&data, &composer, &label).unwrap();

    let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(first.features.values()), bits(second.features.values()));
    assert_eq!(bits(first.labels.values()), bits(second.labels.values()));
}
