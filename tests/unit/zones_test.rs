//! Unit tests for heart rate zone time aggregation.

use trainload::activity::HeartRateSeries;
use trainload::metrics::analytics::AnalyticsError;
use trainload::metrics::zones::{HeartRateZoneConfig, ZoneTimeAggregator, HR_ZONE_NAMES};

fn five_sample_series() -> HeartRateSeries {
    HeartRateSeries::new(vec![100, 120, 160, 170, 110], vec![1.0, 10.0, 10.0, 5.0, 5.0])
}

#[test]
fn test_five_sample_scenario() {
    let aggregator = ZoneTimeAggregator::new(HeartRateZoneConfig::new([113, 150, 168, 187], 195)).unwrap();
    let dist = aggregator.aggregate(&five_sample_series()).unwrap();

    assert_eq!(dist.edges, [90, 113, 150, 168, 187, 195]);

    // [90, 113) holds only the 100 and 110 samples: 1s + 5s.
    assert!((dist.zone_minutes[0] - 6.0 / 60.0).abs() < 1e-12);
    assert!((dist.zone_minutes[1] - 10.0 / 60.0).abs() < 1e-12);
    assert!((dist.zone_minutes[2] - 10.0 / 60.0).abs() < 1e-12);
    assert!((dist.zone_minutes[3] - 5.0 / 60.0).abs() < 1e-12);
    assert_eq!(dist.zone_minutes[4], 0.0);

    assert!((dist.total_minutes() - 31.0 / 60.0).abs() < 1e-12);
}

#[test]
fn test_bpm_curve_covers_observed_range() {
    let aggregator = ZoneTimeAggregator::default();
    let dist = aggregator.aggregate(&five_sample_series()).unwrap();

    assert_eq!(dist.bpm.first(), Some(&100));
    assert_eq!(dist.bpm.last(), Some(&170));
    assert_eq!(dist.bpm.len(), 71);
    assert_eq!(dist.bpm_minutes.len(), dist.bpm.len());

    let at = |bpm: u8| dist.bpm_minutes[(bpm - 100) as usize];
    assert!((at(120) - 10.0 / 60.0).abs() < 1e-12);
    assert!((at(110) - 5.0 / 60.0).abs() < 1e-12);
    assert_eq!(at(101), 0.0);
}

#[test]
fn test_histogram_total_matches_elapsed_time() {
    let heart_rates: Vec<u8> = (0..600).map(|i| 95 + (i % 100) as u8).collect();
    let time_deltas: Vec<f64> = (0..600).map(|i| 1.0 + (i % 4) as f64 * 0.5).collect();
    let expected: f64 = time_deltas.iter().sum::<f64>() / 60.0;

    let dist = ZoneTimeAggregator::default()
        .aggregate(&HeartRateSeries::new(heart_rates, time_deltas))
        .unwrap();

    assert!((dist.total_minutes() - expected).abs() < 1e-9);
}

#[test]
fn test_moving_mask_excludes_stopped_samples() {
    let series = five_sample_series().with_moving_mask(vec![true, true, false, false, true]);
    let dist = ZoneTimeAggregator::default().aggregate(&series).unwrap();

    assert!((dist.total_minutes() - 16.0 / 60.0).abs() < 1e-12);
    assert_eq!(dist.bpm.last(), Some(&120));
}

#[test]
fn test_mask_shape_mismatch() {
    let series = five_sample_series().with_moving_mask(vec![true, true]);

    assert!(matches!(
        ZoneTimeAggregator::default().aggregate(&series),
        Err(AnalyticsError::ShapeMismatch { field: "moving", expected: 5, actual: 2 })
    ));
}

#[test]
fn test_zone_listing() {
    let dist = ZoneTimeAggregator::default()
        .aggregate(&five_sample_series())
        .unwrap();

    let zones: Vec<_> = dist.zones().collect();
    assert_eq!(zones.len(), 5);
    assert_eq!(zones[0].0, HR_ZONE_NAMES[0]);
    assert_eq!((zones[2].1, zones[2].2), (150, 168));
    assert_eq!(dist.minutes_in_zone(4), Some(dist.zone_minutes[3]));
    assert_eq!(dist.minutes_in_zone(6), None);
}

#[test]
fn test_zone_colouring_trace() {
    let config = HeartRateZoneConfig::default();
    let trace = HeartRateSeries::new(vec![100, 170, 190], vec![1.0, 2.0, 1.0])
        .per_second_trace()
        .unwrap();

    let zones: Vec<u8> = trace.iter().map(|&bpm| config.zone_for(bpm)).collect();
    assert_eq!(zones, vec![1, 4, 4, 5]);
}
