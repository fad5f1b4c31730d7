//! Unit tests for daily training load aggregation.

use chrono::{Duration, NaiveDate};
use trainload::activity::{Activity, ActivityType, Athlete};
use trainload::metrics::analytics::{ActivityBucket, AnalyticsError, DailyLoadSeries};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

/// Deterministic pseudo-random history spread over `span` days.
fn generated_history(count: usize, span: i64) -> Athlete {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        state >> 33
    };

    let activities = (0..count)
        .map(|_| {
            let age = (next() % span as u64) as i64;
            let activity_type = match next() % 3 {
                0 => ActivityType::Running,
                1 => ActivityType::Cycling,
                _ => ActivityType::Other("hiking".to_string()),
            };
            // Whole-number loads keep the sums exact.
            let load = (next() % 150) as f64;
            Activity::new(today() - Duration::days(age), activity_type, load)
        })
        .collect();

    Athlete::new(activities)
}

#[test]
fn test_three_activity_scenario() {
    let athlete = Athlete::new(vec![
        Activity::new(today() - Duration::days(3), ActivityType::Running, 50.0),
        Activity::new(today() - Duration::days(1), ActivityType::Cycling, 30.0),
        Activity::new(today(), ActivityType::Running, 20.0),
    ]);

    let series = DailyLoadSeries::from_athlete(&athlete, today()).unwrap();

    assert_eq!(series.combined, vec![50.0, 0.0, 30.0, 20.0]);
    assert_eq!(series.running, vec![50.0, 0.0, 0.0, 20.0]);
    assert_eq!(series.cycling, vec![0.0, 0.0, 30.0, 0.0]);
}

#[test]
fn test_load_conservation() {
    for seed_count in [1, 5, 40, 200] {
        let athlete = generated_history(seed_count, 120);
        let series = DailyLoadSeries::from_athlete(&athlete, today()).unwrap();

        let combined: f64 = series.combined.iter().sum();
        let running: f64 = series.running.iter().sum();
        let cycling: f64 = series.cycling.iter().sum();

        assert_eq!(combined, athlete.total_load(None));
        assert_eq!(running, athlete.total_load(Some(&ActivityType::Running)));
        assert_eq!(cycling, athlete.total_load(Some(&ActivityType::Cycling)));
    }
}

#[test]
fn test_no_gaps() {
    let athlete = generated_history(30, 365);
    let oldest = athlete.oldest_activity_date().unwrap();
    let n_days = (today() - oldest).num_days() as usize;

    let series = DailyLoadSeries::from_athlete(&athlete, today()).unwrap();

    for bucket in ActivityBucket::ALL {
        assert_eq!(series.bucket(bucket).len(), n_days + 1);
    }
    assert_eq!(series.dates().count(), n_days + 1);
    assert_eq!(series.dates().last(), Some(today()));
}

#[test]
fn test_order_of_history_is_irrelevant() {
    let athlete = generated_history(50, 60);
    let mut reversed = athlete.clone();
    reversed.activity_history.reverse();

    assert_eq!(
        DailyLoadSeries::from_athlete(&athlete, today()),
        DailyLoadSeries::from_athlete(&reversed, today())
    );
}

#[test]
fn test_single_activity_today() {
    let athlete = Athlete::new(vec![Activity::new(today(), ActivityType::Running, 40.0)]);
    let series = DailyLoadSeries::from_athlete(&athlete, today()).unwrap();

    assert_eq!(series.n_days(), 0);
    assert_eq!(series.combined, vec![40.0]);
}

#[test]
fn test_empty_history_is_an_error() {
    let err = DailyLoadSeries::from_athlete(&Athlete::default(), today()).unwrap_err();
    assert_eq!(err, AnalyticsError::NoActivityData);
}
