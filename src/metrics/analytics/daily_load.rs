//! Daily training load aggregation.
//!
//! Collapses an athlete's activity history into dense per-day load
//! sequences running from the oldest activity up to a reference date:
//! - combined ("cardio"): every activity
//! - cycling: cycling activities only
//! - running: running activities only
//!
//! Days without activities are present with zero load.

use std::collections::HashMap;

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{AnalyticsError, AnalyticsResult};
use crate::activity::{ActivityType, Athlete};

/// One of the three daily load sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityBucket {
    /// All activities ("cardio")
    #[default]
    Combined,
    /// Cycling only
    Cycling,
    /// Running only
    Running,
}

impl ActivityBucket {
    /// All buckets in output order.
    pub const ALL: [ActivityBucket; 3] = [
        ActivityBucket::Combined,
        ActivityBucket::Cycling,
        ActivityBucket::Running,
    ];
}

impl std::fmt::Display for ActivityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityBucket::Combined => write!(f, "cardio"),
            ActivityBucket::Cycling => write!(f, "cycling"),
            ActivityBucket::Running => write!(f, "running"),
        }
    }
}

/// Load totals for a single calendar day.
#[derive(Debug, Clone, Copy, Default)]
struct DayTotals {
    combined: f64,
    cycling: f64,
    running: f64,
}

/// Dense daily training load, oldest day first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLoadSeries {
    /// Date of index 0 (the oldest activity's day).
    pub start_date: NaiveDate,
    /// Load from every activity.
    pub combined: Vec<f64>,
    /// Load from cycling activities.
    pub cycling: Vec<f64>,
    /// Load from running activities.
    pub running: Vec<f64>,
}

impl DailyLoadSeries {
    /// Aggregate an athlete's history up to and including `reference_date`.
    ///
    /// # Errors
    ///
    /// - `NoActivityData` if the history is empty.
    /// - `InvalidActivityDate` if any activity is dated after `reference_date`.
    pub fn from_athlete(athlete: &Athlete, reference_date: NaiveDate) -> AnalyticsResult<Self> {
        let oldest = athlete
            .oldest_activity_date()
            .ok_or(AnalyticsError::NoActivityData)?;

        if let Some(future) = athlete
            .activity_history
            .iter()
            .find(|a| a.date > reference_date)
        {
            return Err(AnalyticsError::InvalidActivityDate {
                date: future.date,
                reference: reference_date,
            });
        }

        let mut by_day: HashMap<NaiveDate, DayTotals> = HashMap::new();
        for activity in &athlete.activity_history {
            let totals = by_day.entry(activity.date).or_default();
            totals.combined += activity.training_load;
            match activity.activity_type {
                ActivityType::Cycling => totals.cycling += activity.training_load,
                ActivityType::Running => totals.running += activity.training_load,
                ActivityType::Other(_) => {}
            }
        }

        let n_days = (reference_date - oldest).num_days() as usize;
        let mut combined = Vec::with_capacity(n_days + 1);
        let mut cycling = Vec::with_capacity(n_days + 1);
        let mut running = Vec::with_capacity(n_days + 1);

        for date in oldest.iter_days().take(n_days + 1) {
            let totals = by_day.get(&date).copied().unwrap_or_default();
            combined.push(totals.combined);
            cycling.push(totals.cycling);
            running.push(totals.running);
        }

        tracing::debug!(
            activities = athlete.activity_history.len(),
            active_days = by_day.len(),
            n_days,
            "Aggregated daily training load"
        );

        Ok(Self {
            start_date: oldest,
            combined,
            cycling,
            running,
        })
    }

    /// Aggregate an athlete's history up to the local current date.
    pub fn from_athlete_today(athlete: &Athlete) -> AnalyticsResult<Self> {
        Self::from_athlete(athlete, Local::now().date_naive())
    }

    /// Get the sequence for one bucket.
    pub fn bucket(&self, bucket: ActivityBucket) -> &[f64] {
        match bucket {
            ActivityBucket::Combined => &self.combined,
            ActivityBucket::Cycling => &self.cycling,
            ActivityBucket::Running => &self.running,
        }
    }

    /// Number of days in each sequence (`n_days + 1`).
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    /// Always false for a series built from a non-empty history.
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// Days between the oldest activity and the reference date.
    pub fn n_days(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// The reference date (last index).
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Duration::days(self.n_days() as i64)
    }

    /// Calendar dates aligned with the sequence indices.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start_date.iter_days().take(self.len())
    }
}
