//! Activity records consumed by the analytics core.
//!
//! These are produced by a loading layer (GPX/TCX parsing, training load
//! scoring) and are read-only here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics::analytics::error::{AnalyticsError, AnalyticsResult};

/// Kind of activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Running (road, trail, treadmill)
    Running,
    /// Cycling (road, indoor, mountain)
    Cycling,
    /// Anything else; counted only as generic cardio
    Other(String),
}

impl ActivityType {
    /// Parse a loader-supplied type label.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "running" => ActivityType::Running,
            "cycling" => ActivityType::Cycling,
            other => ActivityType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::Running => write!(f, "running"),
            ActivityType::Cycling => write!(f, "cycling"),
            ActivityType::Other(label) => write!(f, "{}", label),
        }
    }
}

/// A single completed activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Calendar day the activity took place
    pub date: NaiveDate,
    /// Activity type
    pub activity_type: ActivityType,
    /// Precomputed training load (non-negative)
    pub training_load: f64,
}

impl Activity {
    /// Create a new activity.
    pub fn new(date: NaiveDate, activity_type: ActivityType, training_load: f64) -> Self {
        Self {
            date,
            activity_type,
            training_load,
        }
    }
}

/// An athlete and their full activity history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Athlete {
    /// Activities in no particular order; several may share a date.
    pub activity_history: Vec<Activity>,
}

impl Athlete {
    /// Create an athlete from a list of activities.
    pub fn new(activity_history: Vec<Activity>) -> Self {
        Self { activity_history }
    }

    /// Record another activity.
    pub fn add_activity(&mut self, activity: Activity) {
        self.activity_history.push(activity);
    }

    /// Date of the oldest activity, if any.
    pub fn oldest_activity_date(&self) -> Option<NaiveDate> {
        self.activity_history.iter().map(|a| a.date).min()
    }

    /// Sum of all training loads, optionally restricted to one type.
    pub fn total_load(&self, activity_type: Option<&ActivityType>) -> f64 {
        self.activity_history
            .iter()
            .filter(|a| activity_type.map_or(true, |t| &a.activity_type == t))
            .map(|a| a.training_load)
            .sum()
    }
}

/// Heart-rate samples recorded during one activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeartRateSeries {
    /// Heart rate per sample in BPM
    pub heart_rates: Vec<u8>,
    /// Seconds elapsed since the previous sample
    pub time_deltas: Vec<f64>,
    /// Which samples were recorded while moving; `None` keeps every sample.
    pub moving: Option<Vec<bool>>,
}

impl HeartRateSeries {
    /// Create a series without a movement mask.
    pub fn new(heart_rates: Vec<u8>, time_deltas: Vec<f64>) -> Self {
        Self {
            heart_rates,
            time_deltas,
            moving: None,
        }
    }

    /// Attach a movement mask.
    pub fn with_moving_mask(mut self, moving: Vec<bool>) -> Self {
        self.moving = Some(moving);
        self
    }

    /// Return the moving samples as `(heart_rates, time_deltas)`.
    ///
    /// Fails if any of the three sequences disagree in length.
    pub fn moving_samples(&self) -> AnalyticsResult<(Vec<u8>, Vec<f64>)> {
        if self.time_deltas.len() != self.heart_rates.len() {
            return Err(AnalyticsError::ShapeMismatch {
                field: "time_deltas",
                expected: self.heart_rates.len(),
                actual: self.time_deltas.len(),
            });
        }

        match &self.moving {
            None => Ok((self.heart_rates.clone(), self.time_deltas.clone())),
            Some(mask) => {
                if mask.len() != self.heart_rates.len() {
                    return Err(AnalyticsError::ShapeMismatch {
                        field: "moving",
                        expected: self.heart_rates.len(),
                        actual: mask.len(),
                    });
                }
                Ok(self
                    .heart_rates
                    .iter()
                    .zip(&self.time_deltas)
                    .zip(mask)
                    .filter(|(_, keep)| **keep)
                    .map(|((&hr, &dt), _)| (hr, dt))
                    .unzip())
            }
        }
    }

    /// Expand the moving samples into one heart-rate value per second.
    ///
    /// The first sample is emitted once; every later sample is repeated
    /// for the whole seconds of its time delta.
    pub fn per_second_trace(&self) -> AnalyticsResult<Vec<u8>> {
        let (heart_rates, time_deltas) = self.moving_samples()?;
        let Some(&first) = heart_rates.first() else {
            return Ok(Vec::new());
        };

        let mut trace = vec![first];
        for (&hr, &dt) in heart_rates.iter().zip(&time_deltas).skip(1) {
            let repeats = if dt.is_finite() && dt > 0.0 { dt.trunc() as usize } else { 0 };
            trace.extend(std::iter::repeat(hr).take(repeats));
        }
        Ok(trace)
    }
}
