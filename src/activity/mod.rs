//! Activity history and per-activity heart-rate samples.

pub mod types;

pub use types::{Activity, ActivityType, Athlete, HeartRateSeries};
