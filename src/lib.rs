//! Trainload - training load, fitness/fatigue/form and heart rate zone analytics.
//!
//! Turns an athlete's activity history into dense daily load sequences,
//! runs an impulse-response model over them, and bins single activities'
//! heart rate samples into zone time. All computations are pure; loading
//! activities and rendering results are left to the caller.

pub mod activity;
pub mod metrics;
pub mod storage;

// Re-export commonly used types
pub use activity::{Activity, ActivityType, Athlete, HeartRateSeries};
pub use metrics::analytics::{
    ActivityBucket, AnalyticsError, DailyLoadSeries, FitnessFatigueFormSeries,
    ImpulseResponseModel, PerformanceSummary,
};
pub use metrics::zones::{HeartRateZoneConfig, ZoneTimeAggregator, ZoneTimeDistribution};
pub use storage::config::TrainloadConfig;
