//! Training load analytics.
//!
//! This module provides:
//! - Daily training load aggregation (combined, cycling, running)
//! - Fitness / fatigue / form impulse-response model

pub mod daily_load;
pub mod error;
pub mod training_load;

// Re-exports for convenience
pub use daily_load::{ActivityBucket, DailyLoadSeries};
pub use error::{AnalyticsError, AnalyticsResult};
pub use training_load::{
    DailyPerformance, FitnessFatigueFormSeries, ImpulseResponseModel, PerformanceSummary,
};
