//! Metrics module for training load and heart rate zones.

pub mod analytics;
pub mod zones;

pub use zones::{HeartRateZoneConfig, ZoneTimeAggregator, ZoneTimeDistribution};

// Re-export key analytics types for convenience
pub use analytics::{
    ActivityBucket, AnalyticsError, AnalyticsResult, DailyLoadSeries, DailyPerformance,
    FitnessFatigueFormSeries, ImpulseResponseModel, PerformanceSummary,
};
