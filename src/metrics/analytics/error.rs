//! Analytics error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during analytics calculations.
#[derive(Debug, Error, PartialEq)]
pub enum AnalyticsError {
    /// The athlete has no recorded activities.
    #[error("No activity data: activity history is empty")]
    NoActivityData,

    /// Parallel sequences disagree in length.
    #[error("Shape mismatch: {field} has {actual} entries, expected {expected}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Zone boundaries are not strictly ascending.
    #[error("Invalid zone configuration: {0}")]
    InvalidZoneConfiguration(String),

    /// An activity is dated after the reference date.
    #[error("Invalid activity date: {date} is after reference date {reference}")]
    InvalidActivityDate { date: NaiveDate, reference: NaiveDate },
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
