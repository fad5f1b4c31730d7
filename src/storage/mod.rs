//! Configuration storage.

pub mod config;

pub use config::{ConfigError, ModelSettings, TrainloadConfig};
