//! Fitness / fatigue / form impulse-response model.
//!
//! Each day's training load is an impulse convolved with two decay kernels:
//! - Fitness: `exp(-k/42)` over the whole history, divided by the sum of
//!   the first 42 weights (fixed, even for shorter histories)
//! - Fatigue: `exp(-k/7)` over a trailing 7-day window, divided by the
//!   sum of the 7 window weights
//! - Form: fitness - fatigue

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::daily_load::{ActivityBucket, DailyLoadSeries};

/// Fitness, fatigue and form for one activity bucket, oldest day first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessFatigueFormSeries {
    /// Long-horizon accumulated training effect.
    pub fitness: Vec<f64>,
    /// Short-horizon trailing load.
    pub fatigue: Vec<f64>,
    /// Fitness minus fatigue.
    pub form: Vec<f64>,
}

impl FitnessFatigueFormSeries {
    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.fitness.len()
    }

    /// True when no days are covered.
    pub fn is_empty(&self) -> bool {
        self.fitness.is_empty()
    }

    /// Keep only the last `days` days. Zero keeps everything.
    pub fn trailing_days(&self, days: usize) -> Self {
        if days == 0 || days >= self.len() {
            return self.clone();
        }
        let start = self.len() - days;
        Self {
            fitness: self.fitness[start..].to_vec(),
            fatigue: self.fatigue[start..].to_vec(),
            form: self.form[start..].to_vec(),
        }
    }

    /// Keep only the last `weeks` weeks. Zero keeps everything.
    pub fn trailing_weeks(&self, weeks: usize) -> Self {
        self.trailing_days(weeks * 7)
    }
}

/// One day of model output together with its load and date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPerformance {
    /// Calendar day.
    pub date: NaiveDate,
    /// Training load recorded on the day.
    pub load: f64,
    /// Fitness at the end of the day.
    pub fitness: f64,
    /// Fatigue at the end of the day.
    pub fatigue: f64,
    /// Fitness minus fatigue.
    pub form: f64,
}

/// Model output for all three buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// The daily loads the model was run on.
    pub loads: DailyLoadSeries,
    /// All activities.
    pub combined: FitnessFatigueFormSeries,
    /// Cycling only.
    pub cycling: FitnessFatigueFormSeries,
    /// Running only.
    pub running: FitnessFatigueFormSeries,
}

impl PerformanceSummary {
    /// Get the series for one bucket.
    pub fn bucket(&self, bucket: ActivityBucket) -> &FitnessFatigueFormSeries {
        match bucket {
            ActivityBucket::Combined => &self.combined,
            ActivityBucket::Cycling => &self.cycling,
            ActivityBucket::Running => &self.running,
        }
    }

    /// Dated per-day records for one bucket.
    ///
    /// Stops at the shortest of the underlying sequences.
    pub fn daily_records(&self, bucket: ActivityBucket) -> Vec<DailyPerformance> {
        let series = self.bucket(bucket);
        self.loads
            .dates()
            .zip(self.loads.bucket(bucket))
            .zip(&series.fitness)
            .zip(&series.fatigue)
            .zip(&series.form)
            .map(|((((date, &load), &fitness), &fatigue), &form)| DailyPerformance {
                date,
                load,
                fitness,
                fatigue,
                form,
            })
            .collect()
    }
}

/// Impulse-response model with configurable horizons.
#[derive(Debug, Clone)]
pub struct ImpulseResponseModel {
    /// Fitness decay constant and normalizer length (default: 42 days).
    fitness_days: u32,
    /// Fatigue decay constant and window length (default: 7 days).
    fatigue_days: u32,
}

impl ImpulseResponseModel {
    /// Create with default constants (42/7 day).
    pub fn new() -> Self {
        Self {
            fitness_days: 42,
            fatigue_days: 7,
        }
    }

    /// Create with custom constants. Zero is raised to one day.
    pub fn with_constants(fitness_days: u32, fatigue_days: u32) -> Self {
        Self {
            fitness_days: fitness_days.max(1),
            fatigue_days: fatigue_days.max(1),
        }
    }

    /// Fitness time constant in days.
    pub fn fitness_days(&self) -> u32 {
        self.fitness_days
    }

    /// Fatigue window length in days.
    pub fn fatigue_days(&self) -> u32 {
        self.fatigue_days
    }

    /// Fitness weight for a load `k` days old.
    fn fitness_weight(&self, k: usize) -> f64 {
        (-(k as f64) / self.fitness_days as f64).exp()
    }

    /// Sum of the first `fitness_days` fitness weights.
    pub fn fitness_normalizer(&self) -> f64 {
        (0..self.fitness_days as usize)
            .map(|k| self.fitness_weight(k))
            .sum()
    }

    /// Fatigue window weights, oldest day first; the newest weight is 1.
    pub fn fatigue_weights(&self) -> Vec<f64> {
        let window = self.fatigue_days as usize;
        (0..window)
            .rev()
            .map(|x| (-(x as f64) / self.fatigue_days as f64).exp())
            .collect()
    }

    /// Causal fitness for each day.
    pub fn fitness(&self, loads: &[f64]) -> Vec<f64> {
        let weights: Vec<f64> = (0..loads.len()).map(|k| self.fitness_weight(k)).collect();
        let norm = self.fitness_normalizer();

        (0..loads.len())
            .map(|i| {
                let total: f64 = (0..=i).map(|k| loads[i - k] * weights[k]).sum();
                total / norm
            })
            .collect()
    }

    /// Trailing-window fatigue for each day.
    ///
    /// Days before the first one count as zero load.
    pub fn fatigue(&self, loads: &[f64]) -> Vec<f64> {
        let weights = self.fatigue_weights();
        let norm: f64 = weights.iter().sum();
        let window = weights.len();

        (0..loads.len())
            .map(|i| {
                // weights[j] applies to day i - (window - 1 - j)
                let total: f64 = weights
                    .iter()
                    .enumerate()
                    .filter_map(|(j, w)| {
                        (i + j + 1)
                            .checked_sub(window)
                            .map(|day| loads[day] * w)
                    })
                    .sum();
                total / norm
            })
            .collect()
    }

    /// Run the model on one bucket of daily loads.
    pub fn compute(&self, loads: &[f64]) -> FitnessFatigueFormSeries {
        let fitness = self.fitness(loads);
        let fatigue = self.fatigue(loads);
        let form = fitness
            .iter()
            .zip(&fatigue)
            .map(|(fit, fat)| fit - fat)
            .collect();

        FitnessFatigueFormSeries {
            fitness,
            fatigue,
            form,
        }
    }

    /// Run the model on every bucket. Buckets are computed in parallel.
    pub fn compute_all(&self, loads: &DailyLoadSeries) -> PerformanceSummary {
        if !self.has_full_fitness_window(loads.len()) {
            tracing::warn!(
                days = loads.len(),
                fitness_days = self.fitness_days,
                "History shorter than the fitness time constant; fitness is under-weighted"
            );
        }

        let (combined, (cycling, running)) = rayon::join(
            || self.compute(&loads.combined),
            || {
                rayon::join(
                    || self.compute(&loads.cycling),
                    || self.compute(&loads.running),
                )
            },
        );

        tracing::debug!(days = loads.len(), "Computed fitness/fatigue/form");

        PerformanceSummary {
            loads: loads.clone(),
            combined,
            cycling,
            running,
        }
    }

    /// Check if the history spans at least one full fitness normalizer.
    pub fn has_full_fitness_window(&self, days: usize) -> bool {
        days >= self.fitness_days as usize
    }
}

impl Default for ImpulseResponseModel {
    fn default() -> Self {
        Self::new()
    }
}
