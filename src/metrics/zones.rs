//! Heart rate zones and time-in-zone aggregation.
//!
//! Zones are defined by four ascending thresholds. For a single activity the
//! aggregator produces:
//! - minutes spent in each of the 5 zones (a time-weighted histogram)
//! - minutes spent at every integer BPM between the observed extremes

use serde::{Deserialize, Serialize};

use crate::activity::HeartRateSeries;
use crate::metrics::analytics::error::{AnalyticsError, AnalyticsResult};

/// Zone names, lowest first.
pub const HR_ZONE_NAMES: [&str; 5] = ["Recovery", "Aerobic", "Tempo", "Threshold", "Maximum"];

/// Athlete-specific heart rate zone boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartRateZoneConfig {
    /// Lower bounds of zones 2-5 in BPM, strictly ascending
    pub thresholds: [u8; 4],
    /// Ceiling used when the activity never reaches it
    pub max_hr: u8,
    /// Floor used when the activity never drops below it
    pub floor_hr: u8,
}

impl Default for HeartRateZoneConfig {
    fn default() -> Self {
        Self {
            thresholds: [113, 150, 168, 187],
            max_hr: 195,
            floor_hr: 90,
        }
    }
}

impl HeartRateZoneConfig {
    /// Create zones from thresholds and a max heart rate, with the default floor.
    pub fn new(thresholds: [u8; 4], max_hr: u8) -> Self {
        Self {
            thresholds,
            max_hr,
            ..Default::default()
        }
    }

    /// Check that the thresholds are strictly ascending.
    ///
    /// Floor and max heart rate are fallbacks widened by the observed
    /// extremes, so they are only checked against real data in
    /// [`ZoneTimeAggregator::aggregate`].
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(AnalyticsError::InvalidZoneConfiguration(format!(
                "thresholds must be strictly ascending, got {:?}",
                self.thresholds
            )));
        }
        Ok(())
    }

    /// Get the zone (1-5) for a single heart rate sample.
    pub fn zone_for(&self, bpm: u8) -> u8 {
        1 + self.thresholds.iter().filter(|&&t| bpm >= t).count() as u8
    }

    /// Histogram edges for an activity with the given observed extremes.
    pub fn edges_for(&self, observed_min: u8, observed_max: u8) -> [u8; 6] {
        let [z1, z2, z3, z4] = self.thresholds;
        [
            observed_min.min(self.floor_hr),
            z1,
            z2,
            z3,
            z4,
            observed_max.max(self.max_hr),
        ]
    }
}

/// Time spent in each heart rate zone during one activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTimeDistribution {
    /// Bin edges; zone `k` spans `edges[k]..edges[k + 1]`
    pub edges: [u8; 6],
    /// Minutes per zone
    pub zone_minutes: [f64; 5],
    /// Every integer BPM from the observed minimum to maximum
    pub bpm: Vec<u8>,
    /// Minutes spent at exactly the matching BPM
    pub bpm_minutes: Vec<f64>,
}

impl ZoneTimeDistribution {
    /// Total minutes across all zones.
    pub fn total_minutes(&self) -> f64 {
        self.zone_minutes.iter().sum()
    }

    /// Minutes for a zone number (1-5).
    pub fn minutes_in_zone(&self, zone: u8) -> Option<f64> {
        match zone {
            1..=5 => Some(self.zone_minutes[zone as usize - 1]),
            _ => None,
        }
    }

    /// Zones as `(name, lower_bpm, upper_bpm, minutes)`.
    pub fn zones(&self) -> impl Iterator<Item = (&'static str, u8, u8, f64)> + '_ {
        HR_ZONE_NAMES
            .iter()
            .enumerate()
            .map(|(k, &name)| (name, self.edges[k], self.edges[k + 1], self.zone_minutes[k]))
    }
}

/// Bins one activity's heart rate samples into zone time.
#[derive(Debug, Clone, Default)]
pub struct ZoneTimeAggregator {
    config: HeartRateZoneConfig,
}

impl ZoneTimeAggregator {
    /// Create an aggregator, rejecting non-ascending thresholds.
    pub fn new(config: HeartRateZoneConfig) -> AnalyticsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Zone configuration in use.
    pub fn config(&self) -> &HeartRateZoneConfig {
        &self.config
    }

    /// Aggregate the moving samples of one activity.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if heart rates, time deltas and the movement mask
    ///   disagree in length.
    /// - `InvalidZoneConfiguration` if the observed extremes leave the edges
    ///   decreasing (e.g. a max heart rate below z4 that the activity never
    ///   reaches). Equal edges are allowed and give an empty zone.
    pub fn aggregate(&self, series: &HeartRateSeries) -> AnalyticsResult<ZoneTimeDistribution> {
        let (heart_rates, time_deltas) = series.moving_samples()?;

        let (Some(&min_hr), Some(&max_hr)) = (heart_rates.iter().min(), heart_rates.iter().max())
        else {
            return Ok(ZoneTimeDistribution {
                edges: self.config.edges_for(self.config.floor_hr, self.config.max_hr),
                zone_minutes: [0.0; 5],
                bpm: Vec::new(),
                bpm_minutes: Vec::new(),
            });
        };

        let edges = self.config.edges_for(min_hr, max_hr);
        if edges.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(AnalyticsError::InvalidZoneConfiguration(format!(
                "zone edges {:?} decrease for observed range {}-{}",
                edges, min_hr, max_hr
            )));
        }

        let mut zone_minutes = [0.0; 5];
        let mut bpm_minutes = vec![0.0; (max_hr - min_hr) as usize + 1];

        for (i, (&hr, &dt)) in heart_rates.iter().zip(&time_deltas).enumerate() {
            // The first delta has no preceding sample to measure from.
            if i == 0 || dt.is_finite() {
                let weight = if i == 0 { 1.0 } else { dt };
                let zone = edges[1..5].iter().filter(|&&e| hr >= e).count();
                zone_minutes[zone] += weight / 60.0;
            }

            if dt.is_finite() {
                bpm_minutes[(hr - min_hr) as usize] += dt / 60.0;
            }
        }

        tracing::debug!(
            samples = heart_rates.len(),
            ?edges,
            "Aggregated heart rate zone time"
        );

        Ok(ZoneTimeDistribution {
            edges,
            zone_minutes,
            bpm: (min_hr..=max_hr).collect(),
            bpm_minutes,
        })
    }
}
