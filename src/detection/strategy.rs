// Tue Jan 13 2026 - Alex

use crate::processing::stats::{mean, population_std_dev};

/// Decides whether a set of readings is anomalous. Empty input is never
/// anomalous, and implementations keep no state between calls.
pub trait DetectionStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn detect(&self, values: &[f64]) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreStrategy {
    threshold: f64,
}

impl ZScoreStrategy {
    pub const DEFAULT_THRESHOLD: f64 = 2.5;

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ZScoreStrategy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl DetectionStrategy for ZScoreStrategy {
    fn name(&self) -> &str {
        "zscore"
    }

    fn detect(&self, values: &[f64]) -> bool {
        let Some(mean) = mean(values) else {
            return false;
        };

        let std_dev = population_std_dev(values, mean);
        if std_dev == 0.0 {
            return false;
        }

        values
            .iter()
            .any(|v| ((v - mean) / std_dev).abs() > self.threshold)
    }
}

/// Flags any value below `min` or above `max`; the bounds themselves are fine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdStrategy {
    min: f64,
    max: f64,
}

impl ThresholdStrategy {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl DetectionStrategy for ThresholdStrategy {
    fn name(&self) -> &str {
        "threshold"
    }

    fn detect(&self, values: &[f64]) -> bool {
        values.iter().any(|v| *v < self.min || *v > self.max)
    }
}
