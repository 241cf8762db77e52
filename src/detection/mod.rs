// Tue Jan 13 2026 - Alex

pub mod detector;
pub mod strategy;

pub use detector::AnomalyDetector;
pub use strategy::{DetectionStrategy, ThresholdStrategy, ZScoreStrategy};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Zscore,
    Threshold,
}

impl StrategyKind {
    pub fn build(&self, z_threshold: f64, min: f64, max: f64) -> Box<dyn DetectionStrategy> {
        match self {
            StrategyKind::Zscore => Box::new(ZScoreStrategy::new(z_threshold)),
            StrategyKind::Threshold => Box::new(ThresholdStrategy::new(min, max)),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Zscore => write!(f, "zscore"),
            StrategyKind::Threshold => write!(f, "threshold"),
        }
    }
}
