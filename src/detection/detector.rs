// Tue Jan 13 2026 - Alex

use crate::detection::strategy::DetectionStrategy;

/// Holds the active strategy. Swapping takes `&mut self`, so it cannot
/// race with a detection in progress.
pub struct AnomalyDetector {
    strategy: Box<dyn DetectionStrategy>,
}

impl AnomalyDetector {
    pub fn new(strategy: Box<dyn DetectionStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn DetectionStrategy>) {
        log::debug!("Detection strategy {} -> {}", self.strategy.name(), strategy.name());
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn detect(&self, values: &[f64]) -> bool {
        self.strategy.detect(values)
    }
}

impl std::fmt::Debug for AnomalyDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnomalyDetector")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
