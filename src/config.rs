// Tue Jan 13 2026 - Alex

use crate::detection::{DetectionStrategy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// Written to JSON as whole milliseconds; sub-millisecond parts are truncated
// on save only.
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(interval: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(interval.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Settings for one run. Built once (defaults, file, then `with_*`
/// overrides) and read-only once handed to the coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    buffer_size: usize,
    max_sensors: usize,
    anomaly_threshold: f64,
    #[serde(rename = "poll_interval_ms", with = "millis")]
    poll_interval: Duration,
    iterations: usize,
    strategy: StrategyKind,
    threshold_min: f64,
    threshold_max: f64,
    alert_log: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 100,
            max_sensors: 50,
            anomaly_threshold: 2.5,
            poll_interval: Duration::from_millis(500),
            iterations: 10,
            strategy: StrategyKind::Zscore,
            threshold_min: 0.0,
            threshold_max: 100.0,
            alert_log: "alerts.log".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_max_sensors(mut self, max_sensors: usize) -> Self {
        self.max_sensors = max_sensors;
        self
    }

    pub fn with_anomaly_threshold(mut self, threshold: f64) -> Self {
        self.anomaly_threshold = threshold;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_threshold_bounds(mut self, min: f64, max: f64) -> Self {
        self.threshold_min = min;
        self.threshold_max = max;
        self
    }

    pub fn with_alert_log(mut self, alert_log: &str) -> Self {
        self.alert_log = alert_log.to_string();
        self
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn max_sensors(&self) -> usize {
        self.max_sensors
    }

    pub fn anomaly_threshold(&self) -> f64 {
        self.anomaly_threshold
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn threshold_bounds(&self) -> (f64, f64) {
        (self.threshold_min, self.threshold_max)
    }

    pub fn alert_log(&self) -> &str {
        &self.alert_log
    }

    pub fn build_strategy(&self) -> Box<dyn DetectionStrategy> {
        self.strategy
            .build(self.anomaly_threshold, self.threshold_min, self.threshold_max)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid("buffer_size must be greater than 0".to_string()));
        }
        if self.max_sensors == 0 {
            return Err(ConfigError::Invalid("max_sensors must be greater than 0".to_string()));
        }
        if !self.anomaly_threshold.is_finite() || self.anomaly_threshold <= 0.0 {
            return Err(ConfigError::Invalid(
                "anomaly_threshold must be a positive number".to_string(),
            ));
        }
        if !(self.threshold_min < self.threshold_max) {
            return Err(ConfigError::Invalid(
                "threshold_min must be lower than threshold_max".to_string(),
            ));
        }
        if self.alert_log.trim().is_empty() {
            return Err(ConfigError::Invalid("alert_log must be set".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SystemConfig::default();
        assert_eq!(config.buffer_size(), 100);
        assert_eq!(config.max_sensors(), 50);
        assert_eq!(config.anomaly_threshold(), 2.5);
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        assert!(SystemConfig::new().with_buffer_size(0).validate().is_err());
        assert!(SystemConfig::new().with_max_sensors(0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        assert!(SystemConfig::new().with_anomaly_threshold(0.0).validate().is_err());
        assert!(SystemConfig::new().with_anomaly_threshold(f64::NAN).validate().is_err());
        assert!(SystemConfig::new().with_threshold_bounds(5.0, 5.0).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SystemConfig::from_json(r#"{"buffer_size": 12, "strategy": "threshold"}"#).unwrap();
        assert_eq!(config.buffer_size(), 12);
        assert_eq!(config.strategy(), StrategyKind::Threshold);
        assert_eq!(config.max_sensors(), 50);
        assert_eq!(config.build_strategy().name(), "threshold");
    }

    #[test]
    fn test_invalid_json_values_rejected() {
        assert!(matches!(
            SystemConfig::from_json(r#"{"buffer_size": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(SystemConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"iterations": 3, "poll_interval_ms": 0}"#).unwrap();

        let config = SystemConfig::from_file(&path).unwrap();
        assert_eq!(config.iterations(), 3);
        assert!(config.poll_interval().is_zero());
    }

    #[test]
    fn test_poll_interval_keeps_sub_millisecond_precision() {
        let config = SystemConfig::new().with_poll_interval(Duration::from_micros(1500));
        assert_eq!(config.poll_interval(), Duration::from_micros(1500));

        let huge = SystemConfig::new().with_poll_interval(Duration::MAX);
        assert_eq!(huge.poll_interval(), Duration::MAX);
        let json = serde_json::to_string(&huge).unwrap();
        assert!(json.contains(&format!("\"poll_interval_ms\":{}", u64::MAX)));
    }

    #[test]
    fn test_poll_interval_json_in_milliseconds() {
        let config = SystemConfig::new().with_poll_interval(Duration::from_millis(250));
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"poll_interval_ms\":250"));

        let loaded = SystemConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
    }
}
