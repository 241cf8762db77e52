// Wed Jan 15 2026 - Alex

use crate::config::{ConfigError, SystemConfig};
use crate::detection::StrategyKind;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "iot-sentinel")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Simulated IoT sensor fleet with batched anomaly alerts", long_about = None)]
pub struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub iterations: Option<usize>,

    #[arg(short, long)]
    pub sensors: Option<usize>,

    #[arg(short, long)]
    pub buffer_size: Option<usize>,

    #[arg(short, long)]
    pub threshold: Option<f64>,

    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,

    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    #[arg(long)]
    pub alert_log: Option<String>,

    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    pub fn to_config(&self) -> Result<SystemConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SystemConfig::from_file(path)?,
            None => SystemConfig::default(),
        };

        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if let Some(sensors) = self.sensors {
            config = config.with_max_sensors(sensors);
        }
        if let Some(buffer_size) = self.buffer_size {
            config = config.with_buffer_size(buffer_size);
        }
        if let Some(threshold) = self.threshold {
            config = config.with_anomaly_threshold(threshold);
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        if let Some(ms) = self.poll_interval_ms {
            config = config.with_poll_interval(Duration::from_millis(ms));
        }
        if let Some(alert_log) = &self.alert_log {
            config = config.with_alert_log(alert_log);
        }

        config.validate()?;
        Ok(config)
    }
}
