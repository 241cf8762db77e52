// Tue Jan 13 2026 - Alex

pub mod acquisition;
pub mod config;
pub mod detection;
pub mod liveness;
pub mod orchestration;
pub mod processing;
pub mod security;
pub mod sensor;
pub mod ui;
pub mod utils;

pub use acquisition::{AcquisitionEngine, Snapshot};
pub use config::{ConfigError, SystemConfig};
pub use detection::{AnomalyDetector, DetectionStrategy, StrategyKind};
pub use liveness::SensorCache;
pub use orchestration::{CoordinatorError, MonitorCoordinator, RunReport};
pub use processing::{BatchBuffer, BatchStatistics};
pub use security::{AlertKey, AlertSink, MemorySink, SecureLogFile};
pub use sensor::{Sensor, SensorFactory, SensorKind, SensorRegistry};
