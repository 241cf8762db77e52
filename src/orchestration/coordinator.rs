// Tue Jan 13 2026 - Alex

use crate::acquisition::{AcquisitionEngine, AcquisitionError, Snapshot};
use crate::config::{ConfigError, SystemConfig};
use crate::detection::{AnomalyDetector, DetectionStrategy};
use crate::liveness::SensorCache;
use crate::orchestration::report::{BatchReport, RunReport};
use crate::processing::{BatchBuffer, BatchStatistics, ProcessingError};
use crate::security::{
    compute_sha256, decrypt_alert, encrypt_alert, AlertKey, AlertSink, SecurityError,
};
use crate::sensor::{Sensor, SensorError, SensorFactory};
use crate::utils::scoped_timer;
use indicatif::ProgressBar;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sensor(#[from] SensorError),
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
    #[error(transparent)]
    Security(#[from] SecurityError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Initializing,
    BuildingSensors,
    RunningCycles,
    ProcessingBatches,
    TearingDown,
    Completed,
    Failed,
}

/// Drives one monitoring run: build and calibrate the fleet, poll it for the
/// configured number of cycles, batch the readings, and alert on anomalies.
pub struct MonitorCoordinator {
    config: SystemConfig,
    detector: AnomalyDetector,
    sink: Arc<dyn AlertSink>,
    key: AlertKey,
    cache: SensorCache,
    progress: Option<ProgressBar>,
    state: CoordinatorState,
}

impl MonitorCoordinator {
    pub fn new(config: SystemConfig, sink: Arc<dyn AlertSink>) -> Self {
        let detector = AnomalyDetector::new(config.build_strategy());

        Self {
            config,
            detector,
            sink,
            key: AlertKey::generate(),
            cache: SensorCache::new(),
            progress: None,
            state: CoordinatorState::Idle,
        }
    }

    pub fn with_key(mut self, key: AlertKey) -> Self {
        self.key = key;
        self
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Only callable between runs.
    pub fn set_strategy(&mut self, strategy: Box<dyn DetectionStrategy>) {
        self.detector.set_strategy(strategy);
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn key(&self) -> &AlertKey {
        &self.key
    }

    pub fn cache(&self) -> &SensorCache {
        &self.cache
    }

    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    pub fn run(&mut self) -> Result<RunReport, CoordinatorError> {
        let result = self.run_inner(None);
        self.finish(result)
    }

    /// Runs against caller-supplied sensors instead of a factory-built
    /// fleet. Sensors are not calibrated here.
    pub fn run_with_sensors(
        &mut self,
        sensors: Vec<Arc<dyn Sensor>>,
    ) -> Result<RunReport, CoordinatorError> {
        let result = self.run_inner(Some(sensors));
        self.finish(result)
    }

    fn finish(
        &mut self,
        result: Result<RunReport, CoordinatorError>,
    ) -> Result<RunReport, CoordinatorError> {
        self.state = match result {
            Ok(_) => CoordinatorState::Completed,
            Err(ref e) => {
                log::error!("Run failed: {}", e);
                CoordinatorState::Failed
            }
        };
        result
    }

    fn run_inner(
        &mut self,
        sensors: Option<Vec<Arc<dyn Sensor>>>,
    ) -> Result<RunReport, CoordinatorError> {
        self.state = CoordinatorState::Initializing;
        self.config.validate()?;

        let sensors = match sensors {
            Some(sensors) => sensors,
            None => self.build_sensors()?,
        };

        self.execute(sensors)
    }

    fn build_sensors(&mut self) -> Result<Vec<Arc<dyn Sensor>>, CoordinatorError> {
        self.state = CoordinatorState::BuildingSensors;

        let sensors: Vec<Arc<dyn Sensor>> = SensorFactory::build_fleet(self.config.max_sensors())?
            .into_iter()
            .map(Arc::from)
            .collect();

        for sensor in &sensors {
            sensor.calibrate();
        }

        log::info!("Built and calibrated {} sensors", sensors.len());
        Ok(sensors)
    }

    fn execute(&mut self, sensors: Vec<Arc<dyn Sensor>>) -> Result<RunReport, CoordinatorError> {
        for sensor in &sensors {
            self.cache.add(sensor);
        }

        self.state = CoordinatorState::RunningCycles;
        let snapshots = self.collect_snapshots(&sensors)?;

        self.state = CoordinatorState::ProcessingBatches;
        let mut report = RunReport::new(sensors.len());
        let mut buffer = BatchBuffer::new(self.config.buffer_size())?;
        for snapshot in &snapshots {
            self.process_snapshot(&mut buffer, snapshot, &mut report)?;
        }
        report.pending_readings = buffer.len();

        self.state = CoordinatorState::TearingDown;
        report.cache_before_teardown = self.cache.size();
        drop(sensors);
        report.cache_after_teardown = self.cache.force_sweep();
        log::info!(
            "Active sensors in cache: {} before teardown, {} after",
            report.cache_before_teardown,
            report.cache_after_teardown
        );

        Ok(report)
    }

    fn collect_snapshots(
        &self,
        sensors: &[Arc<dyn Sensor>],
    ) -> Result<Vec<Snapshot>, CoordinatorError> {
        let _timer = scoped_timer("acquisition");
        let engine = AcquisitionEngine::new(sensors.len())?;
        let progress = self.progress.as_ref();

        let snapshots = engine.run_cycles_with(
            sensors,
            self.config.iterations(),
            self.config.poll_interval(),
            |cycle, snapshot| {
                if let Some(pb) = progress {
                    pb.set_message(format!("cycle {} ({} readings)", cycle + 1, snapshot.len()));
                    pb.inc(1);
                }
            },
        );

        if let Some(pb) = progress {
            pb.finish_with_message("acquisition complete");
        }
        Ok(snapshots)
    }

    // Detection looks at the snapshot that filled the buffer, not the whole batch.
    fn process_snapshot(
        &self,
        buffer: &mut BatchBuffer,
        snapshot: &Snapshot,
        report: &mut RunReport,
    ) -> Result<(), CoordinatorError> {
        report.snapshots += 1;
        report.readings += snapshot.len();
        report.failed_reads += snapshot.failures().len();

        for value in snapshot.values() {
            if !buffer.add_reading(value)? {
                continue;
            }

            let statistics = buffer.process_batch()?;
            let digest = compute_sha256(snapshot.format_values());
            log::info!("Batch processed: {}, SHA256={}", statistics.summary(), digest);

            let anomaly = self.detector.detect(&snapshot.to_vec());
            let alert = if anomaly {
                Some(self.raise_alert(&statistics)?)
            } else {
                None
            };

            report.batches.push(BatchReport {
                index: report.batches.len(),
                statistics,
                digest,
                anomaly,
                alert,
            });
        }

        Ok(())
    }

    fn raise_alert(&self, statistics: &BatchStatistics) -> Result<String, CoordinatorError> {
        let message = format!(
            "Anomaly detected! Mean={:.2}, Std={:.2}",
            statistics.mean, statistics.std_dev
        );

        let encrypted = encrypt_alert(&message, &self.key)?;
        let token = encrypted.to_token();
        self.sink.append(token.as_bytes())?;

        if decrypt_alert(&encrypted, &self.key)? != message {
            return Err(SecurityError::Decryption.into());
        }

        log::info!("Alert raised via {} strategy", self.detector.strategy_name());
        Ok(token)
    }
}
