// Tue Jan 13 2026 - Alex

use crate::acquisition::snapshot::Snapshot;
use crate::sensor::Sensor;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("Failed to build acquisition pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}

/// Polls every sensor once per cycle. Reads within a cycle run on a
/// dedicated pool and are joined before the snapshot is returned; cycles
/// never overlap.
pub struct AcquisitionEngine {
    pool: ThreadPool,
    workers: usize,
}

impl AcquisitionEngine {
    pub fn new(workers: usize) -> Result<Self, AcquisitionError> {
        let workers = workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("acquisition-{}", i))
            .build()?;

        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// A failed read is recorded in the snapshot and never blocks the
    /// other sensors. Sensors must already be calibrated.
    pub fn collect_once(&self, sensors: &[Arc<dyn Sensor>]) -> Snapshot {
        let start = Instant::now();

        let results: Vec<_> = self.pool.install(|| {
            sensors
                .par_iter()
                .map(|sensor| (sensor.name().to_string(), sensor.read()))
                .collect()
        });

        let snapshot = Snapshot::from_results(results);
        for failure in snapshot.failures() {
            log::warn!("Read failed for {}: {}", failure.sensor, failure.error);
        }
        log::debug!(
            "Collected {} readings from {} sensors in {:.2}ms",
            snapshot.len(),
            sensors.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        snapshot
    }

    pub fn run_cycles(
        &self,
        sensors: &[Arc<dyn Sensor>],
        iterations: usize,
        delay: Duration,
    ) -> Vec<Snapshot> {
        self.run_cycles_with(sensors, iterations, delay, |_, _| {})
    }

    pub fn run_cycles_with<F>(
        &self,
        sensors: &[Arc<dyn Sensor>],
        iterations: usize,
        delay: Duration,
        mut on_cycle: F,
    ) -> Vec<Snapshot>
    where
        F: FnMut(usize, &Snapshot),
    {
        let mut snapshots = Vec::with_capacity(iterations);

        for cycle in 0..iterations {
            let snapshot = self.collect_once(sensors);
            on_cycle(cycle, &snapshot);
            snapshots.push(snapshot);

            if !delay.is_zero() && cycle + 1 < iterations {
                thread::sleep(delay);
            }
        }

        snapshots
    }
}
