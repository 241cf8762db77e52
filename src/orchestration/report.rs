// Tue Jan 13 2026 - Alex

use crate::processing::BatchStatistics;

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub index: usize,
    pub statistics: BatchStatistics,
    pub digest: String,
    pub anomaly: bool,
    pub alert: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub sensors: usize,
    pub snapshots: usize,
    pub readings: usize,
    pub failed_reads: usize,
    pub batches: Vec<BatchReport>,
    pub pending_readings: usize,
    pub cache_before_teardown: usize,
    pub cache_after_teardown: usize,
}

impl RunReport {
    pub fn new(sensors: usize) -> Self {
        Self {
            sensors,
            ..Self::default()
        }
    }

    pub fn anomaly_count(&self) -> usize {
        self.batches.iter().filter(|b| b.anomaly).count()
    }

    pub fn alert_count(&self) -> usize {
        self.batches.iter().filter(|b| b.alert.is_some()).count()
    }

    pub fn summary(&self) -> String {
        format!(
            "Sensors: {}, Snapshots: {}, Readings: {}, Batches: {}, Anomalies: {}, Alerts: {}",
            self.sensors,
            self.snapshots,
            self.readings,
            self.batches.len(),
            self.anomaly_count(),
            self.alert_count()
        )
    }
}
