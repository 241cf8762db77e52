// Tue Jan 13 2026 - Alex

use crate::processing::error::ProcessingError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
    pub elapsed: Duration,
}

impl BatchStatistics {
    pub fn summary(&self) -> String {
        format!(
            "mean={:.2}, std={:.2}, n={}, time={:.6}s",
            self.mean,
            self.std_dev,
            self.count,
            self.elapsed.as_secs_f64()
        )
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (ddof = 0) around a precomputed mean.
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Two-pass mean and population standard deviation.
pub fn mean_and_std_dev(values: &[f64]) -> Result<(f64, f64), ProcessingError> {
    let mean = mean(values).ok_or(ProcessingError::EmptyBatch)?;
    Ok((mean, population_std_dev(values, mean)))
}
