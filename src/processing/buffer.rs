// Tue Jan 13 2026 - Alex

use crate::processing::error::ProcessingError;
use crate::processing::stats::{mean_and_std_dev, BatchStatistics};
use std::time::Instant;

/// Fixed-size window of readings. The buffer never drains itself: the
/// caller processes it once `add_reading` reports it full.
#[derive(Debug, Clone)]
pub struct BatchBuffer {
    values: Vec<f64>,
    capacity: usize,
}

impl BatchBuffer {
    pub fn new(capacity: usize) -> Result<Self, ProcessingError> {
        if capacity == 0 {
            return Err(ProcessingError::InvalidCapacity);
        }
        Ok(Self {
            values: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Returns `true` when this reading made the buffer full.
    pub fn add_reading(&mut self, value: f64) -> Result<bool, ProcessingError> {
        if self.is_full() {
            return Err(ProcessingError::BufferFull {
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        Ok(self.is_full())
    }

    pub fn process_batch(&mut self) -> Result<BatchStatistics, ProcessingError> {
        if self.values.is_empty() {
            return Err(ProcessingError::EmptyBatch);
        }

        let start = Instant::now();
        let (mean, std_dev) = mean_and_std_dev(&self.values)?;
        let elapsed = start.elapsed();

        let values = self.drain();

        Ok(BatchStatistics {
            mean,
            std_dev,
            count: values.len(),
            elapsed,
        })
    }

    pub fn drain(&mut self) -> Vec<f64> {
        std::mem::replace(&mut self.values, Vec::with_capacity(self.capacity))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
