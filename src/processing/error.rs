// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("Cannot process an empty batch")]
    EmptyBatch,
    #[error("Batch buffer is full (capacity {capacity}); process it before adding more readings")]
    BufferFull { capacity: usize },
    #[error("Batch capacity must be greater than 0")]
    InvalidCapacity,
}
