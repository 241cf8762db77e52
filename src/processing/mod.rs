// Tue Jan 13 2026 - Alex

pub mod buffer;
pub mod error;
pub mod stats;

pub use buffer::BatchBuffer;
pub use error::ProcessingError;
pub use stats::{mean_and_std_dev, BatchStatistics};
