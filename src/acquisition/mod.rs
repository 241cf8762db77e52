// Tue Jan 13 2026 - Alex

pub mod engine;
pub mod snapshot;

pub use engine::{AcquisitionEngine, AcquisitionError};
pub use snapshot::{ReadFailure, Snapshot};
