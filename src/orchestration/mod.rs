// Tue Jan 13 2026 - Alex

pub mod coordinator;
pub mod report;

pub use coordinator::{CoordinatorError, CoordinatorState, MonitorCoordinator};
pub use report::{BatchReport, RunReport};
