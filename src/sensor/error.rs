// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown sensor type '{requested}'. Available sensors: {}", .available.join(", "))]
    UnknownType {
        requested: String,
        available: Vec<String>,
    },
    #[error("{0} must be calibrated before reading data")]
    NotCalibrated(String),
}
