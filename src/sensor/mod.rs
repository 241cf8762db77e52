// Tue Jan 13 2026 - Alex

pub mod error;
pub mod factory;
pub mod generator;
pub mod registry;
pub mod source;

pub use error::SensorError;
pub use factory::SensorFactory;
pub use generator::{ReadingGenerator, ReplayGenerator, UniformGenerator};
pub use registry::{SensorConstructor, SensorRegistry};
pub use source::{
    PressureSensor, RegisteredSensor, Sensor, SensorCore, SensorId, SensorKind,
    TemperatureSensor, VibrationSensor,
};
