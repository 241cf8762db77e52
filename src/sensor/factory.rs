// Tue Jan 13 2026 - Alex

use crate::sensor::error::SensorError;
use crate::sensor::registry::{self, normalize_type_name, SensorRegistry};
use crate::sensor::source::{Sensor, SensorKind};

/// Builds uncalibrated sensors by logical type name.
pub struct SensorFactory;

impl SensorFactory {
    pub fn create(sensor_type: &str) -> Result<Box<dyn Sensor>, SensorError> {
        Self::create_with(&registry::global().read(), sensor_type, None)
    }

    pub fn create_with(
        registry: &SensorRegistry,
        sensor_type: &str,
        name: Option<String>,
    ) -> Result<Box<dyn Sensor>, SensorError> {
        let normalized = normalize_type_name(sensor_type);
        if normalized.is_empty() {
            return Err(SensorError::InvalidInput(
                "Sensor type must be a non-empty string".to_string(),
            ));
        }

        match registry.get(&normalized) {
            Some(constructor) => Ok(constructor(name)),
            None => Err(SensorError::UnknownType {
                requested: sensor_type.to_string(),
                available: registry.available(),
            }),
        }
    }

    /// Cycles through the built-in kinds until `count` sensors exist, naming
    /// each `<type>-<index>`.
    pub fn build_fleet(count: usize) -> Result<Vec<Box<dyn Sensor>>, SensorError> {
        let registry = registry::global().read();
        let mut sensors = Vec::with_capacity(count);

        for index in 0..count {
            let kind = SensorKind::ALL[index % SensorKind::ALL.len()];
            let name = format!("{}-{:02}", kind.type_name(), index);
            sensors.push(Self::create_with(&registry, kind.type_name(), Some(name))?);
        }

        Ok(sensors)
    }
}
