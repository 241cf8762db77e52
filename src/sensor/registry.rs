// Tue Jan 13 2026 - Alex

use crate::sensor::source::{
    PressureSensor, RegisteredSensor, Sensor, TemperatureSensor, VibrationSensor,
};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

pub type SensorConstructor = fn(Option<String>) -> Box<dyn Sensor>;

static GLOBAL_REGISTRY: Lazy<RwLock<SensorRegistry>> =
    Lazy::new(|| RwLock::new(SensorRegistry::with_builtin()));

pub fn global() -> &'static RwLock<SensorRegistry> {
    &GLOBAL_REGISTRY
}

pub fn normalize_type_name(type_name: &str) -> String {
    type_name.trim().to_lowercase()
}

fn construct_boxed<T: RegisteredSensor>(name: Option<String>) -> Box<dyn Sensor> {
    Box::new(T::construct(name))
}

/// Maps lower-cased sensor type names to constructors, in registration order.
#[derive(Clone, Default)]
pub struct SensorRegistry {
    constructors: IndexMap<String, SensorConstructor>,
}

impl SensorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_type::<TemperatureSensor>();
        registry.register_type::<PressureSensor>();
        registry.register_type::<VibrationSensor>();
        registry
    }

    /// Registering an existing name replaces its constructor.
    pub fn register(&mut self, type_name: &str, constructor: SensorConstructor) {
        let key = normalize_type_name(type_name);
        if self.constructors.insert(key.clone(), constructor).is_some() {
            log::debug!("Sensor type '{}' re-registered", key);
        }
    }

    pub fn register_type<T: RegisteredSensor>(&mut self) {
        self.register(T::KIND.type_name(), construct_boxed::<T>);
    }

    pub fn get(&self, type_name: &str) -> Option<SensorConstructor> {
        self.constructors.get(&normalize_type_name(type_name)).copied()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(&normalize_type_name(type_name))
    }

    pub fn available(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl std::fmt::Debug for SensorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorRegistry")
            .field("types", &self.available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::source::SensorKind;

    #[test]
    fn test_builtin_types_registered() {
        let registry = SensorRegistry::with_builtin();
        assert_eq!(registry.available(), vec!["temperature", "pressure", "vibration"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = SensorRegistry::with_builtin();
        let ctor = registry.get(" Vibration ").unwrap();
        assert_eq!(ctor(None).kind(), SensorKind::Vibration);
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = SensorRegistry::with_builtin();
        registry.register("TEMPERATURE", construct_boxed::<PressureSensor>);

        assert_eq!(registry.len(), 3);
        let ctor = registry.get("temperature").unwrap();
        assert_eq!(ctor(None).kind(), SensorKind::Pressure);
    }

    #[test]
    fn test_global_registry_has_builtin() {
        let registry = global().read();
        for kind in SensorKind::ALL {
            assert!(registry.contains(kind.type_name()));
        }
    }
}
