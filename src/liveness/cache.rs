// Tue Jan 13 2026 - Alex

use crate::sensor::{Sensor, SensorId};
use ahash::AHashMap;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Weak registry of sensors. It never keeps a sensor alive; entries whose
/// sensor has been dropped stop counting immediately and are removed on sweep.
#[derive(Default)]
pub struct SensorCache {
    entries: Mutex<AHashMap<SensorId, Weak<dyn Sensor>>>,
}

impl SensorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, sensor: &Arc<dyn Sensor>) {
        self.entries.lock().insert(sensor.id(), Arc::downgrade(sensor));
    }

    pub fn size(&self) -> usize {
        self.entries
            .lock()
            .values()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    pub fn contains(&self, id: SensorId) -> bool {
        self.entries
            .lock()
            .get(&id)
            .map_or(false, |entry| entry.strong_count() > 0)
    }

    pub fn get(&self, id: SensorId) -> Option<Arc<dyn Sensor>> {
        self.entries.lock().get(&id).and_then(Weak::upgrade)
    }

    /// Drops dead entries and returns how many remain.
    pub fn force_sweep(&self) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.strong_count() > 0);
        let remaining = entries.len();
        log::debug!("Liveness sweep removed {} of {} entries", before - remaining, before);
        remaining
    }
}

impl std::fmt::Debug for SensorCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorCache")
            .field("entries", &self.entries.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{PressureSensor, TemperatureSensor, VibrationSensor};
    use std::thread;

    fn fleet() -> Vec<Arc<dyn Sensor>> {
        vec![
            Arc::new(TemperatureSensor::new("t")),
            Arc::new(PressureSensor::new("p")),
            Arc::new(VibrationSensor::new("v")),
        ]
    }

    #[test]
    fn test_size_tracks_owned_sensors() {
        let cache = SensorCache::new();
        let sensors = fleet();
        for sensor in &sensors {
            cache.add(sensor);
        }
        assert_eq!(cache.size(), 3);
        assert_eq!(cache.force_sweep(), 3);
    }

    #[test]
    fn test_release_all_owners() {
        let cache = SensorCache::new();
        let sensors = fleet();
        for sensor in &sensors {
            cache.add(sensor);
        }

        drop(sensors);
        assert_eq!(cache.size(), 0);
        assert_eq!(cache.force_sweep(), 0);
    }

    #[test]
    fn test_partial_release() {
        let cache = SensorCache::new();
        let mut sensors = fleet();
        for sensor in &sensors {
            cache.add(sensor);
        }

        let released = sensors.remove(0);
        let released_id = released.id();
        drop(released);

        assert!(!cache.contains(released_id));
        assert!(cache.contains(sensors[0].id()));
        assert_eq!(cache.force_sweep(), 2);
        assert!(cache.get(sensors[1].id()).is_some());
    }

    #[test]
    fn test_cache_does_not_extend_lifetime() {
        let cache = SensorCache::new();
        let sensor: Arc<dyn Sensor> = Arc::new(TemperatureSensor::new("t"));
        cache.add(&sensor);
        assert_eq!(Arc::strong_count(&sensor), 1);
    }

    #[test]
    fn test_concurrent_add_and_sweep() {
        let cache = Arc::new(SensorCache::new());
        let keep: Vec<Arc<dyn Sensor>> = (0..64)
            .map(|i| Arc::new(TemperatureSensor::new(format!("t-{}", i))) as Arc<dyn Sensor>)
            .collect();

        let sweeper = {
            let cache = cache.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    cache.force_sweep();
                }
            })
        };

        for sensor in &keep {
            cache.add(sensor);
            let transient: Arc<dyn Sensor> = Arc::new(PressureSensor::new("transient"));
            cache.add(&transient);
        }

        sweeper.join().unwrap();
        assert_eq!(cache.force_sweep(), 64);
    }
}
