// Tue Jan 13 2026 - Alex

use crate::sensor::SensorError;
use indexmap::IndexMap;
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
pub struct ReadFailure {
    pub sensor: String,
    pub error: SensorError,
}

/// One cycle's readings keyed by sensor name, in sensor-list order.
/// Sensors whose read failed are kept aside in `failures`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    readings: IndexMap<String, f64>,
    failures: Vec<ReadFailure>,
}

impl Snapshot {
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (String, Result<f64, SensorError>)>,
    {
        let mut snapshot = Self::default();
        for (sensor, result) in results {
            match result {
                Ok(value) => {
                    snapshot.readings.insert(sensor, value);
                }
                Err(error) => snapshot.failures.push(ReadFailure { sensor, error }),
            }
        }
        snapshot
    }

    pub fn get(&self, sensor: &str) -> Option<f64> {
        self.readings.get(sensor).copied()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.readings.keys().map(|k| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.readings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values().collect()
    }

    pub fn failures(&self) -> &[ReadFailure] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Comma-joined values with two decimals; this is the digest input.
    pub fn format_values(&self) -> String {
        self.values().map(|v| format!("{:.2}", v)).join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_results_keeps_order() {
        let snapshot = Snapshot::from_results(vec![
            ("c".to_string(), Ok(3.0)),
            ("a".to_string(), Ok(1.0)),
            ("b".to_string(), Ok(2.0)),
        ]);
        assert_eq!(snapshot.names().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(snapshot.to_vec(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_failures_are_separated() {
        let snapshot = Snapshot::from_results(vec![
            ("a".to_string(), Ok(1.0)),
            ("b".to_string(), Err(SensorError::NotCalibrated("b".to_string()))),
        ]);
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.is_complete());
        assert_eq!(snapshot.failures()[0].sensor, "b");
        assert_eq!(snapshot.get("b"), None);
    }

    #[test]
    fn test_format_values() {
        let snapshot = Snapshot::from_results(vec![
            ("a".to_string(), Ok(1.0)),
            ("b".to_string(), Ok(22.456)),
        ]);
        assert_eq!(snapshot.format_values(), "1.00,22.46");
    }
}
