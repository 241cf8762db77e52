// Tue Jan 13 2026 - Alex

use iot_sentinel::orchestration::CoordinatorState;
use iot_sentinel::security::{decrypt_alert, Ciphertext};
use iot_sentinel::sensor::{PressureSensor, ReplayGenerator, SensorError, VibrationSensor};
use iot_sentinel::{
    AlertKey, MemorySink, MonitorCoordinator, SecureLogFile, Sensor, SensorFactory, SensorKind,
    SensorRegistry, StrategyKind, SystemConfig,
};
use std::sync::Arc;
use std::time::Duration;

fn replay<S: Sensor + 'static>(sensor: S) -> Arc<dyn Sensor> {
    sensor.calibrate();
    Arc::new(sensor)
}

fn pressure(name: &str, values: &[f64]) -> Arc<dyn Sensor> {
    replay(
        PressureSensor::new(name)
            .with_generator(Box::new(ReplayGenerator::new(values.to_vec()).cycled()))
            .with_latency(Duration::ZERO, Duration::ZERO),
    )
}

fn vibration(name: &str, values: &[f64]) -> Arc<dyn Sensor> {
    replay(
        VibrationSensor::new(name)
            .with_generator(Box::new(ReplayGenerator::new(values.to_vec()).cycled()))
            .with_latency(Duration::ZERO, Duration::ZERO),
    )
}

fn fast_config() -> SystemConfig {
    SystemConfig::new().with_poll_interval(Duration::ZERO)
}

#[test]
fn test_full_run_with_memory_sink() {
    let sink = Arc::new(MemorySink::new());
    let config = fast_config()
        .with_buffer_size(3)
        .with_iterations(4)
        .with_strategy(StrategyKind::Threshold)
        .with_threshold_bounds(0.0, 80.0);
    let mut coordinator = MonitorCoordinator::new(config, sink.clone());

    let sensors = vec![
        pressure("p-00", &[20.0, 30.0]),
        vibration("v-01", &[95.0, 40.0]),
        pressure("p-02", &[50.0]),
    ];
    let report = coordinator.run_with_sensors(sensors).unwrap();

    assert_eq!(coordinator.state(), CoordinatorState::Completed);
    assert_eq!(report.snapshots, 4);
    assert_eq!(report.readings, 12);
    assert_eq!(report.failed_reads, 0);
    assert_eq!(report.batches.len(), 4);
    assert_eq!(report.pending_readings, 0);

    // Cycles 0 and 2 replay 95.0 from the vibration sensor.
    let flagged: Vec<bool> = report.batches.iter().map(|b| b.anomaly).collect();
    assert_eq!(flagged, vec![true, false, true, false]);
    assert_eq!(sink.len(), 2);
    assert_eq!(report.cache_after_teardown, 0);
}

#[test]
fn test_digest_matches_snapshot_values() {
    let sink = Arc::new(MemorySink::new());
    let config = fast_config().with_buffer_size(2).with_iterations(1);
    let mut coordinator = MonitorCoordinator::new(config, sink);

    let report = coordinator
        .run_with_sensors(vec![pressure("a", &[1.0]), pressure("b", &[2.5])])
        .unwrap();

    assert_eq!(report.batches.len(), 1);
    assert_eq!(
        report.batches[0].digest,
        iot_sentinel::security::compute_sha256("1.00,2.50")
    );
}

#[test]
fn test_file_sink_records_decryptable_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(SecureLogFile::new(dir.path(), "alerts.log").unwrap());
    let key = AlertKey::generate();
    let config = fast_config()
        .with_buffer_size(2)
        .with_iterations(3)
        .with_strategy(StrategyKind::Threshold)
        .with_threshold_bounds(0.0, 50.0);
    let mut coordinator = MonitorCoordinator::new(config, sink.clone()).with_key(key.clone());

    let report = coordinator
        .run_with_sensors(vec![pressure("a", &[10.0]), pressure("b", &[90.0])])
        .unwrap();
    assert_eq!(report.alert_count(), 3);

    let contents = std::fs::read_to_string(sink.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);

    for line in lines {
        let ciphertext = Ciphertext::from_token(line).unwrap();
        assert_eq!(
            decrypt_alert(&ciphertext, &key).unwrap(),
            "Anomaly detected! Mean=50.00, Std=40.00"
        );
    }
}

#[test]
fn test_uncalibrated_sensor_does_not_stop_run() {
    let sink = Arc::new(MemorySink::new());
    let config = fast_config().with_buffer_size(2).with_iterations(2);
    let mut coordinator = MonitorCoordinator::new(config, sink);

    let cold: Arc<dyn Sensor> = Arc::new(
        PressureSensor::new("cold").with_latency(Duration::ZERO, Duration::ZERO),
    );
    let report = coordinator
        .run_with_sensors(vec![pressure("warm", &[5.0]), cold])
        .unwrap();

    assert_eq!(report.readings, 2);
    assert_eq!(report.failed_reads, 2);
    assert_eq!(report.batches.len(), 1);
}

#[test]
fn test_factory_fleet_run() {
    let sink = Arc::new(MemorySink::new());
    let config = fast_config()
        .with_max_sensors(4)
        .with_buffer_size(4)
        .with_iterations(2);
    let mut coordinator = MonitorCoordinator::new(config, sink);

    let report = coordinator.run().unwrap();

    assert_eq!(report.sensors, 4);
    assert_eq!(report.readings, 8);
    assert_eq!(report.batches.len(), 2);
    for batch in &report.batches {
        assert!(batch.statistics.mean >= 0.0 && batch.statistics.mean <= 100.0);
    }
    assert_eq!(report.cache_before_teardown, 4);
    assert_eq!(report.cache_after_teardown, 0);
}

#[test]
fn test_factory_matches_local_registry() {
    let registry = SensorRegistry::with_builtin();

    for kind in SensorKind::ALL {
        let global = SensorFactory::create(kind.type_name()).unwrap();
        let local = SensorFactory::create_with(&registry, kind.type_name(), None).unwrap();
        assert_eq!(global.kind(), local.kind());
        assert_eq!(global.name(), local.name());
        assert_ne!(global.id(), local.id());
    }

    let err = SensorFactory::create_with(&registry, "humidity", None).err().unwrap();
    assert!(matches!(err, SensorError::UnknownType { .. }));
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentinel.json");
    std::fs::write(
        &path,
        r#"{"buffer_size": 2, "max_sensors": 2, "iterations": 1, "poll_interval_ms": 0}"#,
    )
    .unwrap();

    let config = SystemConfig::from_file(&path).unwrap();
    let mut coordinator = MonitorCoordinator::new(config, Arc::new(MemorySink::new()));
    let report = coordinator.run().unwrap();

    assert_eq!(report.sensors, 2);
    assert_eq!(report.batches.len(), 1);
}
