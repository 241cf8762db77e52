// Tue Jan 13 2026 - Alex

use crate::sensor::error::SensorError;
use crate::sensor::generator::{ReadingGenerator, UniformGenerator, READING_MAX, READING_MIN};
use parking_lot::Mutex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

pub const DEFAULT_LATENCY_MIN: Duration = Duration::from_millis(10);
pub const DEFAULT_LATENCY_MAX: Duration = Duration::from_millis(50);

static NEXT_SENSOR_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SensorId(u64);

impl SensorId {
    fn next() -> Self {
        Self(NEXT_SENSOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sensor#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Pressure,
    Vibration,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [
        SensorKind::Temperature,
        SensorKind::Pressure,
        SensorKind::Vibration,
    ];

    pub fn type_name(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Pressure => "pressure",
            SensorKind::Vibration => "vibration",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperature",
            SensorKind::Pressure => "Pressure",
            SensorKind::Vibration => "Vibration",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Shared state behind every simulated sensor: identity, calibration flag,
/// value stream and the latency window used to model device I/O.
pub struct SensorCore {
    id: SensorId,
    name: String,
    calibrated: AtomicBool,
    generator: Mutex<Box<dyn ReadingGenerator>>,
    latency_min: Duration,
    latency_max: Duration,
}

impl SensorCore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SensorId::next(),
            name: name.into(),
            calibrated: AtomicBool::new(false),
            generator: Mutex::new(Box::new(UniformGenerator::new())),
            latency_min: DEFAULT_LATENCY_MIN,
            latency_max: DEFAULT_LATENCY_MAX,
        }
    }

    pub fn with_generator(mut self, generator: Box<dyn ReadingGenerator>) -> Self {
        self.generator = Mutex::new(generator);
        self
    }

    pub fn with_latency(mut self, min: Duration, max: Duration) -> Self {
        self.latency_min = min;
        self.latency_max = max.max(min);
        self
    }

    pub fn id(&self) -> SensorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated.load(Ordering::Acquire)
    }

    pub fn calibrate(&self) {
        self.calibrated.store(true, Ordering::Release);
    }

    pub fn read(&self) -> Result<f64, SensorError> {
        if !self.is_calibrated() {
            return Err(SensorError::NotCalibrated(self.name.clone()));
        }

        let latency = self.sample_latency();
        if !latency.is_zero() {
            thread::sleep(latency);
        }

        let raw = self.generator.lock().next_value();
        Ok(self.sanitize(raw))
    }

    fn sample_latency(&self) -> Duration {
        let min = self.latency_min.as_micros() as u64;
        let max = self.latency_max.as_micros() as u64;
        if max <= min {
            return self.latency_min;
        }
        Duration::from_micros(rand::thread_rng().gen_range(min..max))
    }

    // A faulty stream degrades this sensor's reading only; the cycle keeps going.
    fn sanitize(&self, raw: Option<f64>) -> f64 {
        match raw {
            Some(value) if value.is_finite() && (READING_MIN..READING_MAX).contains(&value) => value,
            Some(value) => {
                log::warn!("{}: malformed reading {} replaced with 0.0", self.name, value);
                0.0
            }
            None => {
                log::warn!("{}: reading stream exhausted, substituting 0.0", self.name);
                0.0
            }
        }
    }
}

impl fmt::Debug for SensorCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensorCore")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("calibrated", &self.is_calibrated())
            .finish()
    }
}

/// A simulated reading producer. Implementors only expose their core and tag;
/// `read` may be overridden by a specialised device.
pub trait Sensor: Send + Sync {
    fn core(&self) -> &SensorCore;

    fn kind(&self) -> SensorKind;

    fn id(&self) -> SensorId {
        self.core().id()
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn is_calibrated(&self) -> bool {
        self.core().is_calibrated()
    }

    fn calibrate(&self) {
        self.core().calibrate()
    }

    fn read(&self) -> Result<f64, SensorError> {
        self.core().read()
    }
}

/// Sensor types that can place themselves in a [`SensorRegistry`](crate::sensor::SensorRegistry).
pub trait RegisteredSensor: Sensor + Sized + 'static {
    const KIND: SensorKind;

    fn construct(name: Option<String>) -> Self;
}

#[derive(Debug)]
pub struct TemperatureSensor {
    core: SensorCore,
}

impl TemperatureSensor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { core: SensorCore::new(name) }
    }

    pub fn with_generator(mut self, generator: Box<dyn ReadingGenerator>) -> Self {
        self.core = self.core.with_generator(generator);
        self
    }

    pub fn with_latency(mut self, min: Duration, max: Duration) -> Self {
        self.core = self.core.with_latency(min, max);
        self
    }
}

impl Sensor for TemperatureSensor {
    fn core(&self) -> &SensorCore {
        &self.core
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }
}

impl RegisteredSensor for TemperatureSensor {
    const KIND: SensorKind = SensorKind::Temperature;

    fn construct(name: Option<String>) -> Self {
        Self::new(name.unwrap_or_else(|| Self::KIND.display_name().to_string()))
    }
}

#[derive(Debug)]
pub struct PressureSensor {
    core: SensorCore,
}

impl PressureSensor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { core: SensorCore::new(name) }
    }

    pub fn with_generator(mut self, generator: Box<dyn ReadingGenerator>) -> Self {
        self.core = self.core.with_generator(generator);
        self
    }

    pub fn with_latency(mut self, min: Duration, max: Duration) -> Self {
        self.core = self.core.with_latency(min, max);
        self
    }
}

impl Sensor for PressureSensor {
    fn core(&self) -> &SensorCore {
        &self.core
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Pressure
    }
}

impl RegisteredSensor for PressureSensor {
    const KIND: SensorKind = SensorKind::Pressure;

    fn construct(name: Option<String>) -> Self {
        Self::new(name.unwrap_or_else(|| Self::KIND.display_name().to_string()))
    }
}

#[derive(Debug)]
pub struct VibrationSensor {
    core: SensorCore,
}

impl VibrationSensor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { core: SensorCore::new(name) }
    }

    pub fn with_generator(mut self, generator: Box<dyn ReadingGenerator>) -> Self {
        self.core = self.core.with_generator(generator);
        self
    }

    pub fn with_latency(mut self, min: Duration, max: Duration) -> Self {
        self.core = self.core.with_latency(min, max);
        self
    }
}

impl Sensor for VibrationSensor {
    fn core(&self) -> &SensorCore {
        &self.core
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Vibration
    }
}

impl RegisteredSensor for VibrationSensor {
    const KIND: SensorKind = SensorKind::Vibration;

    fn construct(name: Option<String>) -> Self {
        Self::new(name.unwrap_or_else(|| Self::KIND.display_name().to_string()))
    }
}
