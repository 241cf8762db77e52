// Tue Jan 13 2026 - Alex

pub mod cache;

pub use cache::SensorCache;
