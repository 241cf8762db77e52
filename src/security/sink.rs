// Tue Jan 13 2026 - Alex

use crate::security::error::SecurityError;
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only destination for alert records, one record per line.
pub trait AlertSink: Send + Sync {
    fn append(&self, payload: &[u8]) -> Result<(), SecurityError>;
}

/// Accepts bare filenames only: no separators, no `.`/`..`, nothing that
/// would resolve to a different basename.
pub fn sanitize_filename(filename: &str) -> Result<&str, SecurityError> {
    if filename.trim().is_empty() {
        return Err(SecurityError::UnsafePath("filename must be non-empty".to_string()));
    }
    if filename.contains('/') || filename.contains('\\') {
        return Err(SecurityError::UnsafePath(filename.to_string()));
    }

    match Path::new(filename).file_name().and_then(|n| n.to_str()) {
        Some(base) if base == filename => Ok(filename),
        _ => Err(SecurityError::UnsafePath(filename.to_string())),
    }
}

pub fn append_log(dir: &Path, filename: &str, payload: &[u8]) -> Result<(), SecurityError> {
    SecureLogFile::new(dir, filename)?.append(payload)
}

#[derive(Debug, Clone)]
pub struct SecureLogFile {
    path: PathBuf,
}

impl SecureLogFile {
    pub fn new(dir: &Path, filename: &str) -> Result<Self, SecurityError> {
        let safe = sanitize_filename(filename)?;
        Ok(Self {
            path: dir.join(safe),
        })
    }

    pub fn in_current_dir(filename: &str) -> Result<Self, SecurityError> {
        Self::new(Path::new("."), filename)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlertSink for SecureLogFile {
    fn append(&self, payload: &[u8]) -> Result<(), SecurityError> {
        let mut record = Vec::with_capacity(payload.len() + 1);
        record.extend_from_slice(payload);
        record.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&record)?;
        Ok(())
    }
}

/// Keeps records in memory; used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Vec<u8>> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl AlertSink for MemorySink {
    fn append(&self, payload: &[u8]) -> Result<(), SecurityError> {
        self.records.lock().push(payload.to_vec());
        Ok(())
    }
}
