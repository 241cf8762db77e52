// Tue Jan 13 2026 - Alex

pub mod crypto;
pub mod error;
pub mod integrity;
pub mod sink;

pub use crypto::{decrypt_alert, encrypt_alert, generate_key, AlertKey, Ciphertext};
pub use error::SecurityError;
pub use integrity::compute_sha256;
pub use sink::{append_log, sanitize_filename, AlertSink, MemorySink, SecureLogFile};
