// Tue Jan 13 2026 - Alex

use crate::security::error::SecurityError;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;

/// 256-bit AES-GCM key for alert payloads.
#[derive(Clone, PartialEq, Eq)]
pub struct AlertKey([u8; KEY_LEN]);

impl AlertKey {
    pub fn generate() -> Self {
        let key = Aes256Gcm::generate_key(OsRng);
        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(key.as_slice());
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SecurityError> {
        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
            SecurityError::InvalidKey(format!("expected {} bytes, got {}", KEY_LEN, bytes.len()))
        })?;
        Ok(Self(bytes))
    }

    pub fn from_base64(encoded: &str) -> Result<Self, SecurityError> {
        let bytes = URL_SAFE
            .decode(encoded.trim())
            .map_err(|e| SecurityError::InvalidKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_base64(&self) -> String {
        URL_SAFE.encode(self.0)
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.0))
    }
}

impl std::fmt::Debug for AlertKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AlertKey(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    nonce: [u8; NONCE_LEN],
    sealed: Vec<u8>,
}

impl Ciphertext {
    /// URL-safe base64 of `nonce || sealed`, suitable for a single log line.
    pub fn to_token(&self) -> String {
        let mut raw = Vec::with_capacity(NONCE_LEN + self.sealed.len());
        raw.extend_from_slice(&self.nonce);
        raw.extend_from_slice(&self.sealed);
        URL_SAFE.encode(raw)
    }

    pub fn from_token(token: &str) -> Result<Self, SecurityError> {
        let raw = URL_SAFE
            .decode(token.trim())
            .map_err(|e| SecurityError::MalformedCiphertext(e.to_string()))?;
        if raw.len() <= NONCE_LEN {
            return Err(SecurityError::MalformedCiphertext(format!(
                "token too short ({} bytes)",
                raw.len()
            )));
        }

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&raw[..NONCE_LEN]);
        Ok(Self {
            nonce,
            sealed: raw[NONCE_LEN..].to_vec(),
        })
    }
}

pub fn generate_key() -> AlertKey {
    AlertKey::generate()
}

pub fn encrypt_alert(message: &str, key: &AlertKey) -> Result<Ciphertext, SecurityError> {
    let nonce = Aes256Gcm::generate_nonce(OsRng);
    let sealed = key
        .cipher()
        .encrypt(&nonce, message.as_bytes())
        .map_err(|_| SecurityError::Encryption)?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    nonce_bytes.copy_from_slice(nonce.as_slice());
    Ok(Ciphertext {
        nonce: nonce_bytes,
        sealed,
    })
}

pub fn decrypt_alert(ciphertext: &Ciphertext, key: &AlertKey) -> Result<String, SecurityError> {
    let plain = key
        .cipher()
        .decrypt(Nonce::from_slice(&ciphertext.nonce), ciphertext.sealed.as_slice())
        .map_err(|_| SecurityError::Decryption)?;
    String::from_utf8(plain).map_err(|_| SecurityError::Decryption)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption_round_trip() {
        let key = generate_key();
        for message in ["Critical Alert!", "x", "Anomaly detected! Mean=50.12, Std=28.90", "ünïcødé"] {
            let encrypted = encrypt_alert(message, &key).unwrap();
            assert_eq!(decrypt_alert(&encrypted, &key).unwrap(), message);
        }
    }

    #[test]
    fn test_wrong_key_fails() {
        let encrypted = encrypt_alert("secret", &generate_key()).unwrap();
        let result = decrypt_alert(&encrypted, &generate_key());
        assert!(matches!(result, Err(SecurityError::Decryption)));
    }

    #[test]
    fn test_tampered_token_fails() {
        let key = generate_key();
        let mut encrypted = encrypt_alert("secret", &key).unwrap();
        encrypted.sealed[0] ^= 0x01;
        assert!(matches!(decrypt_alert(&encrypted, &key), Err(SecurityError::Decryption)));
    }

    #[test]
    fn test_token_round_trip() {
        let key = generate_key();
        let encrypted = encrypt_alert("payload", &key).unwrap();
        let token = encrypted.to_token();
        assert!(!token.contains('\n'));

        let parsed = Ciphertext::from_token(&token).unwrap();
        assert_eq!(parsed, encrypted);
        assert_eq!(decrypt_alert(&parsed, &key).unwrap(), "payload");
    }

    #[test]
    fn test_short_token_rejected() {
        let token = URL_SAFE.encode([0u8; 4]);
        assert!(matches!(
            Ciphertext::from_token(&token),
            Err(SecurityError::MalformedCiphertext(_))
        ));
    }

    #[test]
    fn test_nonces_differ() {
        let key = generate_key();
        let a = encrypt_alert("same", &key).unwrap();
        let b = encrypt_alert("same", &key).unwrap();
        assert_ne!(a.to_token(), b.to_token());
    }

    #[test]
    fn test_key_export_import() {
        let key = generate_key();
        let restored = AlertKey::from_base64(&key.to_base64()).unwrap();
        assert_eq!(restored, key);
        assert!(matches!(AlertKey::from_bytes(&[1, 2, 3]), Err(SecurityError::InvalidKey(_))));
    }
}
