//! Concrete AEAD symmetric cipher behind `EncTag::Aead`.
//!
//! Ciphertext framing is `salt(16) || nonce(12) || aes_gcm_ciphertext`, so a
//! decrypting party can recover the salt its key derivation needs without a
//! side channel.

use crate::errors::{Result, StegoError};
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;

const NONCE_LEN: usize = 12;
const SALT_LEN: usize = 16;

pub fn encrypt(key: &[u8], salt: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let body = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| StegoError::DecryptFailure(format!("encrypt failed: {e}")))?;

    let mut out = Vec::with_capacity(SALT_LEN + NONCE_LEN + body.len());
    out.extend_from_slice(salt);
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&body);
    Ok(out)
}

pub fn extract_salt(ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < SALT_LEN + NONCE_LEN {
        return Err(StegoError::DecryptFailure(
            "ciphertext too short to contain salt/nonce framing".into(),
        ));
    }
    Ok(ciphertext[..SALT_LEN].to_vec())
}

pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < SALT_LEN + NONCE_LEN {
        return Err(StegoError::DecryptFailure(
            "ciphertext too short to contain salt/nonce framing".into(),
        ));
    }
    let nonce = Nonce::from_slice(&ciphertext[SALT_LEN..SALT_LEN + NONCE_LEN]);
    let body = &ciphertext[SALT_LEN + NONCE_LEN..];

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(nonce, body)
        .map_err(|_| StegoError::DecryptFailure("authentication tag mismatch".into()))
}
