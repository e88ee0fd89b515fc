//! Key derivation selected by `hash_tag`.
//!
//! `Pbkdf2` mirrors the original implementation's own parameters exactly:
//! PBKDF2-HMAC-SHA256, a 32-byte key, 100,000 iterations, a 16-byte salt.

use super::HashTag;
use crate::errors::Result;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const KEY_LEN: usize = 32;
const SALT_LEN: usize = 16;
const ITERATIONS: u32 = 100_000;

pub struct DerivedKey {
    pub key: Vec<u8>,
    pub salt: Vec<u8>,
}

pub fn derive_for(hash: HashTag, password: &[u8], given_salt: Option<Vec<u8>>) -> Result<DerivedKey> {
    match hash {
        HashTag::Pbkdf2 => {
            let salt = given_salt.unwrap_or_else(random_salt);
            let mut key = vec![0u8; KEY_LEN];
            pbkdf2::pbkdf2_hmac::<Sha256>(password, &salt, ITERATIONS, &mut key);
            Ok(DerivedKey { key, salt })
        }
        HashTag::None => {
            let mut hasher = Sha256::new();
            hasher.update(password);
            Ok(DerivedKey {
                key: hasher.finalize().to_vec(),
                salt: Vec::new(),
            })
        }
    }
}

fn random_salt() -> Vec<u8> {
    let mut salt = vec![0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}
