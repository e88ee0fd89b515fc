//! Cipher dispatch: selects a symmetric cipher by `enc_tag` and a
//! key-derivation function by `hash_tag`, decoupled from how a password is
//! obtained via the injected [`CredentialsSource`].

mod aead;
mod pbkdf2_kdf;

use crate::errors::{Result, StegoError};

/// Supplies password material to a cipher's `configure` step without the
/// cipher reading a global input channel directly.
pub trait CredentialsSource {
    fn password_for_encrypt(&self) -> Result<Vec<u8>>;
    fn password_for_decrypt(&self) -> Result<Vec<u8>>;
}

/// A fixed password, for tests and scripted/CI use.
pub struct FixedCredentials {
    password: Vec<u8>,
}

impl FixedCredentials {
    pub fn new(password: impl Into<Vec<u8>>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

impl CredentialsSource for FixedCredentials {
    fn password_for_encrypt(&self) -> Result<Vec<u8>> {
        Ok(self.password.clone())
    }

    fn password_for_decrypt(&self) -> Result<Vec<u8>> {
        Ok(self.password.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncTag {
    None,
    Aead,
}

impl EncTag {
    pub fn as_byte(self) -> u8 {
        match self {
            EncTag::None => 0,
            EncTag::Aead => 1,
        }
    }

    pub fn from_byte(b: u8) -> Result<Self> {
        match b {
            0 => Ok(EncTag::None),
            1 => Ok(EncTag::Aead),
            other => Err(StegoError::CorruptFrame(format!(
                "unknown enc_tag {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashTag {
    None,
    Pbkdf2,
}

impl HashTag {
    pub fn as_byte(self) -> u8 {
        match self {
            HashTag::None => 0,
            HashTag::Pbkdf2 => 1,
        }
    }

    pub fn from_byte(b: u8) -> Result<Self> {
        match b {
            0 => Ok(HashTag::None),
            1 => Ok(HashTag::Pbkdf2),
            other => Err(StegoError::CorruptFrame(format!(
                "unknown hash_tag {other}"
            ))),
        }
    }
}

pub fn encrypt(
    enc: EncTag,
    hash: HashTag,
    credentials: &dyn CredentialsSource,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    match enc {
        EncTag::None => Ok(plaintext.to_vec()),
        EncTag::Aead => {
            check_requires_salted_hash(hash)?;
            let password = credentials.password_for_encrypt()?;
            let key = pbkdf2_kdf::derive_for(hash, &password, None)?;
            aead::encrypt(&key.key, &key.salt, plaintext)
        }
    }
}

pub fn decrypt(
    enc: EncTag,
    hash: HashTag,
    credentials: &dyn CredentialsSource,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    match enc {
        EncTag::None => Ok(ciphertext.to_vec()),
        EncTag::Aead => {
            check_requires_salted_hash(hash)?;
            let password = credentials.password_for_decrypt()?;
            let salt = aead::extract_salt(ciphertext)?;
            let key = pbkdf2_kdf::derive_for(hash, &password, Some(salt))?;
            aead::decrypt(&key.key, ciphertext)
        }
    }
}

/// `Aead`'s ciphertext framing embeds a 16-byte salt produced by the KDF;
/// `HashTag::None` derives no salt at all, which would make the framing
/// length depend on `hash_tag`. Reject the combination outright rather than
/// let it fail opaquely at extract time.
fn check_requires_salted_hash(hash: HashTag) -> Result<()> {
    if hash == HashTag::None {
        return Err(StegoError::UnsupportedFormat(
            "enc_tag Aead requires a salted hash (hash_tag Pbkdf2), not None".into(),
        ));
    }
    Ok(())
}
