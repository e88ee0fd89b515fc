//! The 16-byte frame header that precedes every embedded payload.

use crate::byteorder::WriteBytesLe;
use crate::cipher::{EncTag, HashTag};
use crate::ecc::EcTag;
use crate::errors::{Result, StegoError};
use stegowav_macros::ToBytes;

pub const MAGIC: [u8; 4] = *b"SWAV";
pub const HEADER_LEN: usize = 16;

#[derive(ToBytes, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub magic: [u8; 4],
    pub payload_len: u32,
    pub ec_tag: u8,
    pub ec_param: u8,
    pub enc_tag: u8,
    pub hash_tag: u8,
    pub reserved: [u8; 4],
}

impl FrameHeader {
    pub fn new(payload_len: u32, ec_tag: EcTag, ec_param: u8, enc_tag: EncTag, hash_tag: HashTag) -> Self {
        Self {
            magic: MAGIC,
            payload_len,
            ec_tag: ec_tag.as_byte(),
            ec_param,
            enc_tag: enc_tag.as_byte(),
            hash_tag: hash_tag.as_byte(),
            reserved: [0; 4],
        }
    }

    pub fn write(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN);
        self.write_le(&mut out);
        out
    }

    pub fn read(bytes: &[u8], strict: bool) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(StegoError::Truncated {
                expected: HEADER_LEN,
                available: bytes.len(),
            });
        }
        let magic: [u8; 4] = bytes[0..4].try_into().unwrap();
        if magic != MAGIC {
            return Err(StegoError::CorruptFrame(format!(
                "bad magic {magic:?}, expected {MAGIC:?}"
            )));
        }
        let payload_len = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
        let ec_tag = bytes[8];
        let ec_param = bytes[9];
        let enc_tag = bytes[10];
        let hash_tag = bytes[11];
        let reserved: [u8; 4] = bytes[12..16].try_into().unwrap();

        if strict && reserved != [0; 4] {
            return Err(StegoError::CorruptFrame(
                "reserved field non-zero under strict mode".into(),
            ));
        } else if reserved != [0; 4] {
            log::debug!("frame header reserved field non-zero: {reserved:?}, ignoring");
        }

        Ok(Self {
            magic,
            payload_len,
            ec_tag,
            ec_param,
            enc_tag,
            hash_tag,
            reserved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_roundtrips() {
        let header = FrameHeader::new(42, EcTag::Hamming, 4, EncTag::None, HashTag::None);
        let bytes = header.write();
        assert_eq!(bytes.len(), HEADER_LEN);
        let parsed = FrameHeader::read(&bytes, true).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn bad_magic_is_corrupt_frame() {
        let mut bytes = FrameHeader::new(1, EcTag::None, 0, EncTag::None, HashTag::None).write();
        bytes[0] = b'X';
        let err = FrameHeader::read(&bytes, false).unwrap_err();
        assert!(matches!(err, StegoError::CorruptFrame(_)));
    }

    #[test]
    fn strict_mode_rejects_nonzero_reserved() {
        let mut bytes = FrameHeader::new(1, EcTag::None, 0, EncTag::None, HashTag::None).write();
        bytes[12] = 1;
        assert!(FrameHeader::read(&bytes, false).is_ok());
        assert!(matches!(
            FrameHeader::read(&bytes, true),
            Err(StegoError::CorruptFrame(_))
        ));
    }

    #[test]
    fn too_short_is_truncated() {
        let err = FrameHeader::read(&[0u8; 4], false).unwrap_err();
        assert!(matches!(err, StegoError::Truncated { .. }));
    }
}
