//! Composes the cipher, error-correction, framing, and LSB layers into the
//! two user-facing operations, `embed` and `extract`.

use crate::bits::{bits_to_bytes, bytes_to_bits};
use crate::cipher::{self, CredentialsSource, EncTag, HashTag};
use crate::container::WavFile;
use crate::ecc::{self, EcTag};
use crate::errors::{Result, StegoError};
use crate::frame::{FrameHeader, HEADER_LEN};
use crate::lsb;

pub struct EmbedOptions<'a> {
    pub lsb: u8,
    pub stride: usize,
    pub ec_tag: EcTag,
    pub ec_param: u8,
    pub enc_tag: EncTag,
    pub hash_tag: HashTag,
    pub repeat_data: bool,
    pub credentials: &'a dyn CredentialsSource,
}

pub struct ExtractOptions<'a> {
    pub lsb: u8,
    pub stride: usize,
    pub strict: bool,
    pub credentials: &'a dyn CredentialsSource,
}

/// Hides `plaintext` inside `wav`'s sample buffer, in place.
pub fn embed(wav: &mut WavFile, plaintext: &[u8], opts: &EmbedOptions) -> Result<()> {
    let ciphertext = cipher::encrypt(opts.enc_tag, opts.hash_tag, opts.credentials, plaintext)?;
    let coded = ecc::encode(opts.ec_tag, opts.ec_param, &ciphertext)?;

    let header = FrameHeader::new(
        coded.len() as u32,
        opts.ec_tag,
        opts.ec_param,
        opts.enc_tag,
        opts.hash_tag,
    );

    let mut framed = header.write();
    framed.extend_from_slice(&coded);
    let bits = bytes_to_bits(&framed);

    let width = wav.fmt().sample_width();
    lsb::embed(wav.samples_mut(), width, &bits, opts.lsb, opts.stride, opts.repeat_data)
}

/// Recovers the plaintext previously hidden by [`embed`].
pub fn extract(wav: &WavFile, opts: &ExtractOptions) -> Result<Vec<u8>> {
    let width = wav.fmt().sample_width();
    let sample_count = wav.sample_count();

    let header_bits = lsb::extract(wav.samples(), width, opts.lsb, opts.stride, HEADER_LEN * 8)?;
    let header_bytes = bits_to_bytes(&header_bits);
    let header = FrameHeader::read(&header_bytes, opts.strict)?;

    let capacity = lsb::capacity_bits(sample_count, opts.lsb, opts.stride);
    let total_bits = (HEADER_LEN + header.payload_len as usize) * 8;
    if total_bits > capacity {
        return Err(StegoError::Truncated {
            expected: total_bits,
            available: capacity,
        });
    }

    let all_bits = lsb::extract(wav.samples(), width, opts.lsb, opts.stride, total_bits)?;
    let coded = bits_to_bytes(&all_bits[HEADER_LEN * 8..]);

    let ec_tag = EcTag::from_byte(header.ec_tag)?;
    let enc_tag = EncTag::from_byte(header.enc_tag)?;
    let hash_tag = HashTag::from_byte(header.hash_tag)?;

    let ciphertext = ecc::decode(ec_tag, header.ec_param, &coded)?;
    cipher::decrypt(enc_tag, hash_tag, opts.credentials, &ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::FixedCredentials;

    fn carrier(sample_count: usize) -> WavFile {
        let mut fmt_body = Vec::new();
        fmt_body.extend_from_slice(&1u16.to_le_bytes());
        fmt_body.extend_from_slice(&1u16.to_le_bytes());
        fmt_body.extend_from_slice(&44100u32.to_le_bytes());
        fmt_body.extend_from_slice(&88200u32.to_le_bytes());
        fmt_body.extend_from_slice(&2u16.to_le_bytes());
        fmt_body.extend_from_slice(&16u16.to_le_bytes());

        let samples = vec![0u8; sample_count * 2];

        let mut body = Vec::new();
        body.extend_from_slice(b"fmt ");
        body.extend_from_slice(&(fmt_body.len() as u32).to_le_bytes());
        body.extend_from_slice(&fmt_body);
        body.extend_from_slice(b"data");
        body.extend_from_slice(&(samples.len() as u32).to_le_bytes());
        body.extend_from_slice(&samples);

        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(4 + body.len() as u32).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(&body);

        WavFile::parse(&out).unwrap()
    }

    #[test]
    fn embed_then_extract_plaintext_roundtrip() {
        let mut wav = carrier(10_000);
        let creds = FixedCredentials::new("unused");
        let embed_opts = EmbedOptions {
            lsb: 1,
            stride: 1,
            ec_tag: EcTag::None,
            ec_param: 0,
            enc_tag: EncTag::None,
            hash_tag: HashTag::None,
            repeat_data: false,
            credentials: &creds,
        };
        embed(&mut wav, b"hi", &embed_opts).unwrap();

        let extract_opts = ExtractOptions {
            lsb: 1,
            stride: 1,
            strict: false,
            credentials: &creds,
        };
        let recovered = extract(&wav, &extract_opts).unwrap();
        assert_eq!(recovered, b"hi");
    }

    #[test]
    fn roundtrip_survives_single_bit_flip_with_hamming() {
        let mut wav = carrier(10_000);
        let creds = FixedCredentials::new("unused");
        let embed_opts = EmbedOptions {
            lsb: 1,
            stride: 1,
            ec_tag: EcTag::Hamming,
            ec_param: 4,
            enc_tag: EncTag::None,
            hash_tag: HashTag::None,
            repeat_data: false,
            credentials: &creds,
        };
        embed(&mut wav, b"hi", &embed_opts).unwrap();

        // flip one LSB well inside the coded payload region
        let idx = (HEADER_LEN + 2) * 8 + 3;
        wav.samples_mut()[idx * 2] ^= 0x01;

        let extract_opts = ExtractOptions {
            lsb: 1,
            stride: 1,
            strict: false,
            credentials: &creds,
        };
        let recovered = extract(&wav, &extract_opts).unwrap();
        assert_eq!(recovered, b"hi");
    }

    #[test]
    fn capacity_exceeded_propagates() {
        let mut wav = carrier(10); // far too small
        let creds = FixedCredentials::new("unused");
        let embed_opts = EmbedOptions {
            lsb: 1,
            stride: 1,
            ec_tag: EcTag::None,
            ec_param: 0,
            enc_tag: EncTag::None,
            hash_tag: HashTag::None,
            repeat_data: false,
            credentials: &creds,
        };
        let err = embed(&mut wav, b"this message is much too long", &embed_opts).unwrap_err();
        assert!(matches!(err, StegoError::CapacityExceeded { .. }));
    }

    #[test]
    fn encrypted_roundtrip_and_wrong_password_fails() {
        let mut wav = carrier(20_000);
        let enc_creds = FixedCredentials::new("s3cr3t");
        let embed_opts = EmbedOptions {
            lsb: 1,
            stride: 1,
            ec_tag: EcTag::None,
            ec_param: 0,
            enc_tag: EncTag::Aead,
            hash_tag: HashTag::Pbkdf2,
            repeat_data: false,
            credentials: &enc_creds,
        };
        embed(&mut wav, b"top secret", &embed_opts).unwrap();

        let right_extract = ExtractOptions {
            lsb: 1,
            stride: 1,
            strict: false,
            credentials: &enc_creds,
        };
        assert_eq!(extract(&wav, &right_extract).unwrap(), b"top secret");

        let wrong_creds = FixedCredentials::new("nope");
        let wrong_extract = ExtractOptions {
            lsb: 1,
            stride: 1,
            strict: false,
            credentials: &wrong_creds,
        };
        let err = extract(&wav, &wrong_extract).unwrap_err();
        assert!(matches!(err, StegoError::DecryptFailure(_)));
    }
}
