//! RIFF/WAVE container: parses a file into its `fmt ` metadata plus the
//! sample buffer, preserving every other chunk verbatim for byte-exact
//! round-trip when the sample buffer is unchanged.

use crate::errors::{Result, StegoError};

const WAVE_FORMAT_PCM: u16 = 1;
const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

#[derive(Debug, Clone)]
struct Chunk {
    id: [u8; 4],
    data: Vec<u8>,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtInfo {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FmtInfo {
    pub fn sample_width(&self) -> usize {
        (self.bits_per_sample as usize).div_ceil(8)
    }
}

/// A parsed WAV file: format metadata, the mutable sample buffer, and every
/// other chunk in original order for verbatim re-emission.
pub struct WavFile {
    fmt: FmtInfo,
    chunks: Vec<Chunk>,
    data_index: usize,
}

impl WavFile {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
            return Err(StegoError::NotAWav(
                "missing RIFF/WAVE magic".into(),
            ));
        }

        let mut pos = 12usize;
        let mut chunks = Vec::new();
        let mut fmt: Option<FmtInfo> = None;
        let mut data_index = None;

        while pos + 8 <= bytes.len() {
            let id: [u8; 4] = bytes[pos..pos + 4].try_into().unwrap();
            let size = u32::from_le_bytes(bytes[pos + 4..pos + 8].try_into().unwrap()) as usize;
            let body_start = pos + 8;
            let body_end = body_start
                .checked_add(size)
                .filter(|&end| end <= bytes.len())
                .ok_or_else(|| StegoError::NotAWav(format!("chunk {id:?} size runs past eof")))?;
            let had_pad_byte = size % 2 == 1 && body_end < bytes.len();
            let data = bytes[body_start..body_end].to_vec();

            if &id == b"fmt " {
                fmt = Some(parse_fmt(&data)?);
            }
            if &id == b"data" {
                data_index = Some(chunks.len());
            }

            chunks.push(Chunk { id, data });

            pos = body_end + if had_pad_byte { 1 } else { 0 };
        }

        let fmt = fmt.ok_or_else(|| StegoError::NotAWav("no fmt chunk".into()))?;
        let data_index = data_index.ok_or_else(|| StegoError::NotAWav("no data chunk".into()))?;

        if fmt.format_tag != WAVE_FORMAT_PCM && fmt.format_tag != WAVE_FORMAT_EXTENSIBLE {
            return Err(StegoError::UnsupportedFormat(format!(
                "format tag {} is not linear PCM",
                fmt.format_tag
            )));
        }
        let width = fmt.sample_width();
        if !(1..=4).contains(&width) {
            return Err(StegoError::UnsupportedFormat(format!(
                "sample width {width} bytes unsupported"
            )));
        }

        Ok(Self {
            fmt,
            chunks,
            data_index,
        })
    }

    pub fn fmt(&self) -> FmtInfo {
        self.fmt
    }

    pub fn samples(&self) -> &[u8] {
        &self.chunks[self.data_index].data
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.chunks[self.data_index].data
    }

    pub fn sample_count(&self) -> usize {
        self.samples().len() / self.fmt.sample_width()
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(b"WAVE");
        for chunk in &self.chunks {
            body.extend_from_slice(&chunk.id);
            body.extend_from_slice(&(chunk.data.len() as u32).to_le_bytes());
            body.extend_from_slice(&chunk.data);
            if chunk.data.len() % 2 == 1 {
                body.push(0);
            }
        }

        let mut out = Vec::with_capacity(8 + body.len());
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(&body);
        out
    }
}

fn parse_fmt(data: &[u8]) -> Result<FmtInfo> {
    if data.len() < 16 {
        return Err(StegoError::UnsupportedFormat(
            "fmt chunk shorter than 16 bytes".into(),
        ));
    }
    Ok(FmtInfo {
        format_tag: u16::from_le_bytes(data[0..2].try_into().unwrap()),
        channels: u16::from_le_bytes(data[2..4].try_into().unwrap()),
        sample_rate: u32::from_le_bytes(data[4..8].try_into().unwrap()),
        byte_rate: u32::from_le_bytes(data[8..12].try_into().unwrap()),
        block_align: u16::from_le_bytes(data[12..14].try_into().unwrap()),
        bits_per_sample: u16::from_le_bytes(data[14..16].try_into().unwrap()),
    })
}
