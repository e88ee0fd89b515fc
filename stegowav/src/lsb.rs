//! Overlays a bit stream onto (or reads one back from) the low-order bits
//! of a strided selection of PCM sample bytes.
//!
//! Only the lowest byte of each (little-endian) sample is ever touched,
//! and only its `lsb` lowest-order bits. Traversal order is fixed: sample
//! `0, stride, 2*stride, ...`, filling `lsb` bits of each sample before
//! advancing to the next.

use crate::errors::{Result, StegoError};

fn target_count(sample_count: usize, stride: usize) -> usize {
    sample_count / stride
}

/// Bit capacity of a sample buffer under a given `lsb`/`stride` choice.
pub fn capacity_bits(sample_count: usize, lsb: u8, stride: usize) -> usize {
    lsb as usize * target_count(sample_count, stride)
}

/// Embeds `bits` into `samples` (width `sample_width` bytes per sample,
/// little-endian). When `repeat_data` is set, `bits` wraps to fill the full
/// carrier capacity; otherwise the written length is exactly `bits.len()`.
pub fn embed(
    samples: &mut [u8],
    sample_width: usize,
    bits: &[bool],
    lsb: u8,
    stride: usize,
    repeat_data: bool,
) -> Result<()> {
    let sample_count = samples.len() / sample_width;
    let capacity = (lsb as usize) * target_count(sample_count, stride);

    if bits.is_empty() {
        return Ok(());
    }

    let total_to_write = if repeat_data {
        capacity
    } else {
        if bits.len() > capacity {
            return Err(StegoError::CapacityExceeded {
                needed: bits.len(),
                available: capacity,
            });
        }
        bits.len()
    };

    let mut written = 0usize;
    let mut src = 0usize;
    let mut sample_idx = 0usize;
    while written < total_to_write && sample_idx < sample_count {
        let byte_idx = sample_idx * sample_width;
        let mut byte = samples[byte_idx];
        for bitpos in 0..lsb {
            if written >= total_to_write {
                break;
            }
            let bit = bits[src % bits.len()];
            byte = (byte & !(1 << bitpos)) | ((bit as u8) << bitpos);
            written += 1;
            src += 1;
        }
        samples[byte_idx] = byte;
        sample_idx += stride;
    }

    Ok(())
}

/// Reads `num_bits` back out of `samples` in the same traversal order used
/// by [`embed`].
pub fn extract(samples: &[u8], sample_width: usize, lsb: u8, stride: usize, num_bits: usize) -> Result<Vec<bool>> {
    let sample_count = samples.len() / sample_width;
    let capacity = (lsb as usize) * target_count(sample_count, stride);
    if num_bits > capacity {
        return Err(StegoError::Truncated {
            expected: num_bits,
            available: capacity,
        });
    }

    let mut out = Vec::with_capacity(num_bits);
    let mut sample_idx = 0usize;
    while out.len() < num_bits && sample_idx < sample_count {
        let byte_idx = sample_idx * sample_width;
        let byte = samples[byte_idx];
        for bitpos in 0..lsb {
            if out.len() >= num_bits {
                break;
            }
            out.push((byte >> bitpos) & 1 == 1);
        }
        sample_idx += stride;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_then_extract_is_identity() {
        let mut samples = vec![0u8; 200];
        let bits: Vec<bool> = (0..80).map(|i| i % 3 == 0).collect();
        embed(&mut samples, 2, &bits, 1, 1, false).unwrap();
        let out = extract(&samples, 2, 1, 1, bits.len()).unwrap();
        assert_eq!(out, bits);
    }

    #[test]
    fn multi_bit_lsb_and_stride() {
        let mut samples = vec![0u8; 400];
        let bits: Vec<bool> = (0..50).map(|i| i % 2 == 0).collect();
        embed(&mut samples, 2, &bits, 3, 4, false).unwrap();
        let out = extract(&samples, 2, 3, 4, bits.len()).unwrap();
        assert_eq!(out, bits);
    }

    #[test]
    fn capacity_exceeded_without_repeat() {
        let mut samples = vec![0u8; 16]; // 8 samples @ width 2
        let bits = vec![true; 100];
        let err = embed(&mut samples, 2, &bits, 1, 1, false).unwrap_err();
        assert!(matches!(err, StegoError::CapacityExceeded { .. }));
    }

    #[test]
    fn repeat_data_fills_capacity_without_growing_sample_count() {
        let mut samples = vec![0u8; 16]; // 8 samples @ width 2, capacity 8 bits
        let before_len = samples.len();
        let bits = vec![true, false, true];
        embed(&mut samples, 2, &bits, 1, 1, true).unwrap();
        assert_eq!(samples.len(), before_len);
        let out = extract(&samples, 2, 1, 1, 3).unwrap();
        assert_eq!(out, bits);
    }

    #[test]
    fn only_lowest_byte_of_multibyte_sample_is_touched() {
        let mut samples = vec![0xFFu8, 0xAA, 0xFF, 0xAA]; // two 16-bit samples, high byte 0xAA
        embed(&mut samples, 2, &[false], 1, 1, false).unwrap();
        assert_eq!(samples[1], 0xAA);
        assert_eq!(samples[3], 0xAA);
    }
}
