//! Byte <-> bit conversions, MSB-first within each byte.
//!
//! Built on `bitstream_io`'s `BigEndian` bit order, which already matches
//! the MSB-first convention this codec needs everywhere else (the frame
//! header and the LSB engine both read/write bits in this order).

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use std::io::Cursor;

/// Expands `bytes` into its constituent bits, bit 7 of each byte first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut reader: BitReader<Cursor<&[u8]>, BigEndian> = BitReader::new(Cursor::new(bytes));
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for _ in 0..bytes.len() * 8 {
        bits.push(reader.read_bit().expect("in-memory cursor never errors"));
    }
    bits
}

/// Packs `bits` back into bytes, zero-padding the trailing partial byte on
/// its low-order side.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bits.len().div_ceil(8));
    {
        let mut writer: BitWriter<&mut Vec<u8>, BigEndian> = BitWriter::new(&mut out);
        for &bit in bits {
            writer.write_bit(bit).expect("in-memory writer never errors");
        }
        let pad = (8 - (bits.len() % 8)) % 8;
        for _ in 0..pad {
            writer.write_bit(false).expect("in-memory writer never errors");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_is_identity() {
        let samples: &[&[u8]] = &[&[], &[0x00], &[0xFF], &[0x12, 0x34, 0xAB], &[0x01; 37]];
        for b in samples {
            assert_eq!(bits_to_bytes(&bytes_to_bits(b)), *b);
        }
    }

    #[test]
    fn msb_first_ordering() {
        let bits = bytes_to_bits(&[0b1010_0000]);
        assert_eq!(
            bits,
            vec![true, false, true, false, false, false, false, false]
        );
    }

    #[test]
    fn trailing_partial_byte_zero_padded() {
        let bits = vec![true, true, true]; // 0b111 -> 0b1110_0000
        assert_eq!(bits_to_bytes(&bits), vec![0b1110_0000]);
    }
}
