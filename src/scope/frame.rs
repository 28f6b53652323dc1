//! # Frame Module
//!
//! This module builds the fixed 10-byte wire frame transmitted per
//! sample batch: four little-endian 16-bit values followed by the
//! little-endian CRC-16 of those eight payload bytes.

use super::crc::crc16;

/// Number of sample channels per frame.
pub const SAMPLE_COUNT: usize = 4;

/// Length in bytes of the sample payload.
pub const PAYLOAD_LEN: usize = SAMPLE_COUNT * 2;

/// Total frame length in bytes, payload plus trailing checksum.
pub const FRAME_LEN: usize = PAYLOAD_LEN + 2;

/// Encodes four signed 16-bit samples into a sealed wire frame.
///
/// Each sample keeps its two's-complement bit pattern and is written
/// low byte first, in input order. Bytes 8..10 carry the CRC-16 of
/// bytes 0..8, low byte first.
///
/// # Examples
///
/// ```
/// use serial_scope::scope::frame;
///
/// let out = frame::encode([1, -1, 0, 0]);
/// assert_eq!(out.len(), frame::FRAME_LEN);
/// assert_eq!(&out[..4], &[0x01, 0x00, 0xFF, 0xFF]);
/// ```
#[must_use]
pub fn encode(samples: [i16; SAMPLE_COUNT]) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];

    for (chunk, sample) in frame[..PAYLOAD_LEN].chunks_exact_mut(2).zip(samples) {
        chunk.copy_from_slice(&(sample as u16).to_le_bytes());
    }

    let checksum = crc16(&frame[..PAYLOAD_LEN]);
    frame[PAYLOAD_LEN..].copy_from_slice(&checksum.to_le_bytes());

    frame
}

/// Checks that a frame's trailing two bytes are the little-endian
/// CRC-16 of everything before them.
///
/// Slices too short to carry a checksum fail the check.
#[must_use]
pub fn verify(frame: &[u8]) -> bool {
    if frame.len() < 2 {
        return false;
    }

    let (payload, tail) = frame.split_at(frame.len() - 2);
    let expected = crc16(payload).to_le_bytes();
    tail == expected.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_layout_is_little_endian() {
        let frame = encode([256, 1, -1, 0x7FFF]);
        assert_eq!(
            &frame[..PAYLOAD_LEN],
            &[0x00, 0x01, 0x01, 0x00, 0xFF, 0xFF, 0xFF, 0x7F]
        );
    }

    #[test]
    fn test_checksum_trails_payload() {
        let frame = encode([-120, 340, 0, -32768]);
        let expected = crc16(&frame[..PAYLOAD_LEN]).to_le_bytes();
        assert_eq!(&frame[PAYLOAD_LEN..], expected.as_slice());
    }

    #[test]
    fn test_negative_samples_keep_bit_pattern() {
        let frame = encode([-1, -2, -32768, 0]);
        assert_eq!(&frame[..2], &[0xFF, 0xFF]);
        assert_eq!(&frame[2..4], &[0xFE, 0xFF]);
        assert_eq!(&frame[4..6], &[0x00, 0x80]);
    }

    #[test]
    fn test_frame_length_is_fixed() {
        assert_eq!(FRAME_LEN, 10);
        assert_eq!(encode([0; SAMPLE_COUNT]).len(), 10);
    }

    #[test]
    fn test_verify_accepts_encoded_frames() {
        assert!(verify(&encode([17, -3000, 42, 9999])));
        assert!(verify(&encode([0; SAMPLE_COUNT])));
    }

    #[test]
    fn test_verify_rejects_corruption() {
        let mut frame = encode([17, -3000, 42, 9999]);
        frame[3] ^= 0x01;
        assert!(!verify(&frame));
    }

    #[test]
    fn test_verify_rejects_short_slices() {
        assert!(!verify(&[]));
        assert!(!verify(&[0xFF]));
    }
}
