//! # Multi-Precision Integers
//!
//! Codec for the MPI wire form: a 16-bit big-endian bit count followed by
//! `ceil(bitlen/8)` magnitude bytes, most significant first.
//!
//! The value itself is kept as a normalized big-endian byte vector rather
//! than a native integer, so magnitudes of any size round-trip without a
//! big-integer dependency. Normalized means no leading zero octets: the
//! stored bit length always reflects the true highest set bit, which is
//! exactly the invariant the wire format demands.
//!
//! ## Usage
//! ```rust
//! use pgp_wire::core::mpi::Mpi;
//!
//! let mpi = Mpi::from_uint(0x01FF);
//! let encoded = mpi.encode().unwrap();
//! assert_eq!(encoded, vec![0x00, 0x09, 0x01, 0xFF]);
//!
//! let (decoded, rest) = Mpi::decode(&encoded).unwrap();
//! assert_eq!(decoded, mpi);
//! assert!(rest.is_empty());
//! ```

use crate::error::{Result, WireError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire size of the leading bit-count field.
const BITLEN_FIELD_LEN: usize = 2;

/// A non-negative arbitrary-precision integer.
///
/// Immutable once constructed. The magnitude is big-endian with no leading
/// zero octets; zero is the empty magnitude.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mpi {
    magnitude: Vec<u8>,
}

impl Mpi {
    /// Build an MPI from a native unsigned integer.
    pub fn from_uint(value: u128) -> Self {
        Self::from_magnitude_bytes(&value.to_be_bytes())
    }

    /// Build an MPI from big-endian magnitude bytes.
    ///
    /// Leading zero octets are stripped, so any byte string is a valid
    /// input; negative values are unrepresentable by construction.
    pub fn from_magnitude_bytes(bytes: &[u8]) -> Self {
        let first_nonzero = bytes.iter().position(|&b| b != 0);
        let magnitude = match first_nonzero {
            Some(i) => bytes[i..].to_vec(),
            None => Vec::new(),
        };
        Self { magnitude }
    }

    /// Position of the highest set bit plus one; zero for the value zero.
    pub fn bits(&self) -> usize {
        match self.magnitude.first() {
            Some(&top) => (self.magnitude.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Big-endian magnitude bytes, no leading zeros. Empty for zero.
    pub fn magnitude(&self) -> &[u8] {
        &self.magnitude
    }

    /// The value as a native integer, if it fits in 128 bits.
    pub fn to_uint(&self) -> Option<u128> {
        if self.magnitude.len() > 16 {
            return None;
        }
        let mut value = 0u128;
        for &byte in &self.magnitude {
            value = (value << 8) | u128::from(byte);
        }
        Some(value)
    }

    /// Decode one MPI from the front of `buffer`.
    ///
    /// Returns the value and the unconsumed remainder. Fails with
    /// `TruncatedInput` when the buffer is shorter than the declared
    /// magnitude requires.
    pub fn decode(buffer: &[u8]) -> Result<(Self, &[u8])> {
        if buffer.len() < BITLEN_FIELD_LEN {
            return Err(WireError::truncated(BITLEN_FIELD_LEN, buffer.len()));
        }
        let bitlen = u16::from_be_bytes([buffer[0], buffer[1]]) as usize;
        let bytelen = bitlen.div_ceil(8);

        let consumed = BITLEN_FIELD_LEN + bytelen;
        if buffer.len() < consumed {
            return Err(WireError::truncated(consumed, buffer.len()));
        }

        let value = Self::from_magnitude_bytes(&buffer[BITLEN_FIELD_LEN..consumed]);
        Ok((value, &buffer[consumed..]))
    }

    /// Encode to the wire form: 2-byte bit count, then the magnitude.
    ///
    /// Zero encodes as `00 00` with no magnitude bytes. Fails with
    /// `InvalidArgument` when the bit count does not fit the 16-bit field.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let bitlen = self.bits();
        if bitlen > u16::MAX as usize {
            return Err(WireError::InvalidArgument(format!(
                "MPI bit length {bitlen} exceeds the 16-bit length field"
            )));
        }

        let mut out = Vec::with_capacity(BITLEN_FIELD_LEN + self.magnitude.len());
        out.extend_from_slice(&(bitlen as u16).to_be_bytes());
        out.extend_from_slice(&self.magnitude);
        Ok(out)
    }
}

impl From<u128> for Mpi {
    fn from(value: u128) -> Self {
        Self::from_uint(value)
    }
}

impl From<u64> for Mpi {
    fn from(value: u64) -> Self {
        Self::from_uint(value.into())
    }
}

impl From<u32> for Mpi {
    fn from(value: u32) -> Self {
        Self::from_uint(value.into())
    }
}

impl fmt::Debug for Mpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mpi<0x")?;
        if self.magnitude.is_empty() {
            write!(f, "0")?;
        }
        for byte in &self.magnitude {
            write!(f, "{byte:02X}")?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_encodes_as_empty_body() {
        let zero = Mpi::from_uint(0);
        assert_eq!(zero.bits(), 0);
        assert_eq!(zero.encode().expect("encode zero"), vec![0x00, 0x00]);
    }

    #[test]
    fn test_bit_length_reflects_highest_set_bit() {
        assert_eq!(Mpi::from_uint(1).bits(), 1);
        assert_eq!(Mpi::from_uint(0xFF).bits(), 8);
        assert_eq!(Mpi::from_uint(0x100).bits(), 9);
        assert_eq!(Mpi::from_uint(u128::MAX).bits(), 128);
    }

    #[test]
    fn test_leading_zeros_are_stripped() {
        let padded = Mpi::from_magnitude_bytes(&[0x00, 0x00, 0x01, 0x02]);
        assert_eq!(padded.magnitude(), &[0x01, 0x02]);
        assert_eq!(padded, Mpi::from_uint(0x0102));
    }

    #[test]
    fn test_known_vector() {
        // 511 = 0x1FF: nine bits, two magnitude bytes
        let encoded = Mpi::from_uint(511).encode().expect("encode");
        assert_eq!(encoded, vec![0x00, 0x09, 0x01, 0xFF]);
    }

    #[test]
    fn test_roundtrip_preserves_value_and_remainder() {
        for value in [0u128, 1, 127, 128, 255, 256, 65_535, 65_536, u128::MAX] {
            let mpi = Mpi::from_uint(value);
            let mut encoded = mpi.encode().expect("encode");
            encoded.extend_from_slice(b"tail");

            let (decoded, rest) = Mpi::decode(&encoded).expect("decode");
            assert_eq!(decoded, mpi);
            assert_eq!(decoded.to_uint(), Some(value));
            assert_eq!(rest, b"tail");
        }
    }

    #[test]
    fn test_decode_truncated_prefix() {
        let result = Mpi::decode(&[0x00]);
        assert!(matches!(
            result,
            Err(WireError::TruncatedInput {
                needed: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn test_decode_truncated_magnitude() {
        // Declares 16 bits (two magnitude bytes) but carries only one
        let result = Mpi::decode(&[0x00, 0x10, 0xAB]);
        assert!(matches!(
            result,
            Err(WireError::TruncatedInput {
                needed: 4,
                available: 3
            })
        ));
    }

    #[test]
    fn test_decode_accepts_non_canonical_padding() {
        // bitlen 16 with a zero top byte; decoder normalizes
        let (decoded, rest) = Mpi::decode(&[0x00, 0x10, 0x00, 0x7F]).expect("decode");
        assert_eq!(decoded, Mpi::from_uint(0x7F));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_encode_rejects_oversized_bit_length() {
        // 8192 magnitude bytes = 65536 bits, one past the field maximum
        let huge = Mpi::from_magnitude_bytes(&vec![0xFF; 8192]);
        assert!(matches!(
            huge.encode(),
            Err(WireError::InvalidArgument(_))
        ));

        // 65535 bits exactly still fits: top bit of the leading octet clear
        let just_fits = vec![0x7F; 8192];
        let mpi = Mpi::from_magnitude_bytes(&just_fits);
        assert_eq!(mpi.bits(), 65_535);
        assert!(mpi.encode().is_ok());
    }

    #[test]
    fn test_to_uint_overflow_is_none() {
        let wide = Mpi::from_magnitude_bytes(&[0x01; 17]);
        assert_eq!(wide.to_uint(), None);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Mpi::from_uint(0xBEEF)), "Mpi<0xBEEF>");
        assert_eq!(format!("{:?}", Mpi::from_uint(0)), "Mpi<0x0>");
    }
}
