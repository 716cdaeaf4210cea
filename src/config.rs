//! # Wire Constants
//!
//! Centralized constants for the packet wire format.
//!
//! Both header encodings hang off a handful of markers, masks, and length
//! thresholds. Keeping them in one place keeps the codec branches readable
//! and gives tests an authoritative source for boundary values.
//!
//! ## Format Recap
//! ```text
//! new format:  1 1 t t t t t  (5-bit tag, length forms below)
//! old format:  1 0 t t t t w w  (4-bit tag, 2-bit length-width code)
//! ```

/// Bit 7 of the leading byte; set for every valid packet header.
pub const HEADER_MARKER_BIT: u8 = 0x80;

/// Bit 6 of the leading byte; set selects the new header format.
pub const NEW_FORMAT_BIT: u8 = 0x40;

/// Mask extracting the 5-bit tag from a new-format leading byte.
pub const NEW_FORMAT_TAG_MASK: u8 = 0x1F;

/// Mask extracting the 4-bit tag from an old-format leading byte
/// (after the 2-bit right shift past the width code).
pub const OLD_FORMAT_TAG_MASK: u8 = 0x0F;

/// Largest body length a new-format one-octet length field can carry.
pub const NEW_FORMAT_ONE_OCTET_MAX: usize = 191;

/// First value of the new-format two-octet biased length range.
pub const NEW_FORMAT_TWO_OCTET_BIAS: usize = 192;

/// Last leading length octet of the two-octet biased range (192..=223).
pub const NEW_FORMAT_TWO_OCTET_CEIL: u8 = 223;

/// Leading length octet announcing a five-octet (32-bit) length field.
pub const NEW_FORMAT_FIVE_OCTET_MARKER: u8 = 255;

/// Largest body length this codec will emit in new format.
///
/// Beyond this the format requires partial body lengths, which are out of
/// scope; encoding larger bodies in new format is refused outright.
pub const NEW_FORMAT_MAX_BODY_LEN: usize = 8383;

/// Auto format selection prefers old format for tags below this value.
pub const OLD_FORMAT_PREFERRED_TAG_CEIL: u8 = 15;

/// Old-format width escalation: below this a one-octet length is used.
pub const OLD_FORMAT_ONE_OCTET_CEIL: usize = 255;

/// Old-format width escalation: below this a two-octet length is used,
/// above it the four-octet form.
pub const OLD_FORMAT_TWO_OCTET_CEIL: usize = 65_535;

/// Largest body length representable in the widest old-format field.
pub const OLD_FORMAT_MAX_BODY_LEN: usize = u32::MAX as usize;
