//! # Packet Headers
//!
//! Codec for the two alternative packet header encodings.
//!
//! A header carries a tag (the packet's semantic type) and the body length,
//! but the two formats pack them differently: the old format spends two bits
//! of the leading byte on a length-width code and keeps a 4-bit tag, while
//! the new format keeps a 5-bit tag and makes the width a property of the
//! length octets themselves.
//!
//! ## Length Forms
//! | Form | New format | Old format |
//! |---|---|---|
//! | 1 octet | `len < 192` | width code 0 |
//! | 2 octets | `192 ≤ len ≤ 8383`, biased | width code 1, big-endian |
//! | 4/5 octets | leading `0xFF`, 32-bit big-endian | width code 2, big-endian |
//! | streaming | partial lengths — rejected | indeterminate — rejected |
//!
//! Encoding picks the smallest width that fits. Format selection under
//! [`HeaderFormat::Auto`] is by tag value alone: tags below 15 take the old
//! format. The threshold is deliberately length-blind for compatibility with
//! existing streams, even though the old format itself tops out at 2^32−1.

use crate::config::{
    HEADER_MARKER_BIT, NEW_FORMAT_BIT, NEW_FORMAT_FIVE_OCTET_MARKER, NEW_FORMAT_MAX_BODY_LEN,
    NEW_FORMAT_ONE_OCTET_MAX, NEW_FORMAT_TAG_MASK, NEW_FORMAT_TWO_OCTET_BIAS,
    NEW_FORMAT_TWO_OCTET_CEIL, OLD_FORMAT_MAX_BODY_LEN, OLD_FORMAT_ONE_OCTET_CEIL,
    OLD_FORMAT_PREFERRED_TAG_CEIL, OLD_FORMAT_TAG_MASK, OLD_FORMAT_TWO_OCTET_CEIL,
};
use crate::error::{Result, WireError};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Decoded packet header: what the packet is and where its body lies.
///
/// Transient; exists only while one packet is framed or unframed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketHeader {
    /// Packet tag (5 bits at most).
    pub tag: u8,
    /// Declared body length in bytes.
    pub body_len: usize,
    /// Bytes the header itself occupies; the body starts at this offset.
    pub header_len: usize,
}

/// Header format selection for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeaderFormat {
    /// Old format for tags below 15, new format otherwise.
    #[default]
    Auto,
    /// Force the old (legacy) format.
    Old,
    /// Force the new format.
    New,
}

/// Decode one packet header from the front of `buffer`.
///
/// # Errors
/// - `MalformedHeader` when bit 7 of the leading byte is clear
/// - `UnsupportedEncoding` for partial or indeterminate length forms
/// - `TruncatedInput` when the buffer ends inside the header
pub fn decode_header(buffer: &[u8]) -> Result<PacketHeader> {
    let leading = *buffer
        .first()
        .ok_or_else(|| WireError::truncated(1, 0))?;

    if leading & HEADER_MARKER_BIT == 0 {
        return Err(WireError::MalformedHeader { leading });
    }

    let header = if leading & NEW_FORMAT_BIT != 0 {
        decode_new(buffer, leading)?
    } else {
        decode_old(buffer, leading)?
    };
    trace!(
        tag = header.tag,
        body_len = header.body_len,
        header_len = header.header_len,
        "decoded packet header"
    );
    Ok(header)
}

fn decode_new(buffer: &[u8], leading: u8) -> Result<PacketHeader> {
    let tag = leading & NEW_FORMAT_TAG_MASK;
    let first = read_octet(buffer, 1)?;

    if first as usize <= NEW_FORMAT_ONE_OCTET_MAX {
        Ok(PacketHeader {
            tag,
            body_len: first as usize,
            header_len: 2,
        })
    } else if first <= NEW_FORMAT_TWO_OCTET_CEIL {
        let second = read_octet(buffer, 2)?;
        let body_len = ((first as usize - NEW_FORMAT_TWO_OCTET_BIAS) << 8)
            + second as usize
            + NEW_FORMAT_TWO_OCTET_BIAS;
        Ok(PacketHeader {
            tag,
            body_len,
            header_len: 3,
        })
    } else if first == NEW_FORMAT_FIVE_OCTET_MARKER {
        let body_len = read_u32(buffer, 2)? as usize;
        Ok(PacketHeader {
            tag,
            body_len,
            header_len: 6,
        })
    } else {
        Err(WireError::UnsupportedEncoding(
            "partial body lengths are not implemented".into(),
        ))
    }
}

fn decode_old(buffer: &[u8], leading: u8) -> Result<PacketHeader> {
    let tag = (leading >> 2) & OLD_FORMAT_TAG_MASK;

    match leading & 0b11 {
        0 => Ok(PacketHeader {
            tag,
            body_len: read_octet(buffer, 1)? as usize,
            header_len: 2,
        }),
        1 => Ok(PacketHeader {
            tag,
            body_len: read_u16(buffer, 1)? as usize,
            header_len: 3,
        }),
        2 => Ok(PacketHeader {
            tag,
            body_len: read_u32(buffer, 1)? as usize,
            header_len: 5,
        }),
        _ => Err(WireError::UnsupportedEncoding(
            "indeterminate lengths are not implemented".into(),
        )),
    }
}

/// Encode a packet header for `tag` and a body of `body_len` bytes.
///
/// Returns the header bytes only; the caller appends the body.
///
/// # Errors
/// - `InvalidArgument` when the tag does not fit the chosen format's tag
///   field, or when `body_len` exceeds the widest old-format length field
/// - `UnsupportedEncoding` when the new format would need a partial body
///   length (`body_len > 8383`)
pub fn encode_header(tag: u8, body_len: usize, format: HeaderFormat) -> Result<Vec<u8>> {
    match format {
        HeaderFormat::Old => encode_old(tag, body_len),
        HeaderFormat::New => encode_new(tag, body_len),
        HeaderFormat::Auto => {
            if tag < OLD_FORMAT_PREFERRED_TAG_CEIL {
                encode_old(tag, body_len)
            } else {
                encode_new(tag, body_len)
            }
        }
    }
}

fn encode_old(tag: u8, body_len: usize) -> Result<Vec<u8>> {
    if tag > OLD_FORMAT_TAG_MASK {
        return Err(WireError::InvalidArgument(format!(
            "tag {tag} does not fit the old format's 4-bit tag field"
        )));
    }

    let base = HEADER_MARKER_BIT | (tag << 2);
    if body_len < OLD_FORMAT_ONE_OCTET_CEIL {
        Ok(vec![base, body_len as u8])
    } else if body_len < OLD_FORMAT_TWO_OCTET_CEIL {
        let mut out = vec![base | 1];
        out.extend_from_slice(&(body_len as u16).to_be_bytes());
        Ok(out)
    } else if body_len <= OLD_FORMAT_MAX_BODY_LEN {
        let mut out = vec![base | 2];
        out.extend_from_slice(&(body_len as u32).to_be_bytes());
        Ok(out)
    } else {
        Err(WireError::InvalidArgument(format!(
            "body length {body_len} exceeds the widest old-format length field"
        )))
    }
}

fn encode_new(tag: u8, body_len: usize) -> Result<Vec<u8>> {
    if tag > NEW_FORMAT_TAG_MASK {
        return Err(WireError::InvalidArgument(format!(
            "tag {tag} does not fit the new format's 5-bit tag field"
        )));
    }

    let base = HEADER_MARKER_BIT | NEW_FORMAT_BIT | tag;
    if body_len <= NEW_FORMAT_ONE_OCTET_MAX {
        Ok(vec![base, body_len as u8])
    } else if body_len <= NEW_FORMAT_MAX_BODY_LEN {
        let offset = body_len - NEW_FORMAT_TWO_OCTET_BIAS;
        Ok(vec![
            base,
            ((offset >> 8) + NEW_FORMAT_TWO_OCTET_BIAS) as u8,
            (offset & 0xFF) as u8,
        ])
    } else {
        Err(WireError::UnsupportedEncoding(format!(
            "body length {body_len} requires partial body lengths, which are not implemented"
        )))
    }
}

fn read_octet(buffer: &[u8], index: usize) -> Result<u8> {
    buffer
        .get(index)
        .copied()
        .ok_or_else(|| WireError::truncated(index + 1, buffer.len()))
}

fn read_u16(buffer: &[u8], index: usize) -> Result<u16> {
    let end = index + 2;
    let field: [u8; 2] = buffer
        .get(index..end)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| WireError::truncated(end, buffer.len()))?;
    Ok(u16::from_be_bytes(field))
}

fn read_u32(buffer: &[u8], index: usize) -> Result<u32> {
    let end = index + 4;
    let field: [u8; 4] = buffer
        .get(index..end)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| WireError::truncated(end, buffer.len()))?;
    Ok(u32::from_be_bytes(field))
}
