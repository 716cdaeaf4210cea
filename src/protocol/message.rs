//! # Message Assembly
//!
//! An ordered packet sequence framed inside one contiguous byte stream.
//!
//! Parsing repeatedly decodes a header, bounds-checks the declared body
//! against the bytes actually remaining, slices the body without copying,
//! resolves the tag through the registry, and advances. Serialization is the
//! mirror image: header then body, packet after packet, in order. Order is
//! significant and round-trips exactly.
//!
//! ## Usage
//! ```rust
//! use pgp_wire::protocol::message::Message;
//! use pgp_wire::protocol::packet::Packet;
//!
//! let message = Message::from_packets(vec![Packet::user_id("Alice <a@example.com>")]);
//! let wire = message.to_bytes().unwrap();
//! let parsed = Message::parse(wire).unwrap();
//! assert_eq!(parsed, message);
//! ```

use crate::core::header::{decode_header, encode_header, HeaderFormat};
use crate::error::{Result, WireError};
use crate::protocol::packet::Packet;
use bytes::{Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// An ordered sequence of packets.
///
/// Mutated only by whole-sequence replacement; individual packets are
/// immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    packets: Vec<Packet>,
}

impl Message {
    /// An empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// A message over an explicit, already-ordered packet list.
    pub fn from_packets(packets: Vec<Packet>) -> Self {
        Self { packets }
    }

    /// Parse a byte stream into its packet sequence.
    ///
    /// Consumes the whole buffer; empty input yields an empty message.
    /// Bodies are sliced from the input without copying.
    ///
    /// # Errors
    /// Any header error propagates unchanged; a body running past the end of
    /// the buffer fails with `TruncatedInput`; an unregistered tag fails
    /// with `UnknownTag`. The first error aborts the whole parse.
    pub fn parse(raw: impl Into<Bytes>) -> Result<Self> {
        let raw: Bytes = raw.into();
        let mut packets = Vec::new();
        let mut offset = 0;

        while offset < raw.len() {
            let header = decode_header(&raw[offset..])?;
            let remaining = raw.len() - offset;
            let consumed = header.header_len.saturating_add(header.body_len);
            if consumed > remaining {
                return Err(WireError::truncated(consumed, remaining));
            }

            let body = raw.slice(offset + header.header_len..offset + consumed);
            let packet = Packet::from_tag_and_body(header.tag, body)?;
            trace!(
                tag = header.tag,
                body_len = header.body_len,
                offset,
                "parsed packet"
            );
            packets.push(packet);
            offset += consumed;
        }

        debug!(packets = packets.len(), bytes = raw.len(), "parsed message");
        Ok(Self { packets })
    }

    /// Serialize the packet sequence into one contiguous byte stream.
    ///
    /// Each packet contributes its header (auto format selection) followed
    /// by its body, in sequence order.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut out = BytesMut::new();
        for packet in &self.packets {
            let body = packet.body();
            let header = encode_header(packet.tag().value(), body.len(), HeaderFormat::Auto)?;
            out.extend_from_slice(&header);
            out.extend_from_slice(body);
        }
        debug!(
            packets = self.packets.len(),
            bytes = out.len(),
            "serialized message"
        );
        Ok(out.freeze())
    }

    /// The packets in stream order.
    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    /// Consume the message, yielding its packets.
    pub fn into_packets(self) -> Vec<Packet> {
        self.packets
    }

    /// Number of packets.
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    /// Whether the message holds no packets.
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Iterate over the packets in stream order.
    pub fn iter(&self) -> std::slice::Iter<'_, Packet> {
        self.packets.iter()
    }
}

impl FromIterator<Packet> for Message {
    fn from_iter<I: IntoIterator<Item = Packet>>(iter: I) -> Self {
        Self {
            packets: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Message {
    type Item = Packet;
    type IntoIter = std::vec::IntoIter<Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.packets.into_iter()
    }
}

impl<'a> IntoIterator for &'a Message {
    type Item = &'a Packet;
    type IntoIter = std::slice::Iter<'a, Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.packets.iter()
    }
}
