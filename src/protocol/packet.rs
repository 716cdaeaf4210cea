//! # Packet Variants
//!
//! The closed set of packet kinds this codec understands, and the registry
//! mapping numeric tags onto them.
//!
//! A packet is a tagged container of opaque body bytes. The tag determines
//! the variant; the body is never interpreted here — key material, signature
//! structure, and identity text all belong to higher layers. Dispatch is a
//! closed enum match, not open-ended inheritance: a tag outside the
//! registered set fails with [`WireError::UnknownTag`].

use crate::core::header::{encode_header, HeaderFormat};
use crate::error::{Result, WireError};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Numeric tags of the registered packet kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PacketTag {
    Signature = 2,
    PrivateKey = 5,
    PublicKey = 6,
    PrivateSubkey = 7,
    UserId = 13,
    PublicSubkey = 14,
}

impl PacketTag {
    /// The tag's wire value.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PacketTag {
    type Error = WireError;

    /// The tag registry: every registered tag resolves, anything else is
    /// `UnknownTag`.
    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            2 => Ok(PacketTag::Signature),
            5 => Ok(PacketTag::PrivateKey),
            6 => Ok(PacketTag::PublicKey),
            7 => Ok(PacketTag::PrivateSubkey),
            13 => Ok(PacketTag::UserId),
            14 => Ok(PacketTag::PublicSubkey),
            other => Err(WireError::UnknownTag(other)),
        }
    }
}

/// One packet: a registered kind plus its raw body bytes.
///
/// The packet exclusively owns its body. Bodies are opaque; the `UserId`
/// variant conventionally holds UTF-8 identity text but is stored and
/// round-tripped as raw bytes like every other kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Packet {
    Signature(Bytes),
    PrivateKey(Bytes),
    PublicKey(Bytes),
    PrivateSubkey(Bytes),
    UserId(Bytes),
    PublicSubkey(Bytes),
}

impl Packet {
    /// Construct the variant registered for `tag`, taking ownership of the
    /// body. Fails with `UnknownTag` for unregistered tags.
    pub fn from_tag_and_body(tag: u8, body: Bytes) -> Result<Self> {
        let packet = match PacketTag::try_from(tag)? {
            PacketTag::Signature => Packet::Signature(body),
            PacketTag::PrivateKey => Packet::PrivateKey(body),
            PacketTag::PublicKey => Packet::PublicKey(body),
            PacketTag::PrivateSubkey => Packet::PrivateSubkey(body),
            PacketTag::UserId => Packet::UserId(body),
            PacketTag::PublicSubkey => Packet::PublicSubkey(body),
        };
        Ok(packet)
    }

    /// Convenience constructor for a user identity packet.
    pub fn user_id(uid: impl Into<String>) -> Self {
        Packet::UserId(Bytes::from(uid.into()))
    }

    /// The variant's registered tag.
    pub fn tag(&self) -> PacketTag {
        match self {
            Packet::Signature(_) => PacketTag::Signature,
            Packet::PrivateKey(_) => PacketTag::PrivateKey,
            Packet::PublicKey(_) => PacketTag::PublicKey,
            Packet::PrivateSubkey(_) => PacketTag::PrivateSubkey,
            Packet::UserId(_) => PacketTag::UserId,
            Packet::PublicSubkey(_) => PacketTag::PublicSubkey,
        }
    }

    /// The raw body bytes.
    pub fn body(&self) -> &Bytes {
        match self {
            Packet::Signature(body)
            | Packet::PrivateKey(body)
            | Packet::PublicKey(body)
            | Packet::PrivateSubkey(body)
            | Packet::UserId(body)
            | Packet::PublicSubkey(body) => body,
        }
    }

    /// Consume the packet, keeping only the body.
    pub fn into_body(self) -> Bytes {
        match self {
            Packet::Signature(body)
            | Packet::PrivateKey(body)
            | Packet::PublicKey(body)
            | Packet::PrivateSubkey(body)
            | Packet::UserId(body)
            | Packet::PublicSubkey(body) => body,
        }
    }

    /// Identity text of a `UserId` packet, lossily decoded for display.
    /// `None` for every other variant; the stored bytes are never validated.
    pub fn uid_str(&self) -> Option<Cow<'_, str>> {
        match self {
            Packet::UserId(body) => Some(String::from_utf8_lossy(body)),
            _ => None,
        }
    }

    /// Frame this packet alone: header (auto format selection) then body.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let body = self.body();
        let mut out = encode_header(self.tag().value(), body.len(), HeaderFormat::Auto)?;
        out.extend_from_slice(body);
        Ok(out)
    }
}
