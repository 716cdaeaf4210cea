//! # Error Types
//!
//! Structured error handling for the packet codec.
//!
//! This module defines all error variants that can occur while framing or
//! unframing packets and while encoding or decoding multi-precision integers.
//!
//! ## Error Categories
//! - **Framing errors**: malformed or truncated packet headers
//! - **Encoding errors**: length forms the codec deliberately does not support
//! - **Registry errors**: packet tags with no registered variant
//! - **Contract errors**: arguments outside the representable range
//!
//! Every error is detected eagerly and propagated immediately; a malformed or
//! oversized input aborts the whole parse or encode call. There is no partial
//! result and nothing is silently swallowed.
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use pgp_wire::error::{Result, WireError};
//! use pgp_wire::protocol::message::Message;
//!
//! fn packet_count(raw: &[u8]) -> Result<usize> {
//!     let message = Message::parse(raw.to_vec())?;
//!     Ok(message.len())
//! }
//!
//! match packet_count(&[0x34]) {
//!     Err(WireError::MalformedHeader { leading }) => {
//!         assert_eq!(leading, 0x34);
//!     }
//!     other => panic!("expected a malformed header, got {other:?}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

// WireError is the primary error type for all codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireError {
    /// The leading header byte does not have the high bit set.
    #[error("malformed packet header: leading byte {leading:#04x} has bit 7 clear")]
    MalformedHeader { leading: u8 },

    /// A declared length exceeds the bytes actually available.
    #[error("truncated input: needed {needed} bytes, only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// A length form this codec deliberately does not implement.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// A packet tag with no registered variant.
    #[error("unknown packet tag: {0}")]
    UnknownTag(u8),

    /// An argument outside the range the chosen format can represent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl WireError {
    /// Truncation error for a read that needs `needed` bytes out of `available`.
    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        WireError::TruncatedInput { needed, available }
    }
}

/// Type alias for Results using WireError
pub type Result<T> = std::result::Result<T, WireError>;
