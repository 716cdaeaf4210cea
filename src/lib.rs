//! # pgp-wire
//!
//! Binary packet framing and multi-precision integer codec for OpenPGP-style
//! message streams.
//!
//! The crate frames discrete packets inside a byte stream using either of the
//! format's two header encodings, and encodes/decodes the length-prefixed
//! big-endian integers ("MPIs") embedded in packet bodies. Bodies themselves
//! are opaque: key material, signature structure, and identity text belong to
//! higher layers, as does all cryptography.
//!
//! ## Components
//! - [`core::header`]: the two packet header encodings (old and new)
//! - [`core::mpi`]: multi-precision integer wire form
//! - [`protocol::packet`]: the closed set of registered packet kinds
//! - [`protocol::message`]: packet sequences over contiguous byte streams
//!
//! ## Guarantees
//! - Correct framing and byte-for-byte round-trip fidelity
//! - Every declared length validated before any slice is taken
//! - Structured errors; nothing recovered or swallowed locally
//!
//! The codec is purely synchronous and owns no I/O: it transforms in-memory
//! buffers supplied by the caller, linearly in input size.
//!
//! ## Example
//! ```rust
//! use pgp_wire::{Message, Packet};
//!
//! let message = Message::from_packets(vec![
//!     Packet::user_id("Alice <a@example.com>"),
//! ]);
//!
//! let wire = message.to_bytes()?;
//! assert_eq!(&wire[..2], &[0xB4, 0x15]);
//!
//! let parsed = Message::parse(wire)?;
//! assert_eq!(parsed, message);
//! # Ok::<(), pgp_wire::WireError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use crate::core::header::{decode_header, encode_header, HeaderFormat, PacketHeader};
pub use crate::core::mpi::Mpi;
pub use crate::error::{Result, WireError};
pub use crate::protocol::message::Message;
pub use crate::protocol::packet::{Packet, PacketTag};
