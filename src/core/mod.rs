//! # Core Codec Components
//!
//! Low-level wire encoding: packet headers and multi-precision integers.
//!
//! This module is the foundation of the crate. It knows nothing about packet
//! semantics; it only turns bytes into (tag, length) framing decisions and
//! length-prefixed integers, and back.
//!
//! ## Components
//! - **Header**: the two alternative packet header encodings (old and new)
//! - **Mpi**: length-prefixed big-endian arbitrary-precision integers
//!
//! ## Wire Format
//! ```text
//! new header:  [0xC0|tag(5)] [len(1|2|5)]
//! old header:  [0x80|tag(4)<<2|width(2)] [len(1|2|4)]
//! mpi:         [bitlen(2, big-endian)] [ceil(bitlen/8) bytes, big-endian]
//! ```
//!
//! ## Safety
//! - Every declared length is validated against the available bytes before
//!   any slice is taken
//! - Unsupported length forms (partial, indeterminate) are rejected, never
//!   guessed at

pub mod header;
pub mod mpi;
