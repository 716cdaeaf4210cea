//! # Protocol Layer
//!
//! Packet variants and packet-stream assembly on top of the core codec.
//!
//! ## Components
//! - **Packet**: closed sum type over the registered packet kinds, keyed by
//!   numeric tag
//! - **Message**: an ordered packet sequence that parses from and
//!   serializes to a contiguous byte stream

pub mod message;
pub mod packet;
