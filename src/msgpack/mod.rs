//! MessagePack token decoding.
//!
//! MessagePack uses big-endian byte ordering exclusively. The decoder here
//! works one marker at a time and never builds containers: maps and arrays
//! come out as length entries followed by their children.

pub mod decode;
pub mod marker;

pub use decode::EntryReader;
