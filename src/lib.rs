//! entrypack — a streaming, token-level MessagePack decoder.
//!
//! The decoder turns a byte stream into a lazy sequence of [`Entry`] tokens:
//! scalars, string/binary/extension payloads, and length markers for maps and
//! arrays. Containers are never materialized, so memory use stays constant
//! regardless of document size; the caller consumes the announced number of
//! children itself.
//!
//! # Architecture
//!
//! - **`source`** — Byte sources: big-endian cursors with a sticky
//!   range-exceeded flag (slice, `bytes::Buf`, `std::io::Read`)
//! - **`msgpack`** — Marker constants and the [`EntryReader`] pull decoder
//! - **`types`** — [`Entry`] and its typed accessors
//! - **`error`** — [`DecodeError`] for the checked decoding helpers
//!
//! # Example
//!
//! ```
//! use entrypack::{Entry, EntryReader};
//!
//! // {"key": 42}
//! let mut reader = EntryReader::from_slice(&[0x81, 0xA3, b'k', b'e', b'y', 0x2A]);
//! let pairs = reader.next_entry().map_or(0, |e| e.read_map_length());
//! for _ in 0..pairs {
//!     let key = reader.next_entry().unwrap();
//!     let value = reader.next_entry().unwrap();
//!     assert_eq!(key.read_str(), "key");
//!     assert_eq!(value, Entry::Int(42));
//! }
//! assert!(reader.next_entry().is_none());
//! ```

pub mod error;
pub mod msgpack;
pub mod source;
pub mod types;

pub use error::DecodeError;
pub use msgpack::EntryReader;
pub use source::ByteSource;
pub use types::{Entry, EntryKind, ExtensionData};
