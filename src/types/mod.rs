//! Decoded entry types.

mod entry;

pub use entry::{Entry, EntryKind, ExtensionData};
