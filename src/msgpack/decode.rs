//! MessagePack decoding: bytes → `Entry` stream.

use std::io::Read;

use bytes::Buf;

use super::marker;
use crate::error::DecodeError;
use crate::source::{ByteSource, BytesReader, IoReader, SliceReader};
use crate::types::{Entry, ExtensionData};

/// An entry together with the offset of its marker byte.
struct Decoded<P> {
    offset: usize,
    entry: Entry<P>,
    truncated: bool,
}

/// Pull-based entry decoder with a single-entry lookahead.
///
/// Every read takes `&mut self`; a reader serves one caller at a time and
/// needs external locking to be shared.
pub struct EntryReader<S: ByteSource> {
    source: S,
    peeked: Option<Decoded<S::Payload>>,
    truncated: bool,
}

impl<'a> EntryReader<SliceReader<'a>> {
    /// Decodes from a slice. String, binary and extension payloads borrow
    /// from `data`.
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self::new(SliceReader::new(data))
    }
}

impl<B: Buf> EntryReader<BytesReader<B>> {
    /// Decodes from a buffer. Payloads are [`Bytes`](bytes::Bytes), shared
    /// with `buf` when it is itself `Bytes`.
    pub fn from_buf(buf: B) -> Self {
        Self::new(BytesReader::new(buf))
    }
}

impl<R: Read> EntryReader<IoReader<R>> {
    /// Decodes from a blocking stream. Payloads are copied out.
    pub fn from_reader(reader: R) -> Self {
        Self::new(IoReader::new(reader))
    }
}

impl<S: ByteSource> EntryReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            peeked: None,
            truncated: false,
        }
    }

    /// Returns the next entry without consuming it.
    ///
    /// Repeated calls return the same buffered entry until [`next_entry`]
    /// takes it.
    ///
    /// [`next_entry`]: Self::next_entry
    pub fn peek(&mut self) -> Option<&Entry<S::Payload>> {
        if self.peeked.is_none() {
            self.peeked = self.decode_next();
        }
        self.peeked.as_ref().map(|d| &d.entry)
    }

    /// Returns the next entry, or `None` once the input is exhausted.
    ///
    /// A truncated payload still yields an entry; check [`is_truncated`] or
    /// use [`try_next`] to detect it.
    ///
    /// [`is_truncated`]: Self::is_truncated
    /// [`try_next`]: Self::try_next
    pub fn next_entry(&mut self) -> Option<Entry<S::Payload>> {
        self.take_next().map(|d| d.entry)
    }

    /// Like [`next_entry`](Self::next_entry), but reports truncation and
    /// source I/O failures as errors.
    pub fn try_next(&mut self) -> Result<Option<Entry<S::Payload>>, DecodeError> {
        let next = self.take_next();
        if let Some(e) = self.source.take_io_error() {
            return Err(e.into());
        }
        match next {
            Some(Decoded {
                offset,
                entry,
                truncated: true,
            }) => Err(DecodeError::Truncated {
                kind: entry.kind(),
                offset,
            }),
            Some(Decoded { entry, .. }) => Ok(Some(entry)),
            None => Ok(None),
        }
    }

    /// Consumes one complete value, including every child announced by
    /// array and map length entries.
    pub fn skip_value(&mut self) -> Result<(), DecodeError> {
        let mut pending: u64 = 1;
        while pending > 0 {
            let entry = self.try_next()?.ok_or_else(|| DecodeError::UnexpectedEof {
                offset: self.source.position(),
            })?;
            pending -= 1;
            match entry {
                Entry::ArrayLength(n) => pending = pending.saturating_add(u64::from(n)),
                Entry::MapLength(n) => pending = pending.saturating_add(2 * u64::from(n)),
                _ => {}
            }
        }
        Ok(())
    }

    /// Whether an entry decoded so far had its payload cut short.
    ///
    /// Running out of input between entries is the normal end of the stream
    /// and does not count. The raw range-exceeded flag, which also goes up
    /// at the end of the stream, is `source().error()`.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the source. A peeked entry is dropped.
    pub fn into_source(self) -> S {
        self.source
    }

    fn take_next(&mut self) -> Option<Decoded<S::Payload>> {
        self.peeked.take().or_else(|| self.decode_next())
    }

    fn decode_next(&mut self) -> Option<Decoded<S::Payload>> {
        let offset = self.source.position();
        let m = self.source.get_u8();
        if self.source.error() {
            return None;
        }
        tracing::trace!(marker = m, offset, "decoding entry");

        let entry = decode_entry(&mut self.source, m);
        let truncated = self.source.error();
        if truncated {
            tracing::debug!(kind = %entry.kind(), offset, "entry payload truncated");
            self.truncated = true;
        }
        Some(Decoded {
            offset,
            entry,
            truncated,
        })
    }
}

impl<S: ByteSource> Iterator for EntryReader<S> {
    type Item = Entry<S::Payload>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry()
    }
}

/// Decodes the payload selected by marker `m`.
fn decode_entry<S: ByteSource>(source: &mut S, m: u8) -> Entry<S::Payload> {
    match m {
        // Positive fixint: 0x00..=0x7F
        0x00..=marker::POSITIVE_FIXINT_MAX => Entry::Int(i64::from(m)),

        // FIXMAP: 0x80..=0x8F
        0x80..=0x8F => Entry::MapLength(u32::from(m & marker::FIXMAP_MASK)),

        // FIXARRAY: 0x90..=0x9F
        0x90..=0x9F => Entry::ArrayLength(u32::from(m & marker::FIXARRAY_MASK)),

        // FIXSTR: 0xA0..=0xBF
        0xA0..=0xBF => Entry::Str(source.get_bytes(usize::from(m & marker::FIXSTR_MASK))),

        marker::NIL => Entry::Null,
        marker::NEVER_USED => Entry::Unused,
        marker::FALSE => Entry::Bool(false),
        marker::TRUE => Entry::Bool(true),

        // Binary
        marker::BIN_8 => {
            let len = usize::from(source.get_u8());
            Entry::BinData(source.get_bytes(len))
        }
        marker::BIN_16 => {
            let len = usize::from(source.get_u16());
            Entry::BinData(source.get_bytes(len))
        }
        marker::BIN_32 => {
            let len = source.get_u32() as usize;
            Entry::BinData(source.get_bytes(len))
        }

        // Extension, explicit length
        marker::EXT_8 => {
            let len = usize::from(source.get_u8());
            decode_ext_data(source, len)
        }
        marker::EXT_16 => {
            let len = usize::from(source.get_u16());
            decode_ext_data(source, len)
        }
        marker::EXT_32 => {
            let len = source.get_u32() as usize;
            decode_ext_data(source, len)
        }

        // Float
        marker::FLOAT_32 => Entry::Float(f64::from(source.get_f32())),
        marker::FLOAT_64 => Entry::Float(source.get_f64()),

        // Unsigned integer
        marker::UINT_8 => Entry::UInt(u64::from(source.get_u8())),
        marker::UINT_16 => Entry::UInt(u64::from(source.get_u16())),
        marker::UINT_32 => Entry::UInt(u64::from(source.get_u32())),
        marker::UINT_64 => Entry::UInt(source.get_u64()),

        // Signed integer
        marker::INT_8 => Entry::Int(i64::from(source.get_i8())),
        marker::INT_16 => Entry::Int(i64::from(source.get_i16())),
        marker::INT_32 => Entry::Int(i64::from(source.get_i32())),
        marker::INT_64 => Entry::Int(source.get_i64()),

        // Extension, implicit length
        marker::FIXEXT_1 => decode_ext_data(source, 1),
        marker::FIXEXT_2 => decode_ext_data(source, 2),
        marker::FIXEXT_4 => decode_ext_data(source, 4),
        marker::FIXEXT_8 => decode_ext_data(source, 8),
        marker::FIXEXT_16 => decode_ext_data(source, 16),

        // String
        marker::STR_8 => {
            let len = usize::from(source.get_u8());
            Entry::Str(source.get_bytes(len))
        }
        marker::STR_16 => {
            let len = usize::from(source.get_u16());
            Entry::Str(source.get_bytes(len))
        }
        marker::STR_32 => {
            let len = source.get_u32() as usize;
            Entry::Str(source.get_bytes(len))
        }

        // Array
        marker::ARRAY_16 => Entry::ArrayLength(u32::from(source.get_u16())),
        marker::ARRAY_32 => Entry::ArrayLength(source.get_u32()),

        // Map
        marker::MAP_16 => Entry::MapLength(u32::from(source.get_u16())),
        marker::MAP_32 => Entry::MapLength(source.get_u32()),

        // Negative fixint: 0xE0..=0xFF (-32..-1)
        marker::NEGATIVE_FIXINT_MIN..=0xFF => Entry::Int(i64::from(m as i8)),
    }
}

/// Reads the type byte, then `len` payload bytes.
fn decode_ext_data<S: ByteSource>(source: &mut S, len: usize) -> Entry<S::Payload> {
    let ext_type = source.get_u8();
    let data = source.get_bytes(len);
    Entry::ExtData(ExtensionData { ext_type, data })
}
