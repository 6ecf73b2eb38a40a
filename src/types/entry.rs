//! Entries: one decoded MessagePack token each.

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;

/// Extension payload: an application-defined type tag plus opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionData<P> {
    pub ext_type: u8,
    pub data: P,
}

impl<P: AsRef<[u8]>> ExtensionData<P> {
    pub fn new(ext_type: u8, data: P) -> Self {
        Self { ext_type, data }
    }

    /// Borrowed view of this extension.
    pub fn as_slice(&self) -> ExtensionData<&[u8]> {
        ExtensionData {
            ext_type: self.ext_type,
            data: self.data.as_ref(),
        }
    }
}

/// A single token of the stream.
///
/// Scalars are carried by value. Strings, binaries and extensions carry a
/// payload of type `P`, which is whatever the byte source hands out: a
/// borrowed `&[u8]` for slice sources, [`Bytes`] for buffered and streaming
/// ones. Containers are not materialized; `ArrayLength(n)` is followed by `n`
/// entries and `MapLength(n)` by `2 * n` (key, value, key, value, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<P = Bytes> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Unused,
    /// Raw bytes as they appeared on the wire. They are not checked at
    /// decode time: `try_read_str` rejects invalid UTF-8, while
    /// `read_str_lossy` substitutes U+FFFD for bad sequences.
    Str(P),
    BinData(P),
    ExtData(ExtensionData<P>),
    ArrayLength(u32),
    MapLength(u32),
}

/// The variant of an [`Entry`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Int,
    UInt,
    Float,
    Bool,
    Null,
    Unused,
    Str,
    BinData,
    ExtData,
    ArrayLength,
    MapLength,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Null => "nil",
            Self::Unused => "unused",
            Self::Str => "str",
            Self::BinData => "bin",
            Self::ExtData => "ext",
            Self::ArrayLength => "array length",
            Self::MapLength => "map length",
        })
    }
}

impl<P: AsRef<[u8]>> Entry<P> {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Int(_) => EntryKind::Int,
            Self::UInt(_) => EntryKind::UInt,
            Self::Float(_) => EntryKind::Float,
            Self::Bool(_) => EntryKind::Bool,
            Self::Null => EntryKind::Null,
            Self::Unused => EntryKind::Unused,
            Self::Str(_) => EntryKind::Str,
            Self::BinData(_) => EntryKind::BinData,
            Self::ExtData(_) => EntryKind::ExtData,
            Self::ArrayLength(_) => EntryKind::ArrayLength,
            Self::MapLength(_) => EntryKind::MapLength,
        }
    }

    // -- Integers --
    //
    // With `strict` set, only the matching signedness is accepted. Otherwise
    // an `Int` reads as unsigned when it is non-negative and a `UInt` reads as
    // signed when it fits in `i64`.

    pub fn is_int(&self, strict: bool) -> bool {
        self.try_read_int(strict).is_some()
    }

    pub fn try_read_int(&self, strict: bool) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            Self::UInt(v) if !strict => i64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn read_int(&self, strict: bool) -> i64 {
        self.try_read_int(strict).unwrap_or(0)
    }

    pub fn is_uint(&self, strict: bool) -> bool {
        self.try_read_uint(strict).is_some()
    }

    pub fn try_read_uint(&self, strict: bool) -> Option<u64> {
        match *self {
            Self::UInt(v) => Some(v),
            Self::Int(v) if !strict => u64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn read_uint(&self, strict: bool) -> u64 {
        self.try_read_uint(strict).unwrap_or(0)
    }

    // -- Other scalars --

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub fn try_read_float(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn read_float(&self) -> f64 {
        self.try_read_float().unwrap_or(0.0)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub fn try_read_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn read_bool(&self) -> bool {
        self.try_read_bool().unwrap_or(false)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unused(&self) -> bool {
        matches!(self, Self::Unused)
    }

    // -- Payloads --

    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// The raw bytes of a `Str`, whether or not they are valid UTF-8.
    pub fn str_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Str(p) => Some(p.as_ref()),
            _ => None,
        }
    }

    /// Decodes a `Str` entry. Fails on other kinds and on invalid UTF-8.
    pub fn try_read_str(&self) -> Option<&str> {
        self.str_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn read_str(&self) -> &str {
        self.try_read_str().unwrap_or("")
    }

    /// Decodes a `Str` entry, replacing invalid UTF-8 with U+FFFD. Borrows
    /// when the bytes are already valid; empty for other kinds.
    pub fn read_str_lossy(&self) -> Cow<'_, str> {
        self.str_bytes().map_or(Cow::Borrowed(""), String::from_utf8_lossy)
    }

    pub fn is_bin(&self) -> bool {
        matches!(self, Self::BinData(_))
    }

    pub fn try_read_bin(&self) -> Option<&[u8]> {
        match self {
            Self::BinData(p) => Some(p.as_ref()),
            _ => None,
        }
    }

    pub fn read_bin(&self) -> &[u8] {
        self.try_read_bin().unwrap_or_default()
    }

    pub fn is_ext(&self) -> bool {
        matches!(self, Self::ExtData(_))
    }

    pub fn try_read_ext(&self) -> Option<ExtensionData<&[u8]>> {
        match self {
            Self::ExtData(ext) => Some(ext.as_slice()),
            _ => None,
        }
    }

    pub fn read_ext(&self) -> ExtensionData<&[u8]> {
        self.try_read_ext().unwrap_or(ExtensionData {
            ext_type: 0,
            data: &[],
        })
    }

    /// Moves the payload out of a `Str`, `BinData` or `ExtData` entry.
    pub fn into_payload(self) -> Option<P> {
        match self {
            Self::Str(p) | Self::BinData(p) => Some(p),
            Self::ExtData(ext) => Some(ext.data),
            _ => None,
        }
    }

    // -- Container lengths --

    pub fn is_array_length(&self) -> bool {
        matches!(self, Self::ArrayLength(_))
    }

    pub fn try_read_array_length(&self) -> Option<u32> {
        match *self {
            Self::ArrayLength(n) => Some(n),
            _ => None,
        }
    }

    pub fn read_array_length(&self) -> u32 {
        self.try_read_array_length().unwrap_or(0)
    }

    pub fn is_map_length(&self) -> bool {
        matches!(self, Self::MapLength(_))
    }

    pub fn try_read_map_length(&self) -> Option<u32> {
        match *self {
            Self::MapLength(n) => Some(n),
            _ => None,
        }
    }

    pub fn read_map_length(&self) -> u32 {
        self.try_read_map_length().unwrap_or(0)
    }
}

impl<P: AsRef<[u8]>> fmt::Display for Entry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}u"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Null => f.write_str("nil"),
            Self::Unused => f.write_str("<unused>"),
            Self::Str(p) => write!(f, "{:?}", String::from_utf8_lossy(p.as_ref())),
            Self::BinData(p) => write!(f, "bin[{}]", p.as_ref().len()),
            Self::ExtData(ext) => write!(f, "ext({})[{}]", ext.ext_type, ext.data.as_ref().len()),
            Self::ArrayLength(n) => write!(f, "array({n})"),
            Self::MapLength(n) => write!(f, "map({n})"),
        }
    }
}
