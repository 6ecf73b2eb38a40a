//! MessagePack marker byte constants.

// Positive fixint: 0x00..=0x7F (value is the marker itself)
pub const POSITIVE_FIXINT_MAX: u8 = 0x7F;

// FIXMAP: 0x80..=0x8F (low nibble = pair count 0..15)
// FIXARRAY: 0x90..=0x9F (low nibble = item count 0..15)
// FIXSTR: 0xA0..=0xBF (low five bits = byte length 0..31)
pub const FIXMAP_MASK: u8 = 0x0F;
pub const FIXARRAY_MASK: u8 = 0x0F;
pub const FIXSTR_MASK: u8 = 0x1F;

// Nil
pub const NIL: u8 = 0xC0;

// Reserved, never emitted by conforming encoders
pub const NEVER_USED: u8 = 0xC1;

// Boolean
pub const FALSE: u8 = 0xC2;
pub const TRUE: u8 = 0xC3;

// Binary
pub const BIN_8: u8 = 0xC4;
pub const BIN_16: u8 = 0xC5;
pub const BIN_32: u8 = 0xC6;

// Extension (explicit length, then type byte)
pub const EXT_8: u8 = 0xC7;
pub const EXT_16: u8 = 0xC8;
pub const EXT_32: u8 = 0xC9;

// Float (IEEE 754)
pub const FLOAT_32: u8 = 0xCA;
pub const FLOAT_64: u8 = 0xCB;

// Unsigned integer
pub const UINT_8: u8 = 0xCC;
pub const UINT_16: u8 = 0xCD;
pub const UINT_32: u8 = 0xCE;
pub const UINT_64: u8 = 0xCF;

// Signed integer
pub const INT_8: u8 = 0xD0;
pub const INT_16: u8 = 0xD1;
pub const INT_32: u8 = 0xD2;
pub const INT_64: u8 = 0xD3;

// Extension (implicit length, type byte only)
pub const FIXEXT_1: u8 = 0xD4;
pub const FIXEXT_2: u8 = 0xD5;
pub const FIXEXT_4: u8 = 0xD6;
pub const FIXEXT_8: u8 = 0xD7;
pub const FIXEXT_16: u8 = 0xD8;

// String
pub const STR_8: u8 = 0xD9;
pub const STR_16: u8 = 0xDA;
pub const STR_32: u8 = 0xDB;

// Array
pub const ARRAY_16: u8 = 0xDC;
pub const ARRAY_32: u8 = 0xDD;

// Map
pub const MAP_16: u8 = 0xDE;
pub const MAP_32: u8 = 0xDF;

// Negative fixint: 0xE0..=0xFF (-32..-1, the marker read as i8)
pub const NEGATIVE_FIXINT_MIN: u8 = 0xE0;
