//! Byte sources: positioned big-endian cursors with a sticky range-exceeded flag.
//!
//! Every multi-byte read is big-endian. When a read needs more bytes than the
//! source still holds, the cursor moves to the end, the read yields zero and
//! the range-exceeded flag is raised. The flag stays raised until
//! [`ByteSource::clear_error`] is called.
//!
//! The concrete sources differ in who owns payload bytes:
//!
//! - [`SliceReader`] lends `&'a [u8]` views into the input (zero-copy).
//! - [`BytesReader`] hands out [`bytes::Bytes`], sharing storage when the
//!   underlying `Buf` is itself `Bytes`.
//! - [`IoReader`] pulls from a blocking `std::io::Read` and copies payloads.

mod buf;
mod io;
mod slice;

pub use buf::BytesReader;
pub use io::IoReader;
pub use slice::SliceReader;

/// A positioned byte cursor with fixed-width big-endian reads.
pub trait ByteSource {
    /// Owned or borrowed view over a run of payload bytes.
    type Payload: AsRef<[u8]>;

    /// Reads exactly `N` raw bytes. Yields `[0; N]` and raises the
    /// range-exceeded flag if fewer than `N` bytes remain.
    fn take_array<const N: usize>(&mut self) -> [u8; N];

    /// Reads the next `n` bytes as a payload.
    ///
    /// If fewer than `n` bytes remain, returns whatever was left and raises
    /// the range-exceeded flag.
    fn get_bytes(&mut self, n: usize) -> Self::Payload;

    /// Whether a read has run past the end of the source.
    fn error(&self) -> bool;

    /// Lowers the range-exceeded flag.
    fn clear_error(&mut self);

    /// Number of bytes consumed so far.
    fn position(&self) -> usize;

    /// Takes the I/O failure behind the last raised flag, if the source has one.
    fn take_io_error(&mut self) -> Option<std::io::Error> {
        None
    }

    fn get_u8(&mut self) -> u8 {
        u8::from_be_bytes(self.take_array())
    }

    fn get_u16(&mut self) -> u16 {
        u16::from_be_bytes(self.take_array())
    }

    fn get_u32(&mut self) -> u32 {
        u32::from_be_bytes(self.take_array())
    }

    fn get_u64(&mut self) -> u64 {
        u64::from_be_bytes(self.take_array())
    }

    fn get_i8(&mut self) -> i8 {
        i8::from_be_bytes(self.take_array())
    }

    fn get_i16(&mut self) -> i16 {
        i16::from_be_bytes(self.take_array())
    }

    fn get_i32(&mut self) -> i32 {
        i32::from_be_bytes(self.take_array())
    }

    fn get_i64(&mut self) -> i64 {
        i64::from_be_bytes(self.take_array())
    }

    fn get_f32(&mut self) -> f32 {
        f32::from_be_bytes(self.take_array())
    }

    fn get_f64(&mut self) -> f64 {
        f64::from_be_bytes(self.take_array())
    }
}
