//! Source over any [`bytes::Buf`].

use bytes::{Buf, Bytes};

use super::ByteSource;

/// Reads from a [`Buf`], handing payloads out as [`Bytes`].
///
/// When `B` is `Bytes` the payloads share its allocation; other buffers are
/// copied into fresh storage by `Buf::copy_to_bytes`.
#[derive(Debug)]
pub struct BytesReader<B> {
    buf: B,
    pos: usize,
    exceeded: bool,
}

impl<B: Buf> BytesReader<B> {
    pub fn new(buf: B) -> Self {
        Self {
            buf,
            pos: 0,
            exceeded: false,
        }
    }

    /// Returns the underlying buffer, positioned after the last read.
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Accounts for a `needed`-byte read, or drains the buffer and raises
    /// the flag when fewer bytes remain.
    fn ensure_remaining(&mut self, needed: usize) -> bool {
        let rest = self.buf.remaining();
        if rest < needed {
            self.buf.advance(rest);
            self.pos += rest;
            self.exceeded = true;
            false
        } else {
            self.pos += needed;
            true
        }
    }
}

impl<B: Buf> ByteSource for BytesReader<B> {
    type Payload = Bytes;

    fn take_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        if self.ensure_remaining(N) {
            self.buf.copy_to_slice(&mut out);
        }
        out
    }

    fn get_bytes(&mut self, n: usize) -> Bytes {
        let available = self.buf.remaining();
        if available < n {
            let tail = self.buf.copy_to_bytes(available);
            self.pos += available;
            self.exceeded = true;
            tail
        } else {
            self.pos += n;
            self.buf.copy_to_bytes(n)
        }
    }

    fn error(&self) -> bool {
        self.exceeded
    }

    fn clear_error(&mut self) {
        self.exceeded = false;
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn get_u8(&mut self) -> u8 {
        if self.ensure_remaining(1) {
            self.buf.get_u8()
        } else {
            0
        }
    }

    fn get_u16(&mut self) -> u16 {
        if self.ensure_remaining(2) {
            self.buf.get_u16()
        } else {
            0
        }
    }

    fn get_u32(&mut self) -> u32 {
        if self.ensure_remaining(4) {
            self.buf.get_u32()
        } else {
            0
        }
    }

    fn get_u64(&mut self) -> u64 {
        if self.ensure_remaining(8) {
            self.buf.get_u64()
        } else {
            0
        }
    }

    fn get_i8(&mut self) -> i8 {
        if self.ensure_remaining(1) {
            self.buf.get_i8()
        } else {
            0
        }
    }

    fn get_i16(&mut self) -> i16 {
        if self.ensure_remaining(2) {
            self.buf.get_i16()
        } else {
            0
        }
    }

    fn get_i32(&mut self) -> i32 {
        if self.ensure_remaining(4) {
            self.buf.get_i32()
        } else {
            0
        }
    }

    fn get_i64(&mut self) -> i64 {
        if self.ensure_remaining(8) {
            self.buf.get_i64()
        } else {
            0
        }
    }

    fn get_f32(&mut self) -> f32 {
        if self.ensure_remaining(4) {
            self.buf.get_f32()
        } else {
            0.0
        }
    }

    fn get_f64(&mut self) -> f64 {
        if self.ensure_remaining(8) {
            self.buf.get_f64()
        } else {
            0.0
        }
    }
}
