//! Zero-copy source over a borrowed byte slice.

use super::ByteSource;

/// Reads from an in-memory slice. Payloads borrow from the slice, so entries
/// decoded through this source cannot outlive it.
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    data: &'a [u8],
    pos: usize,
    exceeded: bool,
}

impl<'a> SliceReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            exceeded: false,
        }
    }

    /// The bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    fn exhaust(&mut self) {
        self.pos = self.data.len();
        self.exceeded = true;
    }
}

impl<'a> ByteSource for SliceReader<'a> {
    type Payload = &'a [u8];

    fn take_array<const N: usize>(&mut self) -> [u8; N] {
        match self.remaining().first_chunk::<N>() {
            Some(chunk) => {
                self.pos += N;
                *chunk
            }
            None => {
                self.exhaust();
                [0; N]
            }
        }
    }

    fn get_bytes(&mut self, n: usize) -> &'a [u8] {
        let rest = self.remaining();
        if rest.len() < n {
            self.exhaust();
            rest
        } else {
            self.pos += n;
            &rest[..n]
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
}
