//! Streaming source over a blocking [`std::io::Read`].

use std::io::{self, Read};

use bytes::Bytes;

use super::ByteSource;

/// Reads from a blocking stream such as a file or socket.
///
/// Payloads are copied out of the stream into owned [`Bytes`]. Any read
/// failure, end of stream included, raises the range-exceeded flag; a genuine
/// I/O error is kept for [`ByteSource::take_io_error`]. While the flag is
/// raised the stream is treated as exhausted and no further reads reach it.
#[derive(Debug)]
pub struct IoReader<R> {
    inner: R,
    pos: usize,
    exceeded: bool,
    io_error: Option<io::Error>,
}

impl<R: Read> IoReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pos: 0,
            exceeded: false,
            io_error: None,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Fills `out` as far as the stream allows and returns how many bytes
    /// were written.
    fn fill(&mut self, out: &mut [u8]) -> usize {
        let mut filled = 0;
        while filled < out.len() {
            match self.inner.read(&mut out[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.fail(e, filled);
                    break;
                }
            }
        }
        self.pos += filled;
        filled
    }

    fn fail(&mut self, e: io::Error, partial: usize) {
        tracing::debug!(error = %e, offset = self.pos + partial, "byte source read failed");
        self.io_error = Some(e);
        self.exceeded = true;
    }
}

impl<R: Read> ByteSource for IoReader<R> {
    type Payload = Bytes;

    fn take_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        if self.exceeded || self.fill(&mut out) < N {
            self.exceeded = true;
            return [0; N];
        }
        out
    }

    fn get_bytes(&mut self, n: usize) -> Bytes {
        if self.exceeded {
            return Bytes::new();
        }
        // Grow with the data actually received instead of trusting `n`.
        let mut data = Vec::new();
        let result = (&mut self.inner).take(n as u64).read_to_end(&mut data);
        self.pos += data.len();
        match result {
            Ok(_) if data.len() == n => {}
            Ok(_) => self.exceeded = true,
            Err(e) => self.fail(e, 0),
        }
        Bytes::from(data)
    }

    fn error(&self) -> bool {
        self.exceeded
    }

    fn clear_error(&mut self) {
        self.exceeded = false;
        self.io_error = None;
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }
}
