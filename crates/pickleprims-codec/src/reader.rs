use std::io::{ErrorKind, Read};

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

use crate::error::{CodecError, Result};

/// Default pre-allocation for a line buffer.
pub const DEFAULT_LINE_CAPACITY: usize = 64;

const LINE_FEED: u8 = b'\n';

/// Configuration for a [`StreamReader`].
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Maximum line length in bytes, terminator excluded. Default: unbounded.
    pub max_line_length: Option<usize>,
    /// Initial capacity of the buffer a line is collected into.
    pub initial_line_capacity: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_line_length: None,
            initial_line_capacity: DEFAULT_LINE_CAPACITY,
        }
    }
}

/// Reads wire primitives sequentially from any `Read` source.
///
/// Partial reads are retried internally, so a fixed-count read either yields
/// every requested byte or fails. Pass `&mut source` to keep ownership of the
/// source with the caller; the reader never closes it and never looks ahead.
pub struct StreamReader<T> {
    inner: T,
    config: ReaderConfig,
}

impl<T: Read> StreamReader<T> {
    /// Create a new reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    /// Create a new reader with explicit configuration.
    pub fn with_config(inner: T, config: ReaderConfig) -> Self {
        Self { inner, config }
    }

    /// Read one line, optionally keeping the terminating `\n`.
    ///
    /// Every byte is widened to the `char` with the same numeric value, no
    /// character decoding happens. The `\n` is always consumed. A final line
    /// without terminator is returned as-is; `Err(CodecError::EndOfInput)` is
    /// only returned when the source is exhausted before any byte was read.
    pub fn read_line(&mut self, include_terminator: bool) -> Result<String> {
        let mut line = String::with_capacity(self.config.initial_line_capacity);
        let mut len = 0usize;

        loop {
            let Some(byte) = self.read_byte()? else {
                if len == 0 {
                    return Err(CodecError::EndOfInput);
                }
                debug!(len, "final line has no terminator");
                break;
            };

            if byte == LINE_FEED {
                if include_terminator {
                    line.push('\n');
                }
                break;
            }

            if let Some(max) = self.config.max_line_length {
                if len >= max {
                    return Err(CodecError::LineTooLong { max });
                }
            }
            line.push(char::from(byte));
            len += 1;
        }

        trace!(len, "read line");
        Ok(line)
    }

    /// Read one line with the terminating `\n` stripped.
    pub fn read_line_stripped(&mut self) -> Result<String> {
        self.read_line(false)
    }

    /// Read a single byte.
    ///
    /// Returns `Ok(None)` at end of input instead of failing.
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(CodecError::Io(err)),
            }
        }
    }

    /// Read exactly `n` bytes.
    ///
    /// `n == 0` returns an empty group without touching the source.
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        if n == 0 {
            return Ok(Bytes::new());
        }
        let mut buf = BytesMut::zeroed(n);
        self.read_bytes_into(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Fill `buf` completely from the source.
    ///
    /// To fill a region of a larger buffer, pass `&mut buffer[offset..offset + length]`.
    pub fn read_bytes_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let wanted = buf.len();
        let mut filled = 0usize;

        while filled < wanted {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(CodecError::Truncated {
                        wanted,
                        missing: wanted - filled,
                    })
                }
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(CodecError::Io(err)),
            }
        }

        Ok(())
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner source.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Update the maximum line length for subsequent line reads.
    pub fn set_max_line_length(&mut self, max_line_length: Option<usize>) {
        self.config.max_line_length = max_line_length;
    }

    /// Current reader configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}
