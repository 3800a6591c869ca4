//! Streaming line reader.

use std::borrow::Cow;
use std::io::{self, BufRead};

/// One input line, borrowed from the reader's buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number within its source.
    pub number: u64,
    pub text: Cow<'a, str>,
}

/// Reads lines from any [`BufRead`], holding at most one line in memory.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    number: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            number: 0,
        }
    }

    /// Read the next line, or `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD; a trailing `\n` or `\r\n` is
    /// removed.
    pub fn next_line(&mut self) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.number += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(Line {
            number: self.number,
            text: String::from_utf8_lossy(&self.buf),
        }))
    }
}
