//! Line-oriented terminal I/O for the menu.
//!
//! Generic over `BufRead`/`Write` so tests can drive the menu with a
//! `Cursor` and capture everything it prints.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Writes `text` without a newline and reads one line of input.
    ///
    /// Returns `None` at end of input. The line terminator is stripped and
    /// bytes that are not UTF-8 become `U+FFFD`.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
