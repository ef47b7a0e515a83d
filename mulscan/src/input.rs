//! Reading the input stream into a single buffer.

use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::debug;

/// Full input text with line terminators removed.
///
/// Lines are joined with no separator, so an instruction split across a
/// line break is still recognized. `\n`, `\r\n` and a lone `\r` all end a
/// line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Read every line from `reader` until end of stream.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut text = String::new();
        let mut lines = 0usize;
        for line in reader.lines() {
            let line = line.context("read input line")?;
            for piece in line.split('\r') {
                text.push_str(piece);
                lines += 1;
            }
        }
        debug!(lines, bytes = text.len(), "input read");
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<String> for InputBuffer {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for InputBuffer {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}
