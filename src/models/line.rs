//! Input Line Model
//!
//! A single record read from an input source, kept as raw bytes so that
//! text in any encoding passes through unchanged.

use std::io::{self, BufRead};

use crate::width::LengthMode;

/// One line of input, including its trailing newline if it had one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Wrap already-read bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Read the next line from `reader`.
    ///
    /// Returns `Ok(None)` at end of stream. Every call reads into a fresh
    /// buffer so the returned line owns its storage.
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<Self>> {
        let mut bytes = Vec::new();
        match reader.read_until(b'\n', &mut bytes)? {
            0 => Ok(None),
            _ => Ok(Some(Self { bytes })),
        }
    }

    /// The bytes exactly as read
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of tab characters anywhere in the line
    pub fn tab_count(&self) -> usize {
        self.bytes.iter().filter(|b| **b == b'\t').count()
    }

    /// Width in cells, tabs counted as a single cell
    pub fn width(&self, mode: LengthMode) -> usize {
        mode.measure(&self.bytes)
    }

    /// Width in cells with every tab expanded to `tab_width` cells
    pub fn expanded_width(&self, mode: LengthMode, tab_width: usize) -> usize {
        let tabs = self.tab_count();
        tabs.saturating_mul(tab_width)
            .saturating_add(self.width(mode))
            .saturating_sub(tabs)
    }

    #[cfg(test)]
    fn is_terminated(&self) -> bool {
        self.bytes.last() == Some(&b'\n')
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}
