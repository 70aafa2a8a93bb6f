//! Block Model
//!
//! All lines of one input source, held until the source is exhausted so
//! that every line can be aligned to the widest one.

use std::collections::TryReserveError;

use super::Line;
use crate::width::LengthMode;

/// An ordered group of lines plus the widest visible width among them
#[derive(Debug, Clone, Default)]
pub struct Block {
    lines: Vec<Line>,
    longest: usize,
    #[cfg(test)]
    reserve_limit: Option<usize>,
}

impl Block {
    /// Create an empty block
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, measuring it with `mode`.
    ///
    /// Fails without modifying the block if there is no room for the line.
    pub fn push(&mut self, line: Line, mode: LengthMode) -> Result<(), TryReserveError> {
        #[cfg(test)]
        if self.reserve_limit.is_some_and(|limit| self.lines.len() >= limit) {
            return Err(Vec::<Line>::new().try_reserve(usize::MAX).unwrap_err());
        }
        self.lines.try_reserve(1)?;
        self.longest = self.longest.max(line.width(mode));
        self.lines.push(line);
        Ok(())
    }

    /// Widest line seen so far
    pub fn longest(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A block that refuses to grow past `limit` lines
    #[cfg(test)]
    pub(crate) fn with_reserve_limit(limit: usize) -> Self {
        Self {
            reserve_limit: Some(limit),
            ..Self::default()
        }
    }
}

impl IntoIterator for Block {
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}
