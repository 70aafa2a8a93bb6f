//! Visible width of a line
//!
//! Widths are counted in terminal cells, one per UTF-8 encoded character.
//! Zero-width and double-width code points are not special-cased.

use crate::ansi;

/// How escape sequences are treated when measuring a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthMode {
    /// Every character counts, escape sequences included
    Raw,
    /// SGR color sequences occupy no cells
    #[default]
    EscapeAware,
}

impl LengthMode {
    /// Measure `line` in this mode
    pub fn measure(self, line: &[u8]) -> usize {
        match self {
            LengthMode::Raw => utf8_len(line),
            LengthMode::EscapeAware => escape_aware_len(line),
        }
    }
}

/// Number of UTF-8 characters in `line`, not counting a trailing newline.
///
/// Counts lead bytes only, so continuation bytes of multi-byte characters
/// are skipped and invalid sequences still count something per lead byte.
pub fn utf8_len(line: &[u8]) -> usize {
    let len = line.iter().filter(|b| (**b & 0xC0) != 0x80).count();
    if line.last() == Some(&b'\n') {
        len - 1
    } else {
        len
    }
}

/// Like [`utf8_len`] but with every SGR escape sequence left out
pub fn escape_aware_len(line: &[u8]) -> usize {
    utf8_len(line).saturating_sub(ansi::escape_overhead(line))
}
