//! Centering engines
//!
//! Two ways of shifting lines toward the middle of the output width:
//!
//! - [`streaming`] centers every line on its own width as soon as it is read.
//! - [`block`] reads a whole source first and gives every line the margin
//!   of the longest one, which keeps relative indentation intact.

pub mod block;
pub mod streaming;

use std::io::{self, BufRead, Read, Write};

use crate::config::{Alignment, CenterConfig};
use crate::error::{Error, Result};
use crate::models::Line;

pub use block::center_block;
pub use streaming::center_lines;

/// What an engine did with one source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Lines written to the output
    pub lines: usize,
}

/// Center `reader` onto `out` using the configured alignment
pub fn center_stream<R, W>(
    reader: &mut R,
    out: &mut W,
    config: &CenterConfig,
    source_name: &str,
) -> Result<StreamStats>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    match config.alignment {
        Alignment::PerLine => center_lines(reader, out, config, source_name),
        Alignment::Block => center_block(reader, out, config, source_name),
    }
}

/// Leading spaces that center something `len` cells wide in `width` cells.
///
/// Rounds down, and is zero when the content does not fit.
pub fn padding(width: usize, len: usize) -> usize {
    width.saturating_sub(len) / 2
}

/// Write `pad` spaces followed by the line exactly as read
fn write_padded<W: Write + ?Sized>(out: &mut W, pad: usize, line: &Line) -> Result<()> {
    io::copy(&mut io::repeat(b' ').take(pad as u64), &mut *out)
        .and_then(|_| out.write_all(line.as_bytes()))
        .map_err(Error::WriteFailed)
}
