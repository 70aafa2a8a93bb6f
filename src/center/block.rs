//! Whole-block centering
//!
//! Every line of a source is buffered before anything is written, then the
//! whole block is shifted by the margin of its widest line. Handy for code,
//! where centering each line separately would destroy indentation.

use std::io::{BufRead, Write};

use tracing::debug;

use super::{padding, write_padded, StreamStats};
use crate::config::CenterConfig;
use crate::error::{Error, Result};
use crate::models::{Block, Line};

/// Center all lines of `reader` as one block.
///
/// Lines are measured without tab expansion. If the source cannot be read
/// to the end, or the block cannot grow, nothing from it is written.
pub fn center_block<R, W>(
    reader: &mut R,
    out: &mut W,
    config: &CenterConfig,
    source_name: &str,
) -> Result<StreamStats>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    center_into(Block::new(), reader, out, config, source_name)
}

/// Buffer every line of `reader`
pub fn read_block<R>(reader: &mut R, config: &CenterConfig, source_name: &str) -> Result<Block>
where
    R: BufRead + ?Sized,
{
    fill_block(Block::new(), reader, config, source_name)
}

fn center_into<R, W>(
    block: Block,
    reader: &mut R,
    out: &mut W,
    config: &CenterConfig,
    source_name: &str,
) -> Result<StreamStats>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let block = fill_block(block, reader, config, source_name)?;
    let pad = padding(config.width, block.longest());
    debug!(
        source_name,
        lines = block.len(),
        longest = block.longest(),
        pad,
        "Centering block"
    );

    let mut stats = StreamStats::default();
    for line in block {
        write_padded(out, pad, &line)?;
        stats.lines += 1;
    }

    Ok(stats)
}

fn fill_block<R>(
    mut block: Block,
    reader: &mut R,
    config: &CenterConfig,
    source_name: &str,
) -> Result<Block>
where
    R: BufRead + ?Sized,
{
    loop {
        match Line::read_from(reader) {
            Ok(Some(line)) => {
                if block.push(line, config.length_mode).is_err() {
                    debug!(source_name, buffered = block.len(), "Block cannot grow");
                    return Err(Error::AllocationFailed {
                        source_name: source_name.to_string(),
                        lines: block.len(),
                    });
                }
            }
            Ok(None) => return Ok(block),
            Err(source) => {
                debug!(source_name, buffered = block.len(), "Discarding partial block");
                return Err(Error::ReadFailed {
                    source_name: source_name.to_string(),
                    source,
                });
            }
        }
    }
}
