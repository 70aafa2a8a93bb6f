//! Per-line centering
//!
//! Each line is measured, padded and written before the next one is read,
//! so output keeps pace with input and nothing is held back.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use super::{padding, write_padded, StreamStats};
use crate::config::CenterConfig;
use crate::error::{Error, Result};
use crate::models::Line;

/// Center every line of `reader` on its own width.
///
/// Tabs are expanded to `config.tab_width` cells when measuring. A read
/// error stops the source; lines already written stay written.
pub fn center_lines<R, W>(
    reader: &mut R,
    out: &mut W,
    config: &CenterConfig,
    source_name: &str,
) -> Result<StreamStats>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut stats = StreamStats::default();

    loop {
        let line = match Line::read_from(reader) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(source) => {
                debug!(source_name, lines = stats.lines, "Read failed mid-stream");
                return Err(Error::ReadFailed {
                    source_name: source_name.to_string(),
                    source,
                });
            }
        };

        let len = line.expanded_width(config.length_mode, config.tab_width);
        let pad = padding(config.width, len);
        trace!(len, pad, "Centering line");

        write_padded(out, pad, &line)?;
        stats.lines += 1;
    }

    debug!(source_name, lines = stats.lines, "Centered source line by line");
    Ok(stats)
}
