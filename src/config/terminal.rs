//! Terminal width detection

use std::io::{self, IsTerminal};

use tracing::debug;

/// Source of the output width when none is configured
pub trait TerminalSize {
    /// Column count, or `None` when it cannot be determined
    fn columns(&self) -> Option<usize>;
}

/// Reads the size of the terminal attached to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTerminal;

impl TerminalSize for StdoutTerminal {
    fn columns(&self) -> Option<usize> {
        if !io::stdout().is_terminal() {
            debug!("stdout is not a terminal");
            return None;
        }

        match crossterm::terminal::size() {
            Ok((0, _)) => None,
            Ok((cols, _)) => Some(usize::from(cols)),
            Err(e) => {
                debug!("Failed to query terminal size: {}", e);
                None
            }
        }
    }
}

/// A terminal of known width, or none at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTerminal(pub Option<usize>);

impl TerminalSize for FixedTerminal {
    fn columns(&self) -> Option<usize> {
        self.0
    }
}
