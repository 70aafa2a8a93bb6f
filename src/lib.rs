//! center - center lines of text in the terminal
//!
//! This library provides the core of the `center` filter: it shifts each
//! line of its input toward the middle of a target width, measuring lines
//! the way a terminal would display them.
//!
//! ## Features
//!
//! - **UTF-8 aware:** multi-byte characters count as one cell
//! - **ANSI colors:** SGR escape sequences take no room by default
//! - **Tabs:** expanded to a configurable width when centering line by line
//! - **Block mode:** align every line of a file by its longest line
//!
//! ## Module Organization
//!
//! - [`ansi`] - SGR escape sequence matching
//! - [`width`] - Visible width of a line
//! - [`models`] - Lines and blocks of lines
//! - [`center`] - Per-line and whole-block centering engines
//! - [`config`] - Width parameters, defaults file, terminal size
//! - [`input`] - Input sources and the run loop
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use center::{center_stream, CenterConfig};
//! use std::io::Cursor;
//!
//! # fn main() -> center::Result<()> {
//! let config = CenterConfig::new(10)?;
//! let mut out = Vec::new();
//! center_stream(&mut Cursor::new("hi\n"), &mut out, &config, "example")?;
//! assert_eq!(out, b"    hi\n");
//! # Ok(())
//! # }
//! ```

pub mod ansi;
pub mod center;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod width;

pub use center::{center_block, center_lines, center_stream, padding, StreamStats};
pub use config::{Alignment, CenterConfig, ConfigLoader, Settings};
pub use error::{Error, Result};
pub use input::{run, run_with, InputSource, RunSummary, SourceFailure};
pub use models::{Block, Line};
pub use width::LengthMode;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
