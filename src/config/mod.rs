//! Configuration for center
//!
//! Width, tab width and counting mode are settled once at startup from
//! command-line values, an optional defaults file and the terminal size.
//! The resulting [`CenterConfig`] is immutable and shared by reference with
//! every engine call.

pub mod loader;
pub mod terminal;

use std::num::IntErrorKind;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::width::LengthMode;
use self::terminal::TerminalSize;

pub use loader::ConfigLoader;
pub use terminal::StdoutTerminal;

/// Tab width used when none is given
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// How lines of one source share their left margin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Every line is centered on its own width
    #[default]
    PerLine,
    /// Every line is shifted by the margin of the longest line
    Block,
}

/// Resolved, read-only settings for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterConfig {
    /// Target output width in cells, always positive
    pub width: usize,
    /// Cells per tab; 0 makes tabs take no room
    pub tab_width: usize,
    pub length_mode: LengthMode,
    pub alignment: Alignment,
}

impl CenterConfig {
    /// Build a config for an explicit width with default tab width and modes
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::WidthNotPositive { value: 0 });
        }
        Ok(Self {
            width,
            tab_width: DEFAULT_TAB_WIDTH,
            length_mode: LengthMode::default(),
            alignment: Alignment::default(),
        })
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn with_length_mode(mut self, length_mode: LengthMode) -> Self {
        self.length_mode = length_mode;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Partially specified settings, from the command line or a defaults file.
///
/// Numbers are kept signed so that out-of-range values can be reported
/// rather than rejected by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: Option<i64>,
    pub tab_width: Option<i64>,
    pub count_escapes: Option<bool>,
    pub longest: Option<bool>,
}

impl Settings {
    /// Fill unset values from `fallback`
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            width: self.width.or(fallback.width),
            tab_width: self.tab_width.or(fallback.tab_width),
            count_escapes: self.count_escapes.or(fallback.count_escapes),
            longest: self.longest.or(fallback.longest),
        }
    }

    /// Validate and turn into a [`CenterConfig`].
    ///
    /// The terminal is only consulted when no width was given.
    pub fn resolve(&self, terminal: &dyn TerminalSize) -> Result<CenterConfig> {
        let width = match self.width {
            Some(width) => validate_width(width)?,
            None => terminal.columns().ok_or(Error::WidthUnavailable)?,
        };
        let tab_width = match self.tab_width {
            Some(tab_width) => validate_tab_width(tab_width)?,
            None => DEFAULT_TAB_WIDTH,
        };
        let length_mode = if self.count_escapes.unwrap_or(false) {
            LengthMode::Raw
        } else {
            LengthMode::EscapeAware
        };
        let alignment = if self.longest.unwrap_or(false) {
            Alignment::Block
        } else {
            Alignment::PerLine
        };

        let config = CenterConfig {
            width,
            tab_width,
            length_mode,
            alignment,
        };
        debug!(?config, "Resolved configuration");
        Ok(config)
    }
}

/// Parse an integer the way C's `strtol` does with base 0.
///
/// Accepts an optional sign followed by a `0x`/`0X` hexadecimal, `0` octal
/// or plain decimal number. Empty input or trailing characters are errors;
/// values outside the `i64` range saturate.
pub fn parse_integer(text: &str) -> Result<i64> {
    let invalid = || Error::InvalidInteger {
        value: text.to_string(),
    };

    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    // Out-of-range values clamp to the nearest bound; callers warn about them.
    let digits = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    match i64::from_str_radix(&digits, radix) {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(invalid()),
        },
    }
}

fn validate_width(width: i64) -> Result<usize> {
    if width <= 0 {
        return Err(Error::WidthNotPositive { value: width });
    }
    if width > i64::from(i32::MAX) {
        warn!("Potential overflow of given width");
    }
    Ok(usize::try_from(width).unwrap_or(usize::MAX))
}

fn validate_tab_width(tab_width: i64) -> Result<usize> {
    if tab_width < 0 {
        return Err(Error::NegativeTabWidth { value: tab_width });
    }
    if tab_width > i64::from(i32::MAX) {
        warn!("Potential overflow of given tab size");
    }
    Ok(usize::try_from(tab_width).unwrap_or(usize::MAX))
}
