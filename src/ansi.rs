//! ANSI escape sequence matching
//!
//! Recognizes "select graphic rendition" sequences (`ESC [ 1;31 m`) so they
//! can be left out of a line's visible width. Only SGR sequences are
//! understood; any other control sequence is counted as ordinary text.

/// The escape marker that opens every control sequence
pub const ESC: u8 = 0x1b;

/// Measure the SGR sequence that starts right after an escape marker.
///
/// `rest` begins with the byte following `ESC`. Returns the number of cells
/// the whole sequence occupies in the raw count (marker, `[`, parameters and
/// the final `m`), or `0` when `rest` does not continue a valid sequence.
pub fn match_escape(rest: &[u8]) -> usize {
    let Some((&b'[', params)) = rest.split_first() else {
        return 0;
    };

    let digits = params
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b';')
        .count();

    match params.get(digits) {
        Some(b'm') => 3 + digits,
        _ => 0,
    }
}

/// Total cells taken up by every SGR sequence found in `line`
pub fn escape_overhead(line: &[u8]) -> usize {
    line.iter()
        .enumerate()
        .filter(|(_, b)| **b == ESC)
        .map(|(i, _)| match_escape(&line[i + 1..]))
        .sum()
}
