//! Unit tests for visible width measurement

use center::ansi::{escape_overhead, match_escape};
use center::width::{escape_aware_len, utf8_len};
use center::LengthMode;

#[cfg(test)]
mod visible_length_tests {
    use super::*;

    #[test]
    fn test_plain_ascii() {
        assert_eq!(utf8_len(b"Hello, World!\n"), 13);
        assert_eq!(escape_aware_len(b"Hello, World!\n"), 13);
    }

    #[test]
    fn test_newline_only() {
        assert_eq!(LengthMode::Raw.measure(b"\n"), 0);
        assert_eq!(LengthMode::EscapeAware.measure(b"\n"), 0);
        assert_eq!(LengthMode::Raw.measure(b""), 0);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(utf8_len("café\n".as_bytes()), 4);
        assert_eq!(utf8_len("Ωμέγα".as_bytes()), 5);
        assert_eq!(utf8_len("→ ✓\n".as_bytes()), 3);
    }

    #[test]
    fn test_bold_red_hello() {
        let line = b"\x1b[1;31mHello";
        assert_eq!(match_escape(&line[1..]), 7);
        assert_eq!(utf8_len(line), 12);
        assert_eq!(escape_aware_len(line), 5);
    }

    #[test]
    fn test_colored_output_lines() {
        let cases: [(&[u8], usize); 4] = [
            (b"\x1b[31mRed text\x1b[0m\n", 8),
            (b"\x1b[32mGreen text\x1b[0m\n", 10),
            (b"\x1b[1mBold text\x1b[0m\n", 9),
            (b"\x1b[38;5;208mOrange\x1b[0m\n", 6),
        ];
        for (line, expected) in cases {
            assert_eq!(escape_aware_len(line), expected);
        }
    }

    #[test]
    fn test_non_sgr_sequences_are_visible() {
        // cursor movement and OSC titles are not recognized
        assert_eq!(escape_overhead(b"\x1b[2Aup"), 0);
        assert_eq!(escape_aware_len(b"\x1b[2Aup"), utf8_len(b"\x1b[2Aup"));
    }

    #[test]
    fn test_unterminated_sequence() {
        assert_eq!(escape_aware_len(b"\x1b[31"), 4);
        assert_eq!(escape_aware_len(b"\x1b[31\n"), 4);
    }

    #[test]
    fn test_colored_multibyte() {
        assert_eq!(escape_aware_len("\x1b[35mñandú\x1b[0m\n".as_bytes()), 5);
    }
}
