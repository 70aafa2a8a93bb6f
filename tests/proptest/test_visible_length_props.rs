//! Property-based tests for visible width measurement
//!
//! These tests use proptest to generate random lines and check the
//! counting rules hold for all of them.

use center::ansi::ESC;
use center::width::{escape_aware_len, utf8_len};
use center::LengthMode;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_raw_length_is_char_count(s in "[^\\n\\t\\x1b]{0,200}") {
        let line = format!("{s}\n");
        prop_assert_eq!(utf8_len(line.as_bytes()), s.chars().count());
    }

    #[test]
    fn test_escape_aware_never_longer(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        prop_assert!(escape_aware_len(&bytes) <= utf8_len(&bytes));
    }

    #[test]
    fn test_equal_without_marker(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let bytes: Vec<u8> = bytes.into_iter().filter(|b| *b != ESC).collect();
        prop_assert_eq!(escape_aware_len(&bytes), utf8_len(&bytes));
    }

    #[test]
    fn test_colors_are_invisible(
        text in "[a-zA-Z0-9 ]{0,80}",
        codes in prop::collection::vec(prop::collection::vec(0u8..108u8, 0..4), 1..6),
    ) {
        let mut line = String::new();
        for params in &codes {
            let params: Vec<String> = params.iter().map(u8::to_string).collect();
            line.push_str(&format!("\x1b[{}m", params.join(";")));
        }
        line.push_str(&text);
        line.push_str("\x1b[0m\n");

        prop_assert_eq!(LengthMode::EscapeAware.measure(line.as_bytes()), text.len());
        prop_assert!(LengthMode::Raw.measure(line.as_bytes()) > text.len());
    }

    #[test]
    fn test_measure_does_not_panic(bytes in prop::collection::vec(any::<u8>(), 0..500)) {
        let _ = LengthMode::Raw.measure(&bytes);
        let _ = LengthMode::EscapeAware.measure(&bytes);
    }
}
