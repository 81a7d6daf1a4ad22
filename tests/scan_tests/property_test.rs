//! Property-based tests for the line scanner.

use gcode_scan::{scan, ScanError};
use proptest::prelude::*;

/// Command words that start with a letter other than the line-number `N`.
fn word_strategy() -> impl Strategy<Value = String> {
    "[A-MO-Za-mo-z][A-Za-z0-9.+-]{0,6}"
}

fn separator_strategy() -> impl Strategy<Value = String> {
    "[ \t]{1,3}"
}

proptest! {
    #[test]
    fn test_codes_are_whitespace_fields(
        words in prop::collection::vec(word_strategy(), 0..8),
        separators in prop::collection::vec(separator_strategy(), 8),
        leading in "[ \t]{0,2}",
        trailing in "[ \t]{0,2}",
    ) {
        let mut text = leading.clone();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                text.push_str(&separators[i]);
            }
            text.push_str(word);
        }
        text.push_str(&trailing);

        let line = scan(&text).unwrap();
        let codes: Vec<&str> = line.codes().iter().map(|c| c.as_str()).collect();
        let expected: Vec<&str> = words.iter().map(String::as_str).collect();
        prop_assert_eq!(codes, expected);
        prop_assert_eq!(line.comment(), None);
    }

    #[test]
    fn test_scan_is_idempotent(text in any::<String>()) {
        prop_assert_eq!(scan(&text), scan(&text));
    }

    #[test]
    fn test_text_round_trips(text in "[ -~]{0,40}") {
        if let Ok(line) = scan(&text) {
            prop_assert_eq!(line.text(), text.as_str());
        }
    }

    #[test]
    fn test_error_points_at_found_char(text in any::<String>()) {
        if let Err(ScanError::UnexpectedChar { found, position, column, .. }) = scan(&text) {
            prop_assert!(text[position..].starts_with(found));
            prop_assert_eq!(text[..position].chars().count() + 1, column);
        }
    }

    #[test]
    fn test_display_rescans_to_same_line(text in "[ -~]{0,40}") {
        if let Ok(line) = scan(&text) {
            let again = scan(&line.to_string()).unwrap();
            prop_assert_eq!(again.codes(), line.codes());
            prop_assert_eq!(again.comment(), line.comment());
        }
    }
}
