#![no_main]
use libfuzzer_sys::fuzz_target;

use caret_json::{format, parse_str};

/// Control characters that `stringify` writes as `\u00XX`, which the
/// scanner does not accept back.
fn has_unnamed_control(s: &str) -> bool {
    s.chars()
        .any(|c| c.is_ascii_control() && !matches!(c, '\u{8}' | '\u{c}' | '\n' | '\r' | '\t' | '\u{7f}'))
}

fuzz_target!(|data: &[u8]| {
    // Only valid UTF-8 reaches the scanner.
    if let Ok(s) = std::str::from_utf8(data) {
        // Any input must produce a value or an error, never a panic.
        if let Ok(value) = parse_str(s) {
            let _ = value.stringify();

            if has_unnamed_control(s) {
                return;
            }
            // Formatted output must parse back to the same tree.
            let pretty = format(s).expect("parsed input must format");
            let reparsed = parse_str(&pretty).expect("formatted output must parse");
            assert_eq!(value, reparsed);
        }
    }
});
