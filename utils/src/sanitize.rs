//! Cleanup for text pasted into form fields.
//!
//! Bracketed paste hands over raw bytes from the clipboard, which may carry
//! ANSI escape sequences or control characters. Those are dropped before the
//! text reaches a draft, because drafts are echoed back to the terminal.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL|ST`), DCS/PM/APC
/// (`ESC P|^|_ ... ST`), two-byte charset selects, and lone `ESC x`.
static ESCAPE_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\x1b\[[\x20-\x3f]*[\x40-\x7e]?",
        r"|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)?",
        r"|\x1b[P^_][^\x1b]*(?:\x1b\\)?",
        r"|\x1b[()*+#\x20].?",
        r"|\x1b.?",
        r"|\u{9b}[\x20-\x3f]*[\x40-\x7e]?",
    ))
    .expect("escape pattern is valid")
});

fn is_stripped_control(c: char) -> bool {
    (c.is_control() && !matches!(c, '\n' | '\t')) || c == '\r'
}

/// Remove escape sequences and control characters other than `\n` and `\t`.
///
/// `\r\n` collapses to `\n`. Returns the input unchanged (borrowed) when
/// nothing needed stripping.
#[must_use]
pub fn sanitize_pasted_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_stripped_control) {
        return Cow::Borrowed(input);
    }

    let without_escapes = ESCAPE_SEQUENCE.replace_all(input, "");
    let normalized = without_escapes.replace("\r\n", "\n");
    Cow::Owned(
        normalized
            .chars()
            .filter(|c| !is_stripped_control(*c))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::sanitize_pasted_text;

    #[test]
    fn clean_text_is_borrowed() {
        let input = "Hello, I need a website.\n\tThanks";
        assert!(matches!(sanitize_pasted_text(input), Cow::Borrowed(s) if s == input));
    }

    #[test]
    fn strips_color_codes() {
        assert_eq!(sanitize_pasted_text("\x1b[31mRed\x1b[0m text"), "Red text");
    }

    #[test]
    fn strips_osc_with_either_terminator() {
        assert_eq!(sanitize_pasted_text("a\x1b]52;c;SGVsbG8=\x07b"), "ab");
        assert_eq!(sanitize_pasted_text("a\x1b]0;title\x1b\\b"), "ab");
    }

    #[test]
    fn strips_c0_c1_and_del() {
        assert_eq!(sanitize_pasted_text("A\x00B\u{0085}C\x7fD"), "ABCD");
    }

    #[test]
    fn crlf_becomes_newline() {
        assert_eq!(sanitize_pasted_text("one\r\ntwo\rthree"), "one\ntwothree");
    }

    #[test]
    fn keeps_non_ascii() {
        assert_eq!(
            sanitize_pasted_text("\x1b[1mလူငယ်နဲ့ နည်းပညာ"),
            "လူငယ်နဲ့ နည်းပညာ"
        );
    }
}
