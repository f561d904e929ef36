//! Width-aware text helpers. All widths are terminal cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Word-wrap `text` to `width` cells. Words wider than a line are split at
/// grapheme boundaries. Always returns at least one line.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(!current.is_empty());
        if current_width + gap + word_width <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += gap + word_width;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        for grapheme in word.graphemes(true) {
            let g_width = grapheme.width();
            if current_width + g_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += g_width;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Longest prefix of `text` that fits in `width` cells.
pub(crate) fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, grapheme) in text.grapheme_indices(true) {
        used += grapheme.width();
        if used > width {
            return &text[..index];
        }
    }
    text
}

/// Longest suffix of `text` that fits in `width` cells.
pub(crate) fn tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, grapheme) in text.grapheme_indices(true).rev() {
        used += grapheme.width();
        if used > width {
            return &text[index + grapheme.len()..];
        }
    }
    text
}

/// `text` padded with spaces to exactly `width` cells (truncated if wider).
pub(crate) fn pad(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let fill = width.saturating_sub(fitted.width());
    format!("{fitted}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::{pad, tail, truncate, wrap};

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Custom responsive websites with modern design", 20),
            vec!["Custom responsive", "websites with modern", "design"]
        );
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_of_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_and_tail_respect_wide_graphemes() {
        assert_eq!(truncate("日本語", 4), "日本");
        assert_eq!(tail("日本語", 5), "本語");
        assert_eq!(tail("abc", 10), "abc");
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcd");
    }
}
