// Text formatters
//
// Shared wrapping helpers for the transcript and the input bar. Both use the
// same greedy hard wrap so the draft cursor lands where the text is drawn.

use unicode_width::UnicodeWidthChar;

/// Hard-wrap text to `width` display columns
///
/// Newlines always break. A character that would overflow the current row
/// starts a new one; wide glyphs are never split. Every input line yields at
/// least one output row, so an empty string gives `[""]`.
///
/// # Examples
/// ```ignore
/// assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
/// assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for ch in line.chars() {
            let w = char_width(ch);
            if used + w > width && used > 0 {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(ch);
            used += w;
        }
        rows.push(row);
    }

    rows
}

/// Display columns for one character (control characters count as zero)
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Display columns for a string
pub fn text_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Format a count with a noun, pluralised
///
/// # Examples
/// ```ignore
/// assert_eq!(format_count(1, "exchange"), "1 exchange");
/// assert_eq!(format_count(3, "exchange"), "3 exchanges");
/// ```
pub fn format_count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_width() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("abcd", 4), vec!["abcd"]);
    }

    #[test]
    fn newlines_always_break() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("ab\n", 10), vec!["ab", ""]);
    }

    #[test]
    fn wide_glyphs_are_not_split() {
        // Each CJK glyph is two columns
        assert_eq!(wrap_text("日本語", 5), vec!["日本", "語"]);
        assert_eq!(text_width("日本語"), 6);
    }

    #[test]
    fn zero_width_is_treated_as_one() {
        assert_eq!(wrap_text("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn counts_pluralise() {
        assert_eq!(format_count(0, "exchange"), "0 exchanges");
        assert_eq!(format_count(1, "exchange"), "1 exchange");
    }
}
