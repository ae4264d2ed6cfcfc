use crate::util::unicode::{display_width, truncate_to_width};

/// Greedy word wrap to `width` cells.
///
/// Breaks at spaces. A single word wider than `width` is truncated with an
/// ellipsis rather than split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in text.split_whitespace() {
        let word_w = display_width(word);
        if current_w > 0 && current_w + 1 + word_w > width {
            lines.push(std::mem::take(&mut current));
            current_w = 0;
        }
        if current_w > 0 {
            current.push(' ');
            current_w += 1;
        }
        if word_w > width {
            let cut = truncate_to_width(word, width);
            current_w += display_width(&cut);
            current.push_str(&cut);
        } else {
            current.push_str(word);
            current_w += word_w;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap_words("short text", 20), vec!["short text"]);
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        assert_eq!(
            wrap_words("The field is blank. There is nothing to add.", 20),
            vec!["The field is blank.", "There is nothing to", "add."]
        );
    }

    #[test]
    fn test_wrap_long_word_truncated() {
        assert_eq!(wrap_words("abcdefghij xy", 5), vec!["abcd\u{2026}", "xy"]);
    }

    #[test]
    fn test_wrap_empty_and_zero_width() {
        assert_eq!(wrap_words("", 10), vec![""]);
        assert!(wrap_words("abc", 0).is_empty());
    }
}
