//! Display-width aware helpers for fitting labels into cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncate `s` to at most `max_width` columns, appending `tail` when cut.
///
/// The tail counts toward the width. When even the tail does not fit, as
/// much of the tail as fits is returned.
///
/// ```
/// use ribbon_widgets::text::truncate;
///
/// assert_eq!(truncate("Feedback", 6, "…"), "Feedb…");
/// assert_eq!(truncate("Copy", 10, "…"), "Copy");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let tail_width = tail.width();
    if tail_width >= max_width {
        return take_width(tail, max_width);
    }
    let mut out = take_width(s, max_width - tail_width);
    out.push_str(tail);
    out
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        out.push(c);
        width += cw;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_unchanged() {
        assert_eq!(truncate("Edit", 4, "…"), "Edit");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("编辑"), 4);
        assert_eq!(truncate("编辑文件", 5, "…"), "编辑…");
    }

    #[test]
    fn tail_wider_than_limit() {
        assert_eq!(truncate("Upload", 2, "..."), "..");
    }
}
