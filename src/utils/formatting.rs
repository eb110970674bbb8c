//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Display width of `s` in terminal columns (icons count double).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `s` with spaces up to `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Horizontal rule made of `sep` (first char only, `-` when empty).
pub fn rule(sep: &str, width: usize) -> String {
    sep.chars().next().unwrap_or('-').to_string().repeat(width)
}
