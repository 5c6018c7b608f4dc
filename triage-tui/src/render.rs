//! Styled lines: the unit the table view produces and the terminal draws.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn hex(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

/// Dark purple palette, matching the rest of the tooling.
pub mod palette {
    use super::Rgb;

    pub const BACKGROUND: Rgb = Rgb::new(22, 20, 29);
    pub const TEXT: Rgb = Rgb::new(226, 226, 226);
    pub const MUTED: Rgb = Rgb::new(112, 108, 128);
    pub const BORDER: Rgb = Rgb::new(58, 54, 70);
    pub const ERROR: Rgb = Rgb::new(232, 92, 84);
    /// Row under the keyboard cursor.
    pub const CURSOR: Rgb = Rgb::hex(0xA277FF);
    /// Selected row.
    pub const SELECTED: Rgb = Rgb::hex(0x6E5494);
    pub const OPEN: Rgb = Rgb::hex(0x3B82F6);
    pub const RESOLVED: Rgb = Rgb::hex(0x9CA3AF);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// One terminal row of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text with a style. Control characters become spaces.
    pub fn push(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        let mut text = text.into();
        if text.chars().any(char::is_control) {
            text = sanitize(&text);
        }
        self.spans.push(Span { text, style });
        self
    }

    /// Append text padded or truncated to exactly `width` columns.
    pub fn push_cell(&mut self, text: &str, width: usize, style: Style) -> &mut Self {
        self.push(fit_to_width(text, width), style)
    }

    /// Display width of the line.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.width()).sum()
    }

    /// Pad with spaces up to `width` columns.
    pub fn pad_to(&mut self, width: usize, style: Style) -> &mut Self {
        let current = self.width();
        if current < width {
            self.push(" ".repeat(width - current), style);
        }
        self
    }

    /// Cut off at `width` columns, then pad up to it.
    pub fn fit_to(&mut self, width: usize, style: Style) -> &mut Self {
        let mut remaining = width;
        for span in &mut self.spans {
            let span_width = span.text.width();
            if span_width > remaining {
                span.text = take_width(&span.text, remaining);
            }
            remaining -= span.text.width();
        }
        self.spans.retain(|span| !span.text.is_empty());
        self.pad_to(width, style)
    }

    /// Plain text of the line, without styles.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Replace control characters with spaces.
///
/// They have no display width, and a newline or escape sequence written
/// into a cell would move the terminal cursor off the grid.
fn sanitize(s: &str) -> String {
    s.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

/// Truncate with an ellipsis when too wide.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let s = sanitize(s);
    if s.width() <= max_width {
        return s;
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = take_width(&s, max_width - 1);
    result.push('…');
    result
}

/// Longest prefix that fits in `max_width` columns.
fn take_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Truncate or pad so the result is exactly `width` columns wide.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut text = truncate_to_width(s, width);
    let current = text.width();
    if current < width {
        text.push_str(&" ".repeat(width - current));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("error", 10), "error");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("TypeError: x", 6), "TypeE…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_fit_pads() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
        assert_eq!(fit_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn test_line_pad_and_text() {
        let mut line = Line::new();
        line.push("ab", Style::new()).pad_to(5, Style::new());
        assert_eq!(line.width(), 5);
        assert_eq!(line.text(), "ab   ");
    }

    #[test]
    fn test_line_fit_clips_spans() {
        let mut line = Line::new();
        line.push("abc", Style::new()).push("defg", Style::new().bold());
        line.fit_to(5, Style::new());
        assert_eq!(line.text(), "abcde");
        assert_eq!(line.spans.len(), 2);

        line.fit_to(2, Style::new());
        assert_eq!(line.text(), "ab");
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn test_fit_replaces_control_characters() {
        let fitted = fit_to_width("a\nb\tc\x1b[2J", 10);
        assert_eq!(fitted, "a b c [2J ");
        assert_eq!(fitted.width(), 10);

        let clipped = fit_to_width("line one\nline two", 9);
        assert!(!clipped.contains('\n'));
        assert_eq!(clipped.width(), 9);
    }

    #[test]
    fn test_line_push_replaces_control_characters() {
        let mut line = Line::new();
        line.push("load failed:\r\nbad", Style::new());
        assert_eq!(line.text(), "load failed:  bad");
        line.fit_to(20, Style::new());
        assert_eq!(line.width(), 20);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::hex(0xA277FF), Rgb::new(0xA2, 0x77, 0xFF));
    }
}
