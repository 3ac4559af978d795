use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Style;

/// One resolved row/column intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Styled text. Embedded newlines are stored as the escape `\n`.
    Data { text: String, style: Style },
    /// A character repeated over the full column width.
    Separator(char),
}

impl Cell {
    pub fn data(text: impl Into<String>, style: Style) -> Self {
        Self::Data {
            text: escape_newlines(text.into()),
            style,
        }
    }

    #[must_use]
    pub fn blank() -> Self {
        Self::Data {
            text: String::new(),
            style: Style::plain(),
        }
    }

    /// Display width of the unstyled content.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Cell::Data { text, .. } => UnicodeWidthStr::width(text.as_str()),
            Cell::Separator(c) => UnicodeWidthChar::width(*c).unwrap_or(1),
        }
    }

    /// Pads the content to `width` and applies the style.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        match self {
            Cell::Data { text, style } => style.apply(&pad(text, width)),
            Cell::Separator(c) => c.to_string().repeat(width),
        }
    }

    /// Pads the content to `width`, ignoring the style.
    #[must_use]
    pub fn render_plain(&self, width: usize) -> String {
        match self {
            Cell::Data { text, .. } => pad(text, width),
            Cell::Separator(c) => c.to_string().repeat(width),
        }
    }
}

/// Left-justifies `text`, filling with spaces up to `width` display columns.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    if current >= width {
        return text.to_string();
    }

    format!("{text}{}", " ".repeat(width - current))
}

fn escape_newlines(text: String) -> String {
    if text.contains('\n') {
        text.replace('\n', "\\n")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_cell_pads_to_width() {
        let cell = Cell::data("ab", Style::plain());
        assert_eq!(cell.width(), 2);
        assert_eq!(cell.render(5), "ab   ");
    }

    #[test]
    fn test_data_cell_never_truncates() {
        let cell = Cell::data("abcdef", Style::plain());
        assert_eq!(cell.render(3), "abcdef");
    }

    #[test]
    fn test_render_plain_skips_style() {
        let cell = Cell::data("ok", Style::new("<{text}>"));
        assert_eq!(cell.render_plain(4), "ok  ");
        assert_eq!(Cell::Separator('=').render_plain(3), "===");
    }

    #[test]
    fn test_style_wraps_padded_text() {
        let cell = Cell::data("ok", Style::new("<{text}>"));
        assert_eq!(cell.render(4), "<ok  >");
        assert_eq!(cell.width(), 2);
    }

    #[test]
    fn test_newlines_are_escaped() {
        let cell = Cell::data("one\ntwo", Style::plain());
        assert_eq!(cell.width(), 8);
        assert_eq!(cell.render(8), "one\\ntwo");
    }

    #[test]
    fn test_separator_fills_width() {
        let cell = Cell::Separator('=');
        assert_eq!(cell.width(), 1);
        assert_eq!(cell.render(4), "====");
    }

    #[test]
    fn test_wide_characters_count_by_display_width() {
        let cell = Cell::data("日本", Style::plain());
        assert_eq!(cell.width(), 4);
        assert_eq!(cell.render(6), "日本  ");
    }

    #[test]
    fn test_blank_cell() {
        assert_eq!(Cell::blank().width(), 0);
        assert_eq!(Cell::blank().render(3), "   ");
    }
}
