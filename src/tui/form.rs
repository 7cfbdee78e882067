use ratatui::{
    layout::Rect,
    text::{Line, Span},
};

use crate::picker::view::DialogView;

use super::theme::Theme;

/// Format a text buffer with a visible block cursor at the given position.
pub fn format_with_cursor(buf: &str, cursor: usize) -> String {
    let pos = cursor.min(buf.len());
    let (before, after) = buf.split_at(pos);
    format!("{before}\u{2588}{after}")
}

/// Centre a panel taking `percent` of `area` in both directions, growing to at
/// least `min_width`×`min_height` but never past the available space.
pub fn centered_rect(area: Rect, percent: u16, min_width: u16, min_height: u16) -> Rect {
    let scale = |len: u16| (u32::from(len) * u32::from(percent) / 100) as u16;
    let w = scale(area.width).max(min_width).min(area.width);
    let h = scale(area.height).max(min_height).min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// The dialog's input row: the buffer with a cursor, or the placeholder when empty.
pub fn input_line<'a>(dialog: &DialogView<'a>, theme: &Theme) -> Line<'a> {
    let prompt = Span::styled("> ", theme.heading_style());
    if dialog.input.is_empty() {
        return Line::from(vec![
            prompt,
            Span::styled("\u{2588}", theme.row_style()),
            Span::styled(dialog.placeholder, theme.muted_style()),
        ]);
    }
    Line::from(vec![
        prompt,
        Span::styled(
            format_with_cursor(dialog.input, dialog.cursor),
            theme.row_style(),
        ),
    ])
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog(input: &str, cursor: usize) -> DialogView<'_> {
        DialogView {
            title: "NEW SESSION",
            message: "Type a session name and press Enter",
            is_error: false,
            input,
            cursor,
            placeholder: "new-session",
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn format_with_cursor_at_positions() {
        assert_eq!(format_with_cursor("hello", 0), "\u{2588}hello");
        assert_eq!(format_with_cursor("hello", 2), "he\u{2588}llo");
        assert_eq!(format_with_cursor("hello", 5), "hello\u{2588}");
        assert_eq!(format_with_cursor("hello", 99), "hello\u{2588}");
    }

    #[test]
    fn centered_rect_uses_percentage() {
        let r = centered_rect(Rect::new(0, 0, 100, 50), 86, 56, 16);
        assert_eq!(r, Rect::new(7, 3, 86, 43));
    }

    #[test]
    fn centered_rect_respects_minimum_then_area() {
        let r = centered_rect(Rect::new(0, 0, 60, 12), 86, 56, 16);
        assert_eq!(r, Rect::new(2, 0, 56, 12));
    }

    #[test]
    fn empty_input_shows_placeholder() {
        let theme = Theme::default();
        let line = input_line(&dialog("", 0), &theme);
        assert_eq!(line_text(&line), "> \u{2588}new-session");
    }

    #[test]
    fn input_shows_cursor() {
        let theme = Theme::default();
        let line = input_line(&dialog("abc", 1), &theme);
        assert_eq!(line_text(&line), "> a\u{2588}bc");
    }
}
