use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, List, ListItem, ListState, Padding, Paragraph},
};

use crate::picker::view::{DialogView, PickerView, RowView};

use super::form::{centered_rect, input_line};
use super::theme::Theme;

const FRAME_PERCENT: u16 = 86;
const FRAME_MIN_WIDTH: u16 = 56;
const FRAME_MIN_HEIGHT: u16 = 16;
/// Title, message, input, plus vertical padding.
const DIALOG_HEIGHT: u16 = 7;

pub fn draw(frame: &mut Frame, view: &PickerView<'_>, theme: &Theme, list_state: &mut ListState) {
    let area = centered_rect(
        frame.area(),
        FRAME_PERCENT,
        FRAME_MIN_WIDTH,
        FRAME_MIN_HEIGHT,
    );
    frame.render_widget(Clear, area);

    let block = Block::default()
        .style(theme.panel(theme.frame_background))
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    let has_rows = !view.rows.is_empty();
    if has_rows {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
    } else {
        // Centre the empty message vertically.
        constraints.insert(0, Constraint::Fill(1));
        constraints.push(Constraint::Length(1));
    }
    if view.dialog.is_some() {
        constraints.push(Constraint::Length(DIALOG_HEIGHT));
    }
    if !has_rows {
        constraints.push(Constraint::Fill(1));
    }
    let chunks = Layout::vertical(constraints).spacing(1).split(inner);
    let mut chunks = chunks.iter().copied();
    if !has_rows {
        chunks.next();
    }

    let (Some(brand_area), Some(help_area), Some(heading_area)) =
        (chunks.next(), chunks.next(), chunks.next())
    else {
        return;
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(view.brand, theme.brand_style())).centered()),
        brand_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(view.help, theme.muted_style())).centered()),
        help_area,
    );

    if has_rows {
        if let Some(title) = view.title {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(title, theme.heading_style())).centered()),
                heading_area,
            );
        }
        if let Some(list_area) = chunks.next() {
            draw_list(frame, view, theme, list_state, list_area);
        }
    } else if let Some(message) = view.empty_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message, theme.muted_style())).centered()),
            heading_area,
        );
    }

    if let Some(dialog) = &view.dialog
        && let Some(dialog_area) = chunks.next()
    {
        draw_dialog(frame, dialog, theme, dialog_area);
    }
}

fn draw_list(
    frame: &mut Frame,
    view: &PickerView<'_>,
    theme: &Theme,
    list_state: &mut ListState,
    area: Rect,
) {
    let items: Vec<ListItem> = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| row_item(row, view.selected == Some(i), theme))
        .collect();

    let block = Block::default()
        .style(theme.panel(theme.panel_base))
        .padding(Padding::uniform(1));
    let list = List::new(items)
        .block(block)
        .highlight_symbol("\u{25b8} ");

    list_state.select(view.selected);
    frame.render_stateful_widget(list, area, list_state);
}

fn row_item<'a>(row: &RowView<'a>, selected: bool, theme: &Theme) -> ListItem<'a> {
    let (label_style, description_style) = if selected {
        (
            theme.selected_row_style(),
            theme.selected_description_style(),
        )
    } else {
        (theme.row_style(), theme.muted_style())
    };
    ListItem::new(Text::from(vec![
        Line::from(Span::styled(row.label, label_style)),
        Line::from(Span::styled(row.description.clone(), description_style)),
    ]))
}

fn draw_dialog(frame: &mut Frame, dialog: &DialogView<'_>, theme: &Theme, area: Rect) {
    let block = Block::default()
        .style(theme.panel(theme.panel_raised))
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(dialog.title, theme.heading_style())),
        Line::from(Span::styled(
            dialog.message,
            theme.dialog_message_style(dialog.is_error),
        )),
        input_line(dialog, theme),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::picker::{Mode, Picker, entry};

    fn render(picker: &Picker, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::default();
        let mut state = ListState::default();
        terminal
            .draw(|frame| draw(frame, &picker.view(), &theme, &mut state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn draws_rows_and_help() {
        let picker = Picker::new(entry::parse("api\tapi\t\tS\t-\tproj\n"), Mode::Pick);
        let screen = render(&picker, 100, 30);
        assert!(screen.contains("SUPERMUX"));
        assert!(screen.contains("SESSIONS"));
        assert!(screen.contains("api"));
        assert!(screen.contains("proj session"));
        assert!(screen.contains("Ctrl-N new"));
    }

    #[test]
    fn draws_empty_message_and_dialog() {
        let picker = Picker::new(Vec::new(), Mode::Pick);
        let screen = render(&picker, 100, 30);
        assert!(screen.contains("No sessions found for this scope"));
        assert!(screen.contains("NEW SESSION"));
        assert!(screen.contains("new-session"));
    }

    #[test]
    fn kill_mode_empty_has_no_dialog() {
        let picker = Picker::new(Vec::new(), Mode::Kill);
        let screen = render(&picker, 100, 30);
        assert!(screen.contains("No sessions available to kill"));
        assert!(!screen.contains("NEW SESSION"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let picker = Picker::new(entry::parse("a\ta\n"), Mode::Pick);
        render(&picker, 10, 3);
    }
}
