use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::application::row_style::{Row, RowStyle};

use super::input::Mode;
use super::Ui;

const PENDING_TEXT: Color = Color::Rgb(0x33, 0x41, 0x55);
const COMPLETED_TEXT: Color = Color::Rgb(0x64, 0x74, 0x8B);
const COMPLETED_BG: Color = Color::DarkGray;

/// Text and background style for a row's body.
pub fn body_style(style: RowStyle) -> Style {
    let mut s = Style::default().fg(if style.muted { COMPLETED_TEXT } else { PENDING_TEXT });
    if style.strikethrough { s = s.add_modifier(Modifier::CROSSED_OUT); }
    if style.darker { s = s.bg(COMPLETED_BG); }
    s
}

fn row_item(row: Row<'_>) -> ListItem<'_> {
    let mark = if row.style.checked { "[x] " } else { "[ ] " };
    let line = Line::from(vec![Span::raw(mark), Span::styled(row.body, body_style(row.style))]);
    let item = ListItem::new(line);
    if row.style.darker { item.style(Style::default().bg(COMPLETED_BG)) } else { item }
}

pub fn draw(f: &mut Frame, ui: &Ui) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
        .split(f.size());

    draw_tabs(f, ui, chunks[0]);
    draw_list(f, ui, chunks[1]);
    draw_footer(f, ui, chunks[2]);
}

fn draw_tabs(f: &mut Frame, ui: &Ui, area: Rect) {
    let titles: Vec<Line> = ui.app.page.keys().map(|k| Line::from(k.label())).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Todo App"))
        .select(ui.app.page.selected_index())
        .highlight_style(Style::default().fg(Color::White).bg(Color::Gray).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn draw_list(f: &mut Frame, ui: &Ui, area: Rect) {
    let view = ui.app.page.active();
    let items: Vec<ListItem> = view.rows().map(row_item).collect();
    let mut title = format!("{} ({})", ui.app.page.selected().label(), items.len());
    if !view.is_loaded() { title.push_str(" loading"); }
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    state.select(ui.selected_index());
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(f: &mut Frame, ui: &Ui, area: Rect) {
    let view = ui.app.page.active();
    let (title, text) = match ui.mode {
        Mode::Browse => {
            let mut text = String::from("space toggle | d delete | n new | tab switch | q quit");
            if view.is_toggling() { text.push_str(" | updating"); }
            if view.is_deleting() { text.push_str(" | deleting"); }
            if ui.app.form.is_creating() { text.push_str(" | creating"); }
            if let Some(err) = view.last_error().or(ui.app.form.last_error()) {
                text.push_str(" | error: ");
                text.push_str(err);
            }
            ("info", text)
        }
        Mode::Compose => ("new todo", format!("{}_  (enter save, esc cancel)", ui.app.form.draft())),
    };
    let footer = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        filter_page::ViewKey,
        messages::{Completion, Response, Target},
    };
    use crate::domain::todo::{Todo, TodoId, TodoStatus};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn line_of(buffer: &Buffer, needle: &str) -> (u16, u16) {
        let area = buffer.area;
        for y in 0..area.height {
            let line: String = (0..area.width).map(|x| buffer.get(x, y).symbol()).collect();
            if let Some(byte_pos) = line.find(needle) {
                return (line[..byte_pos].chars().count() as u16, y);
            }
        }
        panic!("{needle:?} not rendered");
    }

    #[test]
    fn completed_rows_are_checked_crossed_out_and_darker() {
        let mut ui = Ui::default();
        ui.complete(Completion {
            target: Target::List(ViewKey::All),
            response: Response::Fetched(Ok(vec![
                Todo { id: TodoId(1), body: "Walk dog".into(), status: TodoStatus::Pending },
                Todo { id: TodoId(2), body: "Pay rent".into(), status: TodoStatus::Completed },
            ])),
        });

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw(f, &ui)).unwrap();
        let buffer = terminal.backend().buffer();

        let (x, y) = line_of(buffer, "[x] Pay rent");
        let body = buffer.get(x + 4, y);
        assert!(body.modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(body.bg, COMPLETED_BG);

        let (x, y) = line_of(buffer, "[ ] Walk dog");
        let body = buffer.get(x + 4, y);
        assert!(!body.modifier.contains(Modifier::CROSSED_OUT));
        assert_ne!(body.bg, COMPLETED_BG);
    }

    #[test]
    fn text_tone_follows_muted_not_strikethrough() {
        let crossed_only = RowStyle { strikethrough: true, ..RowStyle::PLAIN };
        assert_eq!(body_style(crossed_only).fg, Some(PENDING_TEXT));
        assert!(body_style(crossed_only).add_modifier.contains(Modifier::CROSSED_OUT));

        let muted_only = RowStyle { muted: true, ..RowStyle::PLAIN };
        assert_eq!(body_style(muted_only).fg, Some(COMPLETED_TEXT));
        assert!(!body_style(muted_only).add_modifier.contains(Modifier::CROSSED_OUT));

        assert_eq!(body_style(RowStyle::for_status(TodoStatus::Completed)).fg, Some(COMPLETED_TEXT));
    }

    #[test]
    fn tabs_show_all_and_each_status() {
        let ui = Ui::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw(f, &ui)).unwrap();
        let buffer = terminal.backend().buffer();
        line_of(buffer, "All");
        line_of(buffer, "pending");
        line_of(buffer, "completed");
    }
}
