//! UI rendering
//!
//! Every page renders inside the same layout shell: a header with the app
//! title and current route, the page body, and a status bar with key hints
//! or the active notification.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use notely_core::Note;

use super::app::{App, Editor, EditorField, MENU_ITEMS};
use super::router::Route;

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    match &app.route {
        Route::Menu => draw_menu_page(frame, app, chunks[1]),
        Route::Notes => draw_notes_page(frame, app, chunks[1]),
        Route::Categories => draw_categories_page(frame, app, chunks[1]),
        Route::NoteNew | Route::NoteEdit(_) => draw_editor_page(frame, app, chunks[1]),
        Route::CategoryView(_) => draw_category_view_page(frame, app, chunks[1]),
        Route::NotFound(path) => draw_not_found_page(frame, path, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled("Notely", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            app.route.path(),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn draw_menu_page(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .map(|(label, _)| ListItem::new(*label))
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Menu ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.menu_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_notes_page(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app.notes.iter().map(|note| note_item(note, area)).collect();

    let list = List::new(items)
        .block(Block::default().title(" Notes ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !app.notes.is_empty() {
        state.select(Some(app.note_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_categories_page(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .categories
        .iter()
        .map(|category| ListItem::new(category.name.clone()))
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Categories ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !app.categories.is_empty() {
        state.select(Some(app.category_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_editor_page(frame: &mut Frame, app: &App, area: Rect) {
    let Some(editor) = app.editor.as_ref() else {
        return;
    };

    let title = if editor.note_id.is_some() {
        " Edit Note "
    } else {
        " New Note "
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(app.categories.len().max(1) as u16 + 2),
            Constraint::Length(3),
        ])
        .split(inner);

    draw_text_field(
        frame,
        "Title",
        &editor.title,
        editor.field == EditorField::Title,
        chunks[0],
    );
    draw_text_field(
        frame,
        "Content",
        &editor.content,
        editor.field == EditorField::Content,
        chunks[1],
    );
    draw_category_toggles(frame, app, editor, chunks[2]);
    draw_priority_field(frame, editor, chunks[3]);
}

fn draw_text_field(frame: &mut Frame, label: &str, value: &str, active: bool, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(field_style(active));
    frame.render_widget(
        Paragraph::new(value.to_string())
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_category_toggles(frame: &mut Frame, app: &App, editor: &Editor, area: Rect) {
    let items: Vec<ListItem> = app
        .categories
        .iter()
        .map(|category| {
            let mark = if editor.selected_categories.contains(&category.id) {
                "[x]"
            } else {
                "[ ]"
            };
            ListItem::new(format!("{} {}", mark, category.name))
        })
        .collect();

    let active = editor.field == EditorField::Categories;
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(field_style(active));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if active && !app.categories.is_empty() {
        state.select(Some(editor.category_cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_priority_field(frame: &mut Frame, editor: &Editor, area: Rect) {
    let active = editor.field == EditorField::Priority;
    let spans: Vec<Span> = (1..=5)
        .flat_map(|p| {
            let style = if p == editor.priority {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            [Span::styled(format!(" {} ", p), style), Span::raw(" ")]
        })
        .collect();

    let block = Block::default()
        .title(" Priority ")
        .borders(Borders::ALL)
        .border_style(field_style(active));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_category_view_page(frame: &mut Frame, app: &App, area: Rect) {
    let name = app
        .viewed_category
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("?");

    let items: Vec<ListItem> = app
        .category_notes
        .iter()
        .map(|note| note_item(note, area))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Category: {} ", name))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn draw_not_found_page(frame: &mut Frame, path: &str, area: Rect) {
    let text = vec![
        Line::from("404"),
        Line::from(format!("Nothing here: {}", path)),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to go back",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn field_style(active: bool) -> Style {
    if active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(ref message) = app.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            hints_for(&app.route),
            Style::default().add_modifier(Modifier::DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn hints_for(route: &Route) -> &'static str {
    match route {
        Route::Menu => "j/k: move  Enter: open  q: quit",
        Route::Notes => "j/k: move  Enter: edit  n: new  d: delete  Esc: back  q: quit",
        Route::Categories => "j/k: move  Enter: view  Esc: back  q: quit",
        Route::NoteNew | Route::NoteEdit(_) => {
            "Tab: next field  Space: toggle  Ctrl-S: save  Ctrl-D: delete  Esc: cancel"
        }
        Route::CategoryView(_) => "Esc: back  q: quit",
        Route::NotFound(_) => "Esc: back  q: quit",
    }
}

fn note_item(note: &Note, area: Rect) -> ListItem<'static> {
    let max_len = area.width.saturating_sub(10) as usize;
    let title = ellipsize(&note.title, max_len);

    let line = Line::from(vec![
        Span::styled(
            format!("!{} ", note.priority),
            Style::default().fg(priority_color(note.priority)),
        ),
        Span::raw(title),
    ]);
    ListItem::new(line)
}

/// Shorten a title to max_len characters with a trailing ellipsis
///
/// Char-based so multibyte titles never split mid-character.
fn ellipsize(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len || max_len <= 1 {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 1).collect();
        format!("{}…", cut)
    }
}

fn priority_color(priority: i64) -> Color {
    match priority {
        5 => Color::Red,
        4 => Color::LightRed,
        3 => Color::Yellow,
        2 => Color::Green,
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsize_keeps_short_titles() {
        assert_eq!(ellipsize("Shopping List", 20), "Shopping List");
    }

    #[test]
    fn test_ellipsize_cuts_long_titles() {
        assert_eq!(ellipsize("a rather long note title", 10), "a rather …");
    }

    #[test]
    fn test_ellipsize_multibyte_title() {
        // Cut must land on a char boundary, not a byte offset
        assert_eq!(ellipsize("ああああああああああああああ", 10), "あああああああああ…");
        assert_eq!(ellipsize("買い物リスト", 20), "買い物リスト");
    }
}
