//! Notely TUI
//!
//! Terminal user interface for Notely. Pages are resolved through the
//! route table in `router` and all render inside one layout shell.
//!
//! ## Pages
//!
//! - Menu: entry point, jump to notes or categories
//! - Notes: note list with priority badges
//! - Categories: category list
//! - Note editor: shared by new-note and edit-note
//! - Category view: notes referencing one category
//! - Not found: catch-all fallback
//!
//! ## Navigation
//!
//! - j/k or ↑/↓: Move selection up/down
//! - Enter: Open selected entry
//! - n: New note (from the note list)
//! - d: Delete selected note
//! - Esc: Back
//! - q: Quit

mod app;
mod router;
mod ui;

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;

use notely_core::{seed_example_data, Config, Store};

use app::{App, EditorField};
use router::Route;

/// Run the TUI application
pub fn run() -> Result<()> {
    // Open the store and seed example data on first run
    let mut store = Store::open()?;
    init_tui_logging(store.config());
    seed_example_data(&mut store)?;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(&store)?;

    let result = run_app(&mut terminal, &mut app, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, store: &mut Store) -> Result<()> {
    loop {
        app.check_status_timeout();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll so status messages can time out without a keypress
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Ctrl-C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.should_quit = true;
            } else {
                handle_key(app, store, key.code, key.modifiers)?;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(
    app: &mut App,
    store: &mut Store,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Result<()> {
    match app.route {
        Route::Menu => match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => app.menu_move(1),
            KeyCode::Char('k') | KeyCode::Up => app.menu_move(-1),
            KeyCode::Enter => app.open_selected(store)?,
            _ => {}
        },
        Route::Notes => match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => app.note_move(1),
            KeyCode::Char('k') | KeyCode::Up => app.note_move(-1),
            KeyCode::Enter => app.open_selected(store)?,
            KeyCode::Char('n') => app.navigate(store, Route::NoteNew)?,
            KeyCode::Char('d') => app.delete_selected_note(store)?,
            KeyCode::Esc => app.back(store)?,
            _ => {}
        },
        Route::Categories => match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => app.category_move(1),
            KeyCode::Char('k') | KeyCode::Up => app.category_move(-1),
            KeyCode::Enter => app.open_selected(store)?,
            KeyCode::Esc => app.back(store)?,
            _ => {}
        },
        Route::NoteNew | Route::NoteEdit(_) => {
            handle_editor_key(app, store, code, modifiers)?;
        }
        Route::CategoryView(_) | Route::NotFound(_) => match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Esc => app.back(store)?,
            _ => {}
        },
    }
    Ok(())
}

fn handle_editor_key(
    app: &mut App,
    store: &mut Store,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Result<()> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('s') => app.save_editor(store)?,
            KeyCode::Char('d') => app.delete_editor_note(store)?,
            _ => {}
        }
        return Ok(());
    }

    let field = app.editor.as_ref().map(|e| e.field);
    let in_categories = field == Some(EditorField::Categories);

    match code {
        KeyCode::Esc => {
            app.editor = None;
            app.back(store)?;
        }
        KeyCode::Tab => app.editor_next_field(),
        KeyCode::BackTab => app.editor_prev_field(),
        KeyCode::Backspace => app.editor_backspace(),
        // Only the content field is multi-line
        KeyCode::Enter if field == Some(EditorField::Content) => app.editor_input('\n'),
        KeyCode::Down if in_categories => app.editor_move_category(1),
        KeyCode::Up if in_categories => app.editor_move_category(-1),
        KeyCode::Char(' ') if in_categories => app.editor_toggle_category(),
        KeyCode::Char(c) => app.editor_input(c),
        _ => {}
    }
    Ok(())
}


/// Initialize TUI logging (file-based, only if NOTELY_LOG is set)
///
/// Writing to stderr would fight with the alternate screen, so logs go to
/// a file in the data directory.
fn init_tui_logging(config: &Config) {
    let Ok(filter) = std::env::var("NOTELY_LOG") else {
        return;
    };

    let log_path = config.data_dir.join("notely.log");
    if let Ok(file) = std::fs::File::create(log_path) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
            .with_writer(std::sync::Arc::new(file))
            .with_ansi(false)
            .try_init();
    }
}
