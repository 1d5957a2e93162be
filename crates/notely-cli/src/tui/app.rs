//! Application state and logic
//!
//! The `App` holds the current route, the data backing each page, and the
//! note editor state. All store operations run synchronously from key
//! handlers; navigation goes through the route table.

use std::time::{Duration, Instant};

use anyhow::Result;
use notely_core::{Category, Note, NoteDraft, NotePatch, RowId, Store, DEFAULT_PRIORITY};

use super::router::Route;

/// How long status notifications stay on screen
const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// Menu page entries, in display order
pub const MENU_ITEMS: &[(&str, Route)] = &[
    ("View Notes", Route::Notes),
    ("View Categories", Route::Categories),
];

/// Which editor field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Content,
    Categories,
    Priority,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            EditorField::Title => EditorField::Content,
            EditorField::Content => EditorField::Categories,
            EditorField::Categories => EditorField::Priority,
            EditorField::Priority => EditorField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditorField::Title => EditorField::Priority,
            EditorField::Content => EditorField::Title,
            EditorField::Categories => EditorField::Content,
            EditorField::Priority => EditorField::Categories,
        }
    }
}

/// Note editor state, shared by the new-note and edit-note pages
#[derive(Debug, Clone)]
pub struct Editor {
    /// `None` while composing a fresh note
    pub note_id: Option<RowId>,
    pub title: String,
    pub content: String,
    pub selected_categories: Vec<RowId>,
    pub priority: i64,
    pub field: EditorField,
    /// Cursor into the category toggle list
    pub category_cursor: usize,
}

impl Editor {
    fn new() -> Self {
        Self {
            note_id: None,
            title: String::new(),
            content: String::new(),
            selected_categories: Vec::new(),
            priority: DEFAULT_PRIORITY,
            field: EditorField::Title,
            category_cursor: 0,
        }
    }

    fn from_note(note: &Note) -> Self {
        Self {
            note_id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            selected_categories: note.categories.clone(),
            priority: note.priority,
            field: EditorField::Title,
            category_cursor: 0,
        }
    }

    fn toggle_category(&mut self, id: RowId) {
        if let Some(pos) = self.selected_categories.iter().position(|&c| c == id) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(id);
        }
    }
}

/// Application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// Current page
    pub route: Route,
    /// Visited routes, for back navigation
    history: Vec<Route>,
    /// Selected entry on the menu page
    pub menu_index: usize,
    /// Notes backing the note list page
    pub notes: Vec<Note>,
    pub note_index: usize,
    /// Categories backing the category list page and editor toggles
    pub categories: Vec<Category>,
    pub category_index: usize,
    /// Category shown by the category view page
    pub viewed_category: Option<Category>,
    pub category_notes: Vec<Note>,
    /// Editor state while on a note editor page
    pub editor: Option<Editor>,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    status_message_time: Option<Instant>,
}

impl App {
    /// Create a new app, starting at the root path
    pub fn new(store: &Store) -> Result<Self> {
        let mut app = Self {
            should_quit: false,
            route: Route::parse("/"),
            history: Vec::new(),
            menu_index: 0,
            notes: Vec::new(),
            note_index: 0,
            categories: Vec::new(),
            category_index: 0,
            viewed_category: None,
            category_notes: Vec::new(),
            editor: None,
            status_message: None,
            status_message_time: None,
        };
        app.refresh(store)?;
        Ok(app)
    }

    /// Reload the lists backing the pages
    pub fn refresh(&mut self, store: &Store) -> Result<()> {
        self.notes = store.all()?;
        self.categories = store.all()?;
        self.note_index = self.note_index.min(self.notes.len().saturating_sub(1));
        self.category_index = self
            .category_index
            .min(self.categories.len().saturating_sub(1));
        Ok(())
    }

    // ==================== Navigation ====================

    /// Navigate to a route, loading the data its page needs
    pub fn navigate(&mut self, store: &Store, route: Route) -> Result<()> {
        if !self.load(store, &route)? {
            return Ok(());
        }
        let from = std::mem::replace(&mut self.route, route);
        self.history.push(from);
        Ok(())
    }

    /// Navigate by path, through the route table
    pub fn navigate_path(&mut self, store: &Store, path: &str) -> Result<()> {
        self.navigate(store, Route::parse(path))
    }

    /// Return to the previously visited page
    pub fn back(&mut self, store: &Store) -> Result<()> {
        if let Some(prev) = self.history.pop() {
            self.load(store, &prev)?;
            self.route = prev;
        }
        Ok(())
    }

    /// Prepare page data; returns false when the target record is missing
    fn load(&mut self, store: &Store, route: &Route) -> Result<bool> {
        match route {
            Route::Menu | Route::NotFound(_) => {}
            Route::Notes => self.refresh(store)?,
            Route::Categories => self.refresh(store)?,
            Route::NoteNew => {
                self.refresh(store)?;
                self.editor = Some(Editor::new());
            }
            Route::NoteEdit(id) => match store.find::<Note>(*id)? {
                Some(note) => {
                    self.refresh(store)?;
                    self.editor = Some(Editor::from_note(&note));
                }
                None => {
                    self.set_error(format!("Note not found: {}", id));
                    return Ok(false);
                }
            },
            Route::CategoryView(id) => match store.find::<Category>(*id)? {
                Some(category) => {
                    self.category_notes = store.notes_in_category(category.id)?;
                    self.viewed_category = Some(category);
                }
                None => {
                    self.set_error(format!("Category not found: {}", id));
                    return Ok(false);
                }
            },
        }
        Ok(true)
    }

    // ==================== Selection ====================

    pub fn menu_move(&mut self, delta: isize) {
        self.menu_index = step(self.menu_index, delta, MENU_ITEMS.len());
    }

    pub fn note_move(&mut self, delta: isize) {
        self.note_index = step(self.note_index, delta, self.notes.len());
    }

    pub fn category_move(&mut self, delta: isize) {
        self.category_index = step(self.category_index, delta, self.categories.len());
    }

    /// Open the entry selected on the current list page
    pub fn open_selected(&mut self, store: &Store) -> Result<()> {
        match self.route {
            Route::Menu => {
                let (_, route) = &MENU_ITEMS[self.menu_index];
                self.navigate(store, route.clone())
            }
            Route::Notes => match self.notes.get(self.note_index) {
                Some(note) => self.navigate(store, Route::NoteEdit(note.id)),
                None => Ok(()),
            },
            Route::Categories => match self.categories.get(self.category_index) {
                Some(category) => self.navigate(store, Route::CategoryView(category.id)),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    // ==================== Editor ====================

    pub fn editor_input(&mut self, c: char) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        match editor.field {
            EditorField::Title => editor.title.push(c),
            EditorField::Content => editor.content.push(c),
            EditorField::Priority => {
                if let Some(p) = c.to_digit(10) {
                    if (1..=5).contains(&p) {
                        editor.priority = p as i64;
                    }
                }
            }
            EditorField::Categories => {}
        }
    }

    pub fn editor_backspace(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        match editor.field {
            EditorField::Title => {
                editor.title.pop();
            }
            EditorField::Content => {
                editor.content.pop();
            }
            _ => {}
        }
    }

    pub fn editor_next_field(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.field = editor.field.next();
        }
    }

    pub fn editor_prev_field(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.field = editor.field.prev();
        }
    }

    pub fn editor_move_category(&mut self, delta: isize) {
        let len = self.categories.len();
        if let Some(editor) = self.editor.as_mut() {
            editor.category_cursor = step(editor.category_cursor, delta, len);
        }
    }

    pub fn editor_toggle_category(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if let Some(category) = self.categories.get(editor.category_cursor) {
            editor.toggle_category(category.id);
        }
    }

    /// Save the editor: create a fresh note or update the existing one,
    /// then return to the note list with a status notification
    pub fn save_editor(&mut self, store: &mut Store) -> Result<()> {
        let Some(editor) = self.editor.as_ref() else {
            return Ok(());
        };

        let result = match editor.note_id {
            Some(id) => {
                let patch = NotePatch {
                    title: Some(editor.title.clone()),
                    content: Some(editor.content.clone()),
                    categories: Some(editor.selected_categories.clone()),
                    priority: Some(editor.priority),
                };
                store
                    .update::<Note>(id, patch)
                    .map(|_| "Note updated successfully!")
            }
            None => {
                let mut draft = NoteDraft::new(editor.title.clone());
                draft.content = editor.content.clone();
                draft.categories = editor.selected_categories.clone();
                draft.priority = editor.priority;
                store.create::<Note>(draft).map(|_| "New note created!")
            }
        };

        match result {
            Ok(message) => {
                self.editor = None;
                self.navigate(store, Route::Notes)?;
                self.set_status(message.to_string());
            }
            Err(e) if e.is_not_found() => self.set_error(e.to_string()),
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Delete the note open in the editor
    pub fn delete_editor_note(&mut self, store: &mut Store) -> Result<()> {
        let Some(id) = self.editor.as_ref().and_then(|e| e.note_id) else {
            return Ok(());
        };
        self.delete_note(store, id)
    }

    /// Delete the note selected on the note list page
    pub fn delete_selected_note(&mut self, store: &mut Store) -> Result<()> {
        let Some(id) = self.notes.get(self.note_index).map(|n| n.id) else {
            return Ok(());
        };
        self.delete_note(store, id)
    }

    fn delete_note(&mut self, store: &mut Store, id: RowId) -> Result<()> {
        match store.delete::<Note>(id) {
            Ok(()) => {
                self.editor = None;
                self.navigate(store, Route::Notes)?;
                self.set_status("Note deleted successfully!".to_string());
            }
            Err(e) if e.is_not_found() => self.set_error(e.to_string()),
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    // ==================== Status messages ====================

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_time = Some(Instant::now());
    }

    pub fn set_error(&mut self, message: String) {
        self.set_status(format!("Error: {}", message));
    }

    /// Dismiss the status message once it has been shown long enough
    pub fn check_status_timeout(&mut self) {
        if let Some(set_at) = self.status_message_time {
            if set_at.elapsed() >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}

/// Move an index by delta, clamped to `0..len`
fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = index as isize + delta;
    moved.clamp(0, len as isize - 1) as usize
}
