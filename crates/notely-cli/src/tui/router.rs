//! Route table
//!
//! Maps the app's URL surface to pages. Resolution is a pure function of
//! the requested path: the root redirects to the menu, `note/new` wins
//! over `note/:id`, and anything unrecognized falls through to the
//! not-found page.

use notely_core::RowId;

/// A resolved page destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/menu` - entry menu
    Menu,
    /// `/notes` - note list
    Notes,
    /// `/category` - category list
    Categories,
    /// `/note/new` - editor for a fresh note
    NoteNew,
    /// `/note/:id` - editor for an existing note
    NoteEdit(RowId),
    /// `/category/:id` - notes in one category
    CategoryView(RowId),
    /// Catch-all fallback; keeps the unmatched path for display
    NotFound(String),
}

impl Route {
    /// Resolve a path to a route
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            // Root redirects to the menu
            [] => Route::Menu,
            ["menu"] => Route::Menu,
            ["notes"] => Route::Notes,
            ["category"] => Route::Categories,
            ["note", "new"] => Route::NoteNew,
            ["note", id] => match id.parse::<RowId>() {
                Ok(id) => Route::NoteEdit(id),
                Err(_) => Route::NotFound(path.to_string()),
            },
            ["category", id] => match id.parse::<RowId>() {
                Ok(id) => Route::CategoryView(id),
                Err(_) => Route::NotFound(path.to_string()),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// The canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Menu => "/menu".to_string(),
            Route::Notes => "/notes".to_string(),
            Route::Categories => "/category".to_string(),
            Route::NoteNew => "/note/new".to_string(),
            Route::NoteEdit(id) => format!("/note/{}", id),
            Route::CategoryView(id) => format!("/category/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// The symbolic route name
    pub fn name(&self) -> &'static str {
        match self {
            Route::Menu => "menu",
            Route::Notes => "notes",
            Route::Categories => "category",
            Route::NoteNew => "note-new",
            Route::NoteEdit(_) => "note-edit",
            Route::CategoryView(_) => "category-view",
            Route::NotFound(_) => "not-found",
        }
    }
}
