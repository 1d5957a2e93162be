//! Data models for Notely
//!
//! Defines the core record shapes, `Category` and `Note`, together with the
//! draft types used for creation and the patch types used for partial
//! updates. Ids are assigned by the store on insert.

use serde::{Deserialize, Serialize};

/// Store-assigned record identifier (SQLite rowid)
pub type RowId = i64;

/// Default priority assigned to notes that don't specify one
pub const DEFAULT_PRIORITY: i64 = 3;

/// A note category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier
    pub id: RowId,
    /// Short display label (uniqueness is not enforced)
    pub name: String,
}

/// A note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier
    pub id: RowId,
    /// Note title
    pub title: String,
    /// Note body content
    pub content: String,
    /// Ids of the categories this note belongs to
    pub categories: Vec<RowId>,
    /// Priority on a small discrete scale (1 = lowest, 5 = highest)
    pub priority: i64,
}

/// Fields for creating a category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Fields for creating a note
///
/// `priority` defaults to 3 and `categories` to empty; callers set only
/// what they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub categories: Vec<RowId>,
    pub priority: i64,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            categories: Vec::new(),
            priority: DEFAULT_PRIORITY,
        }
    }
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self::new("")
    }
}

/// Partial update for a category; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
}

/// Partial update for a note; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub categories: Option<Vec<RowId>>,
    pub priority: Option<i64>,
}
