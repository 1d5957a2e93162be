//! Unified storage interface
//!
//! The `Store` owns the SQLite connection and exposes the operation surface
//! the pages and commands work against: `all`, `create`, `find`, `update`
//! and `delete`, generic over any [`Table`] record type.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open()?;
//!
//! let note = store.create::<Note>(NoteDraft::new("Groceries"))?;
//! let notes = store.all::<Note>()?;
//! ```
//!
//! Multi-statement writes (note inserts and updates touch the junction
//! table) run inside a transaction so a rejected category reference never
//! leaves a partial row behind.

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::Config;
use crate::models::{Category, Note, RowId};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::rows::{self, Table};
use crate::storage::schema::{init_schema, needs_init};

/// SQLite-backed store for categories and notes
pub struct Store {
    conn: Connection,
    config: Config,
}

impl Store {
    /// Open the store at the configured location, creating the database
    /// and schema on first run
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Self::open_with_config(config)
    }

    /// Open the store with a specific configuration
    pub fn open_with_config(config: Config) -> Result<Self> {
        let path = config.sqlite_path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open SQLite database at {:?}", path))?;
        Self::from_connection(conn, config)
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?, Config::default())
    }

    fn from_connection(conn: Connection, config: Config) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        if needs_init(&conn) {
            init_schema(&conn).context("Failed to initialize SQLite schema")?;
        }

        Ok(Self { conn, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True when no categories or notes exist yet
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.count::<Category>()? == 0 && self.count::<Note>()? == 0)
    }

    // ==================== Row Operations ====================

    /// All rows of a record type, in insertion order
    pub fn all<T: Table>(&self) -> StorageResult<Vec<T>> {
        T::select_all(&self.conn)
    }

    /// Insert a new row and return the stored record with its assigned id
    pub fn create<T: Table>(&mut self, draft: T::Draft) -> StorageResult<T> {
        let tx = self.conn.transaction()?;
        let id = T::insert(&tx, &draft)?;
        let record = T::select(&tx, id)?.ok_or(StorageError::RowNotFound {
            table: T::NAME,
            id,
        })?;
        tx.commit()?;
        Ok(record)
    }

    /// Lookup by id
    pub fn find<T: Table>(&self, id: RowId) -> StorageResult<Option<T>> {
        T::select(&self.conn, id)
    }

    /// Apply a partial update and return the stored record
    ///
    /// Fails with [`StorageError::RowNotFound`] when the id doesn't exist.
    pub fn update<T: Table>(&mut self, id: RowId, patch: T::Patch) -> StorageResult<T> {
        let tx = self.conn.transaction()?;
        T::apply(&tx, id, &patch)?;
        let record = T::select(&tx, id)?.ok_or(StorageError::RowNotFound {
            table: T::NAME,
            id,
        })?;
        tx.commit()?;
        Ok(record)
    }

    /// Delete by id
    ///
    /// Fails with [`StorageError::RowNotFound`] when the id doesn't exist;
    /// the store is left untouched in that case.
    pub fn delete<T: Table>(&mut self, id: RowId) -> StorageResult<()> {
        let tx = self.conn.transaction()?;
        T::remove(&tx, id)?;
        tx.commit()?;
        Ok(())
    }

    /// Number of rows of a record type
    pub fn count<T: Table>(&self) -> StorageResult<i64> {
        T::count(&self.conn)
    }

    // ==================== Queries ====================

    /// Notes referencing the given category
    pub fn notes_in_category(&self, category_id: RowId) -> StorageResult<Vec<Note>> {
        rows::notes_in_category(&self.conn, category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryDraft, NoteDraft, NotePatch};
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
        }
    }

    #[test]
    fn test_open_creates_database() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let store = Store::open_with_config(config.clone()).unwrap();
        assert!(config.sqlite_path().exists());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_create_and_find_note() {
        let mut store = Store::open_in_memory().unwrap();

        let mut draft = NoteDraft::new("Test Note");
        draft.content = "This is the body".to_string();
        let note: Note = store.create(draft).unwrap();

        let retrieved: Note = store.find(note.id).unwrap().unwrap();
        assert_eq!(retrieved, note);
        assert_eq!(retrieved.title, "Test Note");
        assert_eq!(retrieved.content, "This is the body");
        assert_eq!(retrieved.priority, 3);
    }

    #[test]
    fn test_update_note() {
        let mut store = Store::open_in_memory().unwrap();

        let note: Note = store.create(NoteDraft::new("Test Note")).unwrap();

        let patch = NotePatch {
            title: Some("Updated Title".to_string()),
            content: Some("Updated body".to_string()),
            ..Default::default()
        };
        let updated: Note = store.update(note.id, patch).unwrap();

        assert_eq!(updated.id, note.id);
        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.content, "Updated body");
    }

    #[test]
    fn test_delete_note() {
        let mut store = Store::open_in_memory().unwrap();

        let note: Note = store.create(NoteDraft::new("Test Note")).unwrap();
        assert_eq!(store.count::<Note>().unwrap(), 1);

        store.delete::<Note>(note.id).unwrap();
        assert_eq!(store.count::<Note>().unwrap(), 0);
        assert!(store.find::<Note>(note.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_note_leaves_store_intact() {
        let mut store = Store::open_in_memory().unwrap();
        store.create::<Note>(NoteDraft::new("Keep me")).unwrap();

        let err = store.delete::<Note>(999).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.count::<Note>().unwrap(), 1);
    }

    #[test]
    fn test_rejected_category_reference_rolls_back() {
        let mut store = Store::open_in_memory().unwrap();

        let mut draft = NoteDraft::new("Orphan");
        draft.categories = vec![123];
        let err = store.create::<Note>(draft).unwrap_err();
        assert!(matches!(err, StorageError::UnknownCategory { id: 123 }));
        assert_eq!(store.count::<Note>().unwrap(), 0);
    }

    #[test]
    fn test_category_crud() {
        let mut store = Store::open_in_memory().unwrap();

        let work: Category = store.create(CategoryDraft::new("Work")).unwrap();
        assert_eq!(work.name, "Work");

        let all: Vec<Category> = store.all().unwrap();
        assert_eq!(all.len(), 1);

        store.delete::<Category>(work.id).unwrap();
        assert!(store.find::<Category>(work.id).unwrap().is_none());
    }

    #[test]
    fn test_notes_in_category() {
        let mut store = Store::open_in_memory().unwrap();

        let work: Category = store.create(CategoryDraft::new("Work")).unwrap();

        let mut draft = NoteDraft::new("Standup");
        draft.categories = vec![work.id];
        store.create::<Note>(draft).unwrap();
        store.create::<Note>(NoteDraft::new("Unfiled")).unwrap();

        let notes = store.notes_in_category(work.id).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Standup");
    }

    #[test]
    fn test_data_persists_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = Store::open_with_config(config.clone()).unwrap();
            let mut draft = NoteDraft::new("Persistent Note");
            draft.content = "Body content".to_string();
            store.create::<Note>(draft).unwrap();
        }

        {
            let store = Store::open_with_config(config).unwrap();
            let notes: Vec<Note> = store.all().unwrap();
            assert_eq!(notes.len(), 1);
            assert_eq!(notes[0].title, "Persistent Note");
            assert_eq!(notes[0].content, "Body content");
        }
    }
}
