//! Generic row access
//!
//! The `Table` trait is the typed replacement for the duck-typed row base
//! the pages used to share: one interface parameterized over the record
//! type, implemented against the SQLite backend by `Category` and `Note`.
//!
//! All functions take a plain `Connection`; the `Store` decides which calls
//! run inside a transaction.

use rusqlite::{params, Connection};

use crate::models::{Category, CategoryDraft, CategoryPatch, Note, NoteDraft, NotePatch, RowId};
use crate::storage::error::{StorageError, StorageResult};

/// A typed record stored in its own table
pub trait Table: Sized {
    /// Table name in the SQLite schema
    const NAME: &'static str;

    /// Caller-supplied fields for `create`
    type Draft;
    /// Optional per-field updates for `update`
    type Patch;

    /// Insert a new row; the store assigns the id
    fn insert(conn: &Connection, draft: &Self::Draft) -> StorageResult<RowId>;

    /// All rows, ordered by id (insertion order)
    fn select_all(conn: &Connection) -> StorageResult<Vec<Self>>;

    /// Lookup by id
    fn select(conn: &Connection, id: RowId) -> StorageResult<Option<Self>>;

    /// Apply a partial update; fails with `RowNotFound` for a missing id
    fn apply(conn: &Connection, id: RowId, patch: &Self::Patch) -> StorageResult<()>;

    /// Delete by id; fails with `RowNotFound` for a missing id
    fn remove(conn: &Connection, id: RowId) -> StorageResult<()> {
        let affected = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?", Self::NAME),
            params![id],
        )?;
        if affected == 0 {
            return Err(StorageError::RowNotFound {
                table: Self::NAME,
                id,
            });
        }
        Ok(())
    }

    /// Number of rows in the table
    fn count(conn: &Connection) -> StorageResult<i64> {
        let count = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", Self::NAME),
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

impl Table for Category {
    const NAME: &'static str = "categories";

    type Draft = CategoryDraft;
    type Patch = CategoryPatch;

    fn insert(conn: &Connection, draft: &Self::Draft) -> StorageResult<RowId> {
        conn.execute(
            "INSERT INTO categories (name) VALUES (?)",
            params![draft.name],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn select_all(conn: &Connection) -> StorageResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY id")?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    fn select(conn: &Connection, id: RowId) -> StorageResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM categories WHERE id = ?")?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(Category {
                id: row.get(0)?,
                name: row.get(1)?,
            }))
        } else {
            Ok(None)
        }
    }

    fn apply(conn: &Connection, id: RowId, patch: &Self::Patch) -> StorageResult<()> {
        let Some(current) = Self::select(conn, id)? else {
            return Err(StorageError::RowNotFound {
                table: Self::NAME,
                id,
            });
        };

        let name = patch.name.as_deref().unwrap_or(&current.name);
        conn.execute(
            "UPDATE categories SET name = ?1 WHERE id = ?2",
            params![name, id],
        )?;
        Ok(())
    }
}

impl Table for Note {
    const NAME: &'static str = "notes";

    type Draft = NoteDraft;
    type Patch = NotePatch;

    fn insert(conn: &Connection, draft: &Self::Draft) -> StorageResult<RowId> {
        ensure_categories_exist(conn, &draft.categories)?;

        conn.execute(
            "INSERT INTO notes (title, content, priority) VALUES (?1, ?2, ?3)",
            params![draft.title, draft.content, draft.priority],
        )?;
        let id = conn.last_insert_rowid();

        attach_categories(conn, id, &draft.categories)?;
        Ok(id)
    }

    fn select_all(conn: &Connection) -> StorageResult<Vec<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, title, content, priority FROM notes ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<Result<Vec<(RowId, String, String, i64)>, _>>()?;

        let mut notes = Vec::with_capacity(rows.len());
        for (id, title, content, priority) in rows {
            notes.push(Note {
                id,
                title,
                content,
                categories: categories_for_note(conn, id)?,
                priority,
            });
        }
        Ok(notes)
    }

    fn select(conn: &Connection, id: RowId) -> StorageResult<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, title, content, priority FROM notes WHERE id = ?")?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(Note {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
                categories: categories_for_note(conn, id)?,
                priority: row.get(3)?,
            }))
        } else {
            Ok(None)
        }
    }

    fn apply(conn: &Connection, id: RowId, patch: &Self::Patch) -> StorageResult<()> {
        let Some(current) = Self::select(conn, id)? else {
            return Err(StorageError::RowNotFound {
                table: Self::NAME,
                id,
            });
        };

        let title = patch.title.as_deref().unwrap_or(&current.title);
        let content = patch.content.as_deref().unwrap_or(&current.content);
        let priority = patch.priority.unwrap_or(current.priority);

        conn.execute(
            "UPDATE notes SET title = ?1, content = ?2, priority = ?3 WHERE id = ?4",
            params![title, content, priority, id],
        )?;

        // Category references are replaced only when the patch sets them
        if let Some(categories) = &patch.categories {
            ensure_categories_exist(conn, categories)?;
            conn.execute("DELETE FROM note_categories WHERE note_id = ?", params![id])?;
            attach_categories(conn, id, categories)?;
        }

        Ok(())
    }
}

/// Notes referencing the given category, ordered by note id
pub fn notes_in_category(conn: &Connection, category_id: RowId) -> StorageResult<Vec<Note>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT n.id, n.title, n.content, n.priority
        FROM notes n
        JOIN note_categories nc ON n.id = nc.note_id
        WHERE nc.category_id = ?
        ORDER BY n.id
        "#,
    )?;

    let rows = stmt
        .query_map(params![category_id], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })?
        .collect::<Result<Vec<(RowId, String, String, i64)>, _>>()?;

    let mut notes = Vec::with_capacity(rows.len());
    for (id, title, content, priority) in rows {
        notes.push(Note {
            id,
            title,
            content,
            categories: categories_for_note(conn, id)?,
            priority,
        });
    }
    Ok(notes)
}

fn categories_for_note(conn: &Connection, note_id: RowId) -> StorageResult<Vec<RowId>> {
    let mut stmt = conn.prepare(
        "SELECT category_id FROM note_categories WHERE note_id = ? ORDER BY category_id",
    )?;
    let ids = stmt
        .query_map(params![note_id], |row| row.get(0))?
        .collect::<Result<Vec<RowId>, _>>()?;
    Ok(ids)
}

/// Reject category references that don't resolve to an existing row
fn ensure_categories_exist(conn: &Connection, categories: &[RowId]) -> StorageResult<()> {
    let mut stmt = conn.prepare("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?)")?;
    for &id in categories {
        let exists: bool = stmt.query_row(params![id], |row| row.get(0))?;
        if !exists {
            return Err(StorageError::UnknownCategory { id });
        }
    }
    Ok(())
}

fn attach_categories(conn: &Connection, note_id: RowId, categories: &[RowId]) -> StorageResult<()> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO note_categories (note_id, category_id) VALUES (?1, ?2)",
    )?;
    for &category_id in categories {
        stmt.execute(params![note_id, category_id])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::schema::init_schema;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_category_insert_assigns_ids() {
        let conn = test_conn();
        let a = Category::insert(&conn, &CategoryDraft::new("Work")).unwrap();
        let b = Category::insert(&conn, &CategoryDraft::new("Personal")).unwrap();
        assert_ne!(a, b);

        let all = Category::select_all(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Work");
        assert_eq!(all[1].name, "Personal");
    }

    #[test]
    fn test_note_insert_with_categories() {
        let conn = test_conn();
        let work = Category::insert(&conn, &CategoryDraft::new("Work")).unwrap();

        let mut draft = NoteDraft::new("Meeting notes");
        draft.content = "Agenda".to_string();
        draft.categories = vec![work];
        draft.priority = 5;

        let id = Note::insert(&conn, &draft).unwrap();
        let note = Note::select(&conn, id).unwrap().unwrap();
        assert_eq!(note.title, "Meeting notes");
        assert_eq!(note.content, "Agenda");
        assert_eq!(note.categories, vec![work]);
        assert_eq!(note.priority, 5);
    }

    #[test]
    fn test_note_insert_rejects_unknown_category() {
        let conn = test_conn();

        let mut draft = NoteDraft::new("Orphan");
        draft.categories = vec![99];

        let err = Note::insert(&conn, &draft).unwrap_err();
        assert!(matches!(err, StorageError::UnknownCategory { id: 99 }));
        // The note row must not be left behind
        assert_eq!(Note::count(&conn).unwrap(), 0);
    }

    #[test]
    fn test_note_apply_partial_patch() {
        let conn = test_conn();
        let work = Category::insert(&conn, &CategoryDraft::new("Work")).unwrap();

        let mut draft = NoteDraft::new("Original");
        draft.content = "Original content".to_string();
        draft.categories = vec![work];
        let id = Note::insert(&conn, &draft).unwrap();

        let patch = NotePatch {
            title: Some("Changed".to_string()),
            ..Default::default()
        };
        Note::apply(&conn, id, &patch).unwrap();

        let note = Note::select(&conn, id).unwrap().unwrap();
        assert_eq!(note.title, "Changed");
        assert_eq!(note.content, "Original content");
        assert_eq!(note.categories, vec![work]);
        assert_eq!(note.priority, 3);
    }

    #[test]
    fn test_note_apply_replaces_categories_when_set() {
        let conn = test_conn();
        let work = Category::insert(&conn, &CategoryDraft::new("Work")).unwrap();
        let home = Category::insert(&conn, &CategoryDraft::new("Home")).unwrap();

        let mut draft = NoteDraft::new("Note");
        draft.categories = vec![work];
        let id = Note::insert(&conn, &draft).unwrap();

        let patch = NotePatch {
            categories: Some(vec![home]),
            ..Default::default()
        };
        Note::apply(&conn, id, &patch).unwrap();

        let note = Note::select(&conn, id).unwrap().unwrap();
        assert_eq!(note.categories, vec![home]);
    }

    #[test]
    fn test_apply_missing_id_fails() {
        let conn = test_conn();
        let err = Note::apply(&conn, 42, &NotePatch::default()).unwrap_err();
        assert!(matches!(
            err,
            StorageError::RowNotFound { table: "notes", id: 42 }
        ));
    }

    #[test]
    fn test_remove_missing_id_fails() {
        let conn = test_conn();
        let err = Category::remove(&conn, 7).unwrap_err();
        assert!(matches!(
            err,
            StorageError::RowNotFound {
                table: "categories",
                id: 7
            }
        ));
    }

    #[test]
    fn test_category_delete_detaches_notes() {
        let conn = test_conn();
        let work = Category::insert(&conn, &CategoryDraft::new("Work")).unwrap();

        let mut draft = NoteDraft::new("Note");
        draft.categories = vec![work];
        let id = Note::insert(&conn, &draft).unwrap();

        Category::remove(&conn, work).unwrap();

        let note = Note::select(&conn, id).unwrap().unwrap();
        assert!(note.categories.is_empty());
    }

    #[test]
    fn test_notes_in_category() {
        let conn = test_conn();
        let work = Category::insert(&conn, &CategoryDraft::new("Work")).unwrap();
        let home = Category::insert(&conn, &CategoryDraft::new("Home")).unwrap();

        let mut a = NoteDraft::new("Work note");
        a.categories = vec![work];
        Note::insert(&conn, &a).unwrap();

        let mut b = NoteDraft::new("Home note");
        b.categories = vec![home];
        Note::insert(&conn, &b).unwrap();

        let notes = notes_in_category(&conn, work).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Work note");
    }
}
