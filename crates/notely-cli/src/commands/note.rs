//! Note command handlers

use anyhow::{Context, Result};
use notely_core::{Category, Note, NoteDraft, NotePatch, RowId, Store};

use crate::output::Output;

/// List all notes
pub fn list(store: &Store, output: &Output) -> Result<()> {
    let notes: Vec<Note> = store.all().context("Failed to list notes")?;
    output.print_notes(&notes);
    Ok(())
}

/// Show a single note
pub fn show(store: &Store, id: RowId, output: &Output) -> Result<()> {
    let note = store
        .find::<Note>(id)?
        .ok_or_else(|| anyhow::anyhow!("Note not found: {}", id))?;
    let categories: Vec<Category> = store.all()?;
    output.print_note(&note, &categories);
    Ok(())
}

/// Create a new note
pub fn create(
    store: &mut Store,
    title: String,
    content: Option<String>,
    categories: Vec<RowId>,
    priority: Option<i64>,
    output: &Output,
) -> Result<()> {
    let mut draft = NoteDraft::new(title);
    if let Some(content) = content {
        draft.content = content;
    }
    draft.categories = categories;
    if let Some(priority) = priority {
        draft.priority = priority;
    }

    let note = store
        .create::<Note>(draft)
        .context("Failed to create note")?;

    output.success(&format!("Created note {} ({})", note.id, note.title));
    Ok(())
}

/// Edit an existing note; only the provided fields change
pub fn edit(
    store: &mut Store,
    id: RowId,
    title: Option<String>,
    content: Option<String>,
    categories: Option<Vec<RowId>>,
    priority: Option<i64>,
    output: &Output,
) -> Result<()> {
    let patch = NotePatch {
        title,
        content,
        categories,
        priority,
    };

    let note = store
        .update::<Note>(id, patch)
        .with_context(|| format!("Failed to update note {}", id))?;

    output.success(&format!("Updated note {} ({})", note.id, note.title));
    Ok(())
}

/// Delete a note
pub fn delete(store: &mut Store, id: RowId, output: &Output) -> Result<()> {
    store
        .delete::<Note>(id)
        .with_context(|| format!("Failed to delete note {}", id))?;

    output.success(&format!("Deleted note {}", id));
    Ok(())
}
