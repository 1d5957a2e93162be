//! Category command handlers

use anyhow::{Context, Result};
use notely_core::{Category, CategoryDraft, RowId, Store};

use crate::output::Output;

/// List all categories
pub fn list(store: &Store, output: &Output) -> Result<()> {
    let categories: Vec<Category> = store.all().context("Failed to list categories")?;
    output.print_categories(&categories);
    Ok(())
}

/// Show a category and the notes filed under it
pub fn show(store: &Store, id: RowId, output: &Output) -> Result<()> {
    let category = store
        .find::<Category>(id)?
        .ok_or_else(|| anyhow::anyhow!("Category not found: {}", id))?;

    output.print_category(&category);

    let notes = store.notes_in_category(category.id)?;
    if !notes.is_empty() {
        output.message("");
        output.print_notes(&notes);
    }
    Ok(())
}

/// Create a new category
pub fn create(store: &mut Store, name: String, output: &Output) -> Result<()> {
    let category = store
        .create::<Category>(CategoryDraft::new(name))
        .context("Failed to create category")?;

    output.success(&format!(
        "Created category {} ({})",
        category.id, category.name
    ));
    Ok(())
}

/// Delete a category; notes referencing it are detached, not deleted
pub fn delete(store: &mut Store, id: RowId, output: &Output) -> Result<()> {
    store
        .delete::<Category>(id)
        .with_context(|| format!("Failed to delete category {}", id))?;

    output.success(&format!("Deleted category {}", id));
    Ok(())
}
