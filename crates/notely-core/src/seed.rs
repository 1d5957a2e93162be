//! Example-data seeding
//!
//! Populates the store with a handful of categories and notes on first run.
//! Invoked explicitly by the hosting process; when any data already exists
//! the call is a no-op, so running it repeatedly never duplicates rows.

use tracing::info;

use crate::models::{Category, CategoryDraft, Note, NoteDraft};
use crate::storage::error::StorageResult;
use crate::store::Store;

/// What the seed initializer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty; example data was inserted
    Seeded,
    /// Data already existed; nothing was changed
    AlreadyPopulated,
}

/// Insert example categories and notes if the store is empty
pub fn seed_example_data(store: &mut Store) -> StorageResult<SeedOutcome> {
    if !store.is_empty()? {
        info!("data already present, skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    store.create::<Category>(CategoryDraft::new("Work"))?;
    store.create::<Category>(CategoryDraft::new("Personal"))?;
    store.create::<Category>(CategoryDraft::new("Shopping"))?;

    let mut work_note = NoteDraft::new("Work Note 1");
    work_note.content = "This is a note related to work.".to_string();
    store.create::<Note>(work_note)?;

    let mut personal_note = NoteDraft::new("Personal Note 1");
    personal_note.content = "This is a note related to personal matters.".to_string();
    personal_note.priority = 4;
    store.create::<Note>(personal_note)?;

    let mut shopping_note = NoteDraft::new("Shopping List");
    shopping_note.content = "This is a shopping list note.".to_string();
    shopping_note.priority = 2;
    store.create::<Note>(shopping_note)?;

    info!("seeded example data");
    Ok(SeedOutcome::Seeded)
}
