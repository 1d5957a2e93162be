//! Notely Core Library
//!
//! This crate provides the core functionality for Notely, a local-first
//! note-taking application organized around categories and notes.
//!
//! # Architecture
//!
//! Records live in an embedded SQLite database. The [`Table`] trait
//! defines generic row access (`all`, `create`, `find`, `update`,
//! `delete`) parameterized over the record type; [`Store`] is the handle
//! the UI layers work against.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open()?;
//! seed_example_data(&mut store)?;
//!
//! let mut draft = NoteDraft::new("My New Note");
//! draft.priority = 5;
//! let note = store.create::<Note>(draft)?;
//!
//! let notes = store.all::<Note>()?;
//! ```
//!
//! # Modules
//!
//! - `store`: unified storage interface (main entry point)
//! - `models`: record shapes, drafts and patches
//! - `storage`: SQLite schema and row access
//! - `seed`: idempotent example-data bootstrap
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::{
    Category, CategoryDraft, CategoryPatch, Note, NoteDraft, NotePatch, RowId, DEFAULT_PRIORITY,
};
pub use seed::{seed_example_data, SeedOutcome};
pub use storage::{StorageError, StorageResult, Table};
pub use store::Store;
