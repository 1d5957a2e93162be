//! SQLite-backed row storage
//!
//! - `schema`: table definitions and version bootstrap
//! - `rows`: the `Table` trait and per-record implementations
//! - `error`: typed storage errors

pub mod error;
pub mod rows;
pub mod schema;

pub use error::{StorageError, StorageResult};
pub use rows::Table;
