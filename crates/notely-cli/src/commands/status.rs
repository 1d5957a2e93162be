//! Status command handler

use anyhow::Result;
use notely_core::{Category, Note, Store};

use crate::output::{Output, OutputFormat};

/// Show store location and row counts
pub fn show(store: &Store, output: &Output) -> Result<()> {
    let categories = store.count::<Category>()?;
    let notes = store.count::<Note>()?;
    let db_path = store.config().sqlite_path();

    match output.format {
        OutputFormat::Human => {
            println!("Database:   {}", db_path.display());
            println!("Categories: {}", categories);
            println!("Notes:      {}", notes);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "database": db_path,
                    "categories": categories,
                    "notes": notes,
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{} {}", categories, notes);
        }
    }

    Ok(())
}
