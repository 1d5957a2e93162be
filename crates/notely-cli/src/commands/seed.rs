//! Seed command handler

use anyhow::Result;
use notely_core::{seed_example_data, SeedOutcome, Store};

use crate::output::Output;

/// Run the example-data seeder
pub fn run(store: &mut Store, output: &Output) -> Result<()> {
    match seed_example_data(store)? {
        SeedOutcome::Seeded => output.success("Example data created"),
        SeedOutcome::AlreadyPopulated => {
            output.message("Data already exists, skipping creation.")
        }
    }
    Ok(())
}
