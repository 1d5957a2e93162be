//! Notely CLI
//!
//! Command-line interface for Notely. Running without a subcommand starts
//! the TUI; subcommands cover scripted note and category management.

use anyhow::Result;
use clap::{Parser, Subcommand};

use notely_core::{RowId, Store};

mod commands;
mod output;
mod tui;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "notely")]
#[command(about = "Notely - local-first notes and categories")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI interface
    Tui,
    /// Manage notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Insert example data if the store is empty
    Seed,
    /// Show store location and row counts
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Create a new note
    #[command(alias = "add")]
    Create {
        /// Note title
        title: String,
        /// Note content
        #[arg(short, long)]
        content: Option<String>,
        /// Category ids to file the note under
        #[arg(short = 'C', long = "category")]
        category: Vec<RowId>,
        /// Priority (1-5, default 3)
        #[arg(short, long)]
        priority: Option<i64>,
    },
    /// List all notes
    #[command(alias = "ls")]
    List,
    /// Show note details
    Show {
        /// Note id
        id: RowId,
    },
    /// Edit a note; only the given fields change
    Edit {
        /// Note id
        id: RowId,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New content
        #[arg(short, long)]
        content: Option<String>,
        /// Replace category references
        #[arg(short = 'C', long = "category")]
        category: Option<Vec<RowId>>,
        /// New priority (1-5)
        #[arg(short, long)]
        priority: Option<i64>,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note id
        id: RowId,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// Create a new category
    #[command(alias = "add")]
    Create {
        /// Category name
        name: String,
    },
    /// List all categories
    #[command(alias = "ls")]
    List,
    /// Show a category and its notes
    Show {
        /// Category id
        id: RowId,
    },
    /// Delete a category (notes are detached, not deleted)
    #[command(alias = "rm")]
    Delete {
        /// Category id
        id: RowId,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config doesn't need the store
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    // TUI is the default when no command is given; it initializes its own
    // file-based logging so the screen stays clean
    if matches!(&cli.command, Some(Commands::Tui) | None) {
        return tui::run();
    }

    init_logging();

    let mut store = Store::open()?;

    match cli.command.unwrap() {
        Commands::Tui => unreachable!(),           // Handled above
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Note { command } => handle_note_command(command, &mut store, &output),
        Commands::Category { command } => handle_category_command(command, &mut store, &output),
        Commands::Seed => commands::seed::run(&mut store, &output),
        Commands::Status => commands::status::show(&store, &output),
    }
}

fn handle_note_command(command: NoteCommands, store: &mut Store, output: &Output) -> Result<()> {
    match command {
        NoteCommands::Create {
            title,
            content,
            category,
            priority,
        } => commands::note::create(store, title, content, category, priority, output),
        NoteCommands::List => commands::note::list(store, output),
        NoteCommands::Show { id } => commands::note::show(store, id, output),
        NoteCommands::Edit {
            id,
            title,
            content,
            category,
            priority,
        } => commands::note::edit(store, id, title, content, category, priority, output),
        NoteCommands::Delete { id } => commands::note::delete(store, id, output),
    }
}

fn handle_category_command(
    command: CategoryCommands,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        CategoryCommands::Create { name } => commands::category::create(store, name, output),
        CategoryCommands::List => commands::category::list(store, output),
        CategoryCommands::Show { id } => commands::category::show(store, id, output),
        CategoryCommands::Delete { id } => commands::category::delete(store, id, output),
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Initialize stderr logging for non-TUI commands
///
/// Filter comes from NOTELY_LOG; defaults to warnings so normal command
/// output stays uncluttered.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("NOTELY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
