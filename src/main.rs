//! # devtask - Developer Task Tracking CLI
//!
//! A small, file-backed task tracker for the terminal: tasks carry a type
//! (feature/bug/refactor), a priority, free-form tags, and move through a
//! pending -> in-progress -> completed workflow.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! devtask add "Fix login bug" --type bug --priority high --tags auth
//!
//! # See the workflow buckets
//! devtask list
//!
//! # Move it along (id prefixes are fine)
//! devtask status 3f2a in-progress
//! devtask status 3f2a completed
//!
//! # Aggregate counts
//! devtask stats
//! ```
//!
//! Data lives in a single JSON file, `~/.devtask/tasks.json` by default, or
//! wherever `--db` points. The file is plain JSON and safe to keep under
//! source control.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod fields;
pub mod query;
pub mod storage;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use storage::FileStorage;
use store::TaskStore;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    // Completions need no task file at all.
    if let Commands::Completions { shell } = &cli.command {
        cmd_completions(*shell);
        return;
    }

    let db_path = cli.db.clone().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let dir = PathBuf::from(home).join(".devtask");
        if let Err(e) = std::fs::create_dir_all(&dir) {
            eprintln!("Failed to create {}: {}", dir.display(), e);
            std::process::exit(1);
        }
        dir.join("tasks.json")
    });

    let mut store = TaskStore::new(FileStorage::new(db_path));
    store.load();

    match cli.command {
        Commands::Completions { .. } => unreachable!("handled above"),

        Commands::Add { title, kind, priority, deadline, estimate, tags, desc } =>
            cmd_add(&mut store, title, kind, priority, deadline, estimate, tags, desc),

        Commands::Status { id, status } => cmd_status(&mut store, &id, status),

        Commands::Delete { id } => cmd_delete(&mut store, &id),

        Commands::List { query, kind, priority, status } =>
            cmd_list(store.tasks(), &query, kind, priority, status),

        Commands::Stats => cmd_stats(store.tasks()),

        Commands::Tags => cmd_tags(store.tasks()),
    }
}
