use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed developer task tracker.
/// Storage defaults to ~/.devtask/tasks.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "devtask", version, about = "Developer task tracking CLI")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
