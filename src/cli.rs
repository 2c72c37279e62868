use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Terminal task list and focus timer.
/// Storage defaults to ~/.tasktimer/tasks.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "tt", version, about = "Task list and focus timer")]
pub struct Cli {
    /// Path to the JSON state file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
