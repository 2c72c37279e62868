//! # TT - Task Timer
//!
//! A terminal task list and focus timer: define an ordered list of tasks
//! (name, objective, duration), run a one-second countdown per task, and
//! mark tasks complete or pending as you go. An audio-settings dialog
//! controls a looping background track and the expiry alert.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interactive timer UI
//! tt
//!
//! # Add a task from the shell
//! tt add --name "Write report" --duration 45
//!
//! # List tasks
//! tt list
//!
//! # Reorder: move the task at position 3 to position 1
//! tt move 3 1
//! ```
//!
//! State is stored locally in `~/.tasktimer/tasks.json` (or a path passed
//! via `--db`) and survives restarts, including which task was current.

use std::path::PathBuf;

use clap::Parser;

pub mod audio;
pub mod cli;
pub mod cmd;
pub mod db;
pub mod selection;
pub mod store;
pub mod task;
pub mod timer;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use db::SavedState;

fn main() {
    let cli = Cli::parse();

    // Determine the state file: --db wins, otherwise ~/.tasktimer/tasks.json
    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let dir = PathBuf::from(home).join(".tasktimer");
        if let Err(e) = std::fs::create_dir_all(&dir) {
            eprintln!("Failed to create state directory {}: {}", dir.display(), e);
            std::process::exit(1);
        }
        dir.join("tasks.json")
    });

    let command = cli.command.unwrap_or(Commands::Ui);

    // Completions don't need state; UI owns its own load/save cycle.
    match &command {
        Commands::Completions { shell } => {
            cmd_completions(*shell);
            return;
        }
        Commands::Ui => {
            cmd_ui(&db_path);
            return;
        }
        _ => {}
    }

    let mut state = SavedState::load(&db_path);

    match command {
        Commands::Ui | Commands::Completions { .. } => unreachable!("handled above"),

        Commands::Add { name, objective, duration } =>
            cmd_add(&mut state, &db_path, name, objective, duration),

        Commands::List => cmd_list(&state),

        Commands::Remove { position } => cmd_remove(&mut state, &db_path, position),

        Commands::Move { from, to } => cmd_move(&mut state, &db_path, from, to),

        Commands::Edit { position, field, value } =>
            cmd_edit(&mut state, &db_path, position, field, &value),

        Commands::Done { position } => cmd_set_completed(&mut state, &db_path, position, true),

        Commands::Pending { position } => cmd_set_completed(&mut state, &db_path, position, false),
    }
}
