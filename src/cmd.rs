//! CLI subcommands and their handlers.
//!
//! The CLI is a thin scripted surface over the same store the TUI uses:
//! load the snapshot, apply one operation, save. Positions shown to the
//! user are 1-based; `move` translates them to the store's 0-based
//! indices.

use std::path::Path;

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::db::SavedState;
use crate::selection::Selection;
use crate::task::{Task, TaskField};
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive timer UI (the default).
    Ui,
    /// Append a new task to the end of the list.
    Add {
        /// Task name (defaults to a templated one).
        #[arg(long)]
        name: Option<String>,
        /// What the task is for.
        #[arg(long)]
        objective: Option<String>,
        /// Countdown length in minutes.
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Print the task list.
    List,
    /// Remove the task at the given position.
    Remove {
        position: u64,
    },
    /// Move a task from one position to another.
    Move {
        from: u64,
        to: u64,
    },
    /// Edit one field of the task at the given position.
    Edit {
        position: u64,
        #[arg(value_enum)]
        field: TaskField,
        value: String,
    },
    /// Mark the task at the given position completed.
    Done {
        position: u64,
    },
    /// Mark the task at the given position pending again.
    Pending {
        position: u64,
    },
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui(db_path: &Path) {
    if let Err(e) = run_tui(db_path) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

pub fn cmd_add(
    state: &mut SavedState,
    db_path: &Path,
    name: Option<String>,
    objective: Option<String>,
    duration: Option<u32>,
) {
    let id = state.tasks.add_task();
    let position = match state.tasks.get_by_id(id) {
        Some(t) => t.position,
        None => return,
    };
    let mut apply = |field: TaskField, value: Option<String>| {
        if let Some(v) = value {
            if let Err(e) = state.tasks.edit_task(position, field, &v) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    };
    apply(TaskField::Name, name);
    apply(TaskField::Objective, objective);
    apply(TaskField::Duration, duration.map(|d| d.to_string()));
    save_or_die(state, db_path);
    println!("Added task at position {position}");
}

pub fn cmd_list(state: &SavedState) {
    if state.tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for task in &state.tasks.tasks {
        let marker = if Some(task.id) == state.current_task { "  <- current" } else { "" };
        println!("{} - {}{}", format_task_line(task), task.objective, marker);
    }
}

pub fn cmd_remove(state: &mut SavedState, db_path: &Path, position: u64) {
    state.tasks.remove_task(position);
    resync_selection(state);
    save_or_die(state, db_path);
}

pub fn cmd_move(state: &mut SavedState, db_path: &Path, from: u64, to: u64) {
    // CLI speaks 1-based positions; the store takes 0-based indices.
    let (Some(from_idx), Some(to_idx)) = (from.checked_sub(1), to.checked_sub(1)) else {
        eprintln!("Positions are 1-based");
        std::process::exit(1);
    };
    if let Err(e) = state.tasks.move_task(from_idx as usize, to_idx as usize) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    save_or_die(state, db_path);
}

pub fn cmd_edit(state: &mut SavedState, db_path: &Path, position: u64, field: TaskField, value: &str) {
    if let Err(e) = state.tasks.edit_task(position, field, value) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    save_or_die(state, db_path);
}

pub fn cmd_set_completed(state: &mut SavedState, db_path: &Path, position: u64, completed: bool) {
    let current = state.tasks.get(position).map(|t| t.completed);
    match current {
        Some(c) if c != completed => state.tasks.toggle_completed(position),
        Some(_) => {}
        None => {
            eprintln!("No task at position {position}");
            std::process::exit(1);
        }
    }
    save_or_die(state, db_path);
}

pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

fn resync_selection(state: &mut SavedState) {
    let mut selection = Selection::new(state.current_task);
    selection.sync(&state.tasks);
    state.current_task = selection.current_id();
}

fn save_or_die(state: &SavedState, db_path: &Path) {
    if let Err(e) = state.save(db_path) {
        eprintln!("Failed to save {}: {e}", db_path.display());
        std::process::exit(1);
    }
}

/// One-line summary used by list output and tests.
pub fn format_task_line(task: &Task) -> String {
    format!(
        "{} [{}] {} ({} min)",
        task.position,
        if task.completed { "x" } else { " " },
        task.name,
        task.duration
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskList;

    #[test]
    fn test_format_task_line() {
        let mut list = TaskList::seeded();
        list.toggle_completed(2);
        assert_eq!(format_task_line(list.get(1).unwrap()), "1 [ ] Task 1 (30 min)");
        assert_eq!(format_task_line(list.get(2).unwrap()), "2 [x] Task 2 (30 min)");
    }
}
