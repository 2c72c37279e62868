//! Task data structure and field limits.
//!
//! This module defines the core `Task` struct representing a single timed
//! work item, along with the validation limits shared by the store and the
//! UI layer.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Maximum length of a task name, in characters.
pub const NAME_MAX: usize = 30;
/// Maximum length of a task objective, in characters.
pub const OBJECTIVE_MAX: usize = 100;
/// Maximum task duration, in minutes.
pub const DURATION_MAX: u32 = 999;
/// Duration assigned to newly created tasks, in minutes.
pub const DEFAULT_DURATION: u32 = 30;

/// A timed work item.
///
/// `id` is a stable identifier assigned at creation and never reused, so
/// selection survives reordering and removal. `position` is the 1-based,
/// dense, user-facing ordering key; the list renumbers it on every removal
/// or reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub position: u64,
    pub name: String,
    pub objective: String,
    /// Countdown length in minutes.
    pub duration: u32,
    pub completed: bool,
    #[serde(default)]
    pub created_at_utc: i64,
    #[serde(default)]
    pub updated_at_utc: i64,
}

impl Task {
    /// Create a task with the templated defaults for the given position.
    pub fn templated(id: u64, position: u64) -> Self {
        let now = Utc::now().timestamp();
        Task {
            id,
            position,
            name: format!("Task {position}"),
            objective: format!("Objective {position}"),
            duration: DEFAULT_DURATION,
            completed: false,
            created_at_utc: now,
            updated_at_utc: now,
        }
    }

    /// Countdown length in seconds.
    pub fn duration_secs(&self) -> u64 {
        u64::from(self.duration) * 60
    }

    pub fn touch(&mut self) {
        self.updated_at_utc = Utc::now().timestamp();
    }
}

/// Editable task fields addressed by the store's `edit_task` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TaskField {
    Name,
    Objective,
    Duration,
}
