//! Durable snapshot of the task list and selection.
//!
//! The snapshot is a single pretty-printed JSON file, written atomically
//! (temp file + rename) after every mutation. Loading is lenient: a missing
//! or unreadable file yields the seeded default list rather than an error,
//! so a corrupt snapshot never locks the user out.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::selection::Selection;
use crate::store::TaskList;

/// Everything that survives a restart. The countdown itself is ephemeral
/// and recomputed from the current task's duration on load.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SavedState {
    pub tasks: TaskList,
    #[serde(default)]
    pub current_task: Option<u64>,
    #[serde(default)]
    pub is_running: bool,
}

impl SavedState {
    /// First-run state: the seeded list with the first task selected.
    pub fn seeded() -> Self {
        let tasks = TaskList::seeded();
        let current_task = tasks.tasks.first().map(|t| t.id);
        SavedState { tasks, current_task, is_running: false }
    }

    pub fn snapshot(tasks: &TaskList, selection: &Selection, is_running: bool) -> Self {
        SavedState {
            tasks: tasks.clone(),
            current_task: selection.current_id(),
            is_running,
        }
    }

    /// Load from a JSON file, seeding a fresh state if the file doesn't
    /// exist or can't be parsed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return SavedState::seeded();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(state) => state,
                Err(e) => {
                    eprintln!("Error parsing saved state, starting fresh: {e}");
                    SavedState::seeded()
                }
            },
            Err(e) => {
                eprintln!("Error reading saved state, starting fresh: {e}");
                SavedState::seeded()
            }
        }
    }

    /// Save to a JSON file using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}
