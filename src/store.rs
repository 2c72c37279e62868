//! The task list store.
//!
//! Owns the ordered task collection and the dense-position invariant:
//! positions always form a contiguous 1-based permutation `1..=N`. Every
//! removal or reorder renumbers the survivors to restore it. All mutation
//! goes through the operations here; nothing else touches the list.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::{Task, TaskField, DURATION_MAX, NAME_MAX, OBJECTIVE_MAX};

/// Errors surfaced by store operations. Missing positions are deliberately
/// not errors; those operations no-op instead (see `remove_task`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("index {index} out of range for list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0}")]
    Validation(String),
}

/// Ordered task collection, insertion order = position order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    #[serde(default)]
    next_id: u64,
}

impl TaskList {
    /// The default first-run list: three templated tasks.
    pub fn seeded() -> Self {
        let mut list = TaskList::default();
        for _ in 0..3 {
            list.add_task();
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get a task by its 1-based position.
    pub fn get(&self, position: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.position == position)
    }

    /// Get a task by its stable id.
    pub fn get_by_id(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 0-based array index of the task with the given id.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a new templated task at position N+1 and return its id.
    pub fn add_task(&mut self) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let position = self.tasks.len() as u64 + 1;
        self.tasks.push(Task::templated(id, position));
        id
    }

    /// Remove the task at the given 1-based position, shifting every later
    /// task down one to keep positions dense. No-op if not found.
    pub fn remove_task(&mut self, position: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.position != position);
        if self.tasks.len() == before {
            return;
        }
        for t in self.tasks.iter_mut() {
            if t.position > position {
                t.position -= 1;
            }
        }
    }

    /// Move the element at `from_index` to `to_index` (0-based array
    /// offsets, not positions) and renumber every position to index+1.
    pub fn move_task(&mut self, from_index: usize, to_index: usize) -> Result<(), StoreError> {
        let len = self.tasks.len();
        if from_index >= len {
            return Err(StoreError::IndexOutOfRange { index: from_index, len });
        }
        if to_index >= len {
            return Err(StoreError::IndexOutOfRange { index: to_index, len });
        }
        let moved = self.tasks.remove(from_index);
        self.tasks.insert(to_index, moved);
        self.renumber();
        Ok(())
    }

    /// Update one field of the task at the given position, validating the
    /// new value against the field limits. A missing position is a silent
    /// no-op; an out-of-limit value leaves the task untouched.
    pub fn edit_task(&mut self, position: u64, field: TaskField, value: &str) -> Result<(), StoreError> {
        validate_field(field, value)?;
        let Some(task) = self.tasks.iter_mut().find(|t| t.position == position) else {
            return Ok(());
        };
        match field {
            TaskField::Name => task.name = value.to_string(),
            TaskField::Objective => task.objective = value.to_string(),
            TaskField::Duration => {
                // validate_field guarantees this parses and is in range
                task.duration = value.trim().parse().unwrap_or(0);
            }
        }
        task.touch();
        Ok(())
    }

    /// Flip the completed flag of the task at the given position. No-op if
    /// not found.
    pub fn toggle_completed(&mut self, position: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.position == position) {
            task.completed = !task.completed;
            task.touch();
        }
    }

    /// First pending task in position order, if any.
    pub fn first_pending(&self) -> Option<&Task> {
        self.tasks.iter().find(|t| !t.completed)
    }

    fn renumber(&mut self) {
        for (i, t) in self.tasks.iter_mut().enumerate() {
            t.position = i as u64 + 1;
        }
    }
}

/// Check a raw field value against the shared limits.
pub fn validate_field(field: TaskField, value: &str) -> Result<(), StoreError> {
    match field {
        TaskField::Name => {
            if value.chars().count() > NAME_MAX {
                return Err(StoreError::Validation(format!(
                    "name is limited to {NAME_MAX} characters"
                )));
            }
        }
        TaskField::Objective => {
            if value.chars().count() > OBJECTIVE_MAX {
                return Err(StoreError::Validation(format!(
                    "objective is limited to {OBJECTIVE_MAX} characters"
                )));
            }
        }
        TaskField::Duration => {
            let minutes: u32 = value
                .trim()
                .parse()
                .map_err(|_| StoreError::Validation("duration must be a whole number of minutes".into()))?;
            if minutes > DURATION_MAX {
                return Err(StoreError::Validation(format!(
                    "duration is limited to {DURATION_MAX} minutes"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(list: &TaskList) -> Vec<u64> {
        list.tasks.iter().map(|t| t.position).collect()
    }

    fn assert_dense(list: &TaskList) {
        let mut p = positions(list);
        p.sort_unstable();
        let expected: Vec<u64> = (1..=list.len() as u64).collect();
        assert_eq!(p, expected);
    }

    #[test]
    fn test_add_assigns_dense_positions_and_fresh_ids() {
        let mut list = TaskList::default();
        let a = list.add_task();
        let b = list.add_task();
        assert_ne!(a, b);
        assert_eq!(positions(&list), vec![1, 2]);
        assert_eq!(list.get(1).unwrap().name, "Task 1");
        assert_eq!(list.get(2).unwrap().duration, 30);
        assert!(!list.get(1).unwrap().completed);
    }

    #[test]
    fn test_remove_middle_renumbers_preserving_order() {
        // Scenario: remove position 2 of [1,2,3]
        let mut list = TaskList::seeded();
        let third_id = list.get(3).unwrap().id;
        list.remove_task(2);
        assert_eq!(positions(&list), vec![1, 2]);
        // old position 3 became 2, same task
        assert_eq!(list.get(2).unwrap().id, third_id);
        assert_dense(&list);
    }

    #[test]
    fn test_remove_missing_position_is_noop() {
        let mut list = TaskList::seeded();
        list.remove_task(99);
        assert_eq!(list.len(), 3);
        assert_dense(&list);
    }

    #[test]
    fn test_move_front_to_back() {
        // Scenario: move index 0 to index 2 in a 3-item list
        let mut list = TaskList::seeded();
        let first_id = list.tasks[0].id;
        list.move_task(0, 2).unwrap();
        assert_eq!(list.tasks[2].id, first_id);
        assert_eq!(positions(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_move_out_of_range_rejected_state_unchanged() {
        let mut list = TaskList::seeded();
        let before: Vec<u64> = list.tasks.iter().map(|t| t.id).collect();
        let err = list.move_task(0, 3).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfRange { index: 3, len: 3 });
        assert!(list.move_task(5, 0).is_err());
        let after: Vec<u64> = list.tasks.iter().map(|t| t.id).collect();
        assert_eq!(before, after);
        assert_dense(&list);
    }

    #[test]
    fn test_positions_dense_after_mixed_mutations() {
        let mut list = TaskList::default();
        for _ in 0..5 {
            list.add_task();
        }
        list.remove_task(3);
        list.move_task(0, 3).unwrap();
        list.add_task();
        list.remove_task(1);
        assert_dense(&list);
    }

    #[test]
    fn test_toggle_completed_twice_restores() {
        let mut list = TaskList::seeded();
        assert!(!list.get(1).unwrap().completed);
        list.toggle_completed(1);
        assert!(list.get(1).unwrap().completed);
        list.toggle_completed(1);
        assert!(!list.get(1).unwrap().completed);
    }

    #[test]
    fn test_edit_name_at_limit_accepted_over_limit_rejected() {
        let mut list = TaskList::seeded();
        let exact = "x".repeat(30);
        list.edit_task(1, TaskField::Name, &exact).unwrap();
        assert_eq!(list.get(1).unwrap().name, exact);

        let over = "x".repeat(31);
        let err = list.edit_task(1, TaskField::Name, &over).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(list.get(1).unwrap().name, exact);
    }

    #[test]
    fn test_edit_duration_range() {
        let mut list = TaskList::seeded();
        list.edit_task(1, TaskField::Duration, "0").unwrap();
        assert_eq!(list.get(1).unwrap().duration, 0);
        list.edit_task(1, TaskField::Duration, "999").unwrap();
        assert_eq!(list.get(1).unwrap().duration, 999);
        assert!(list.edit_task(1, TaskField::Duration, "1000").is_err());
        assert!(list.edit_task(1, TaskField::Duration, "abc").is_err());
        assert_eq!(list.get(1).unwrap().duration, 999);
    }

    #[test]
    fn test_edit_missing_position_is_silent_noop() {
        let mut list = TaskList::seeded();
        list.edit_task(42, TaskField::Name, "ghost").unwrap();
        assert!(list.tasks.iter().all(|t| t.name != "ghost"));
    }
}
