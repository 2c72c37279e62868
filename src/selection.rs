//! Tracks which task the timer is counting down for.
//!
//! The current task is referenced by its stable id, not by a positional
//! index, so reordering or removing other tasks never silently retargets
//! the selection. `sync` repairs the reference after list mutations.

use crate::store::TaskList;
use crate::task::Task;

#[derive(Debug, Default, Clone)]
pub struct Selection {
    current: Option<u64>,
}

impl Selection {
    pub fn new(current: Option<u64>) -> Self {
        Selection { current }
    }

    pub fn current_id(&self) -> Option<u64> {
        self.current
    }

    /// Set the current task by id. No-op if the id is not in the list.
    pub fn select(&mut self, list: &TaskList, id: u64) {
        if list.get_by_id(id).is_some() {
            self.current = Some(id);
        }
    }

    /// Resolve the current task against the list.
    pub fn current_task<'a>(&self, list: &'a TaskList) -> Option<&'a Task> {
        self.current.and_then(|id| list.get_by_id(id))
    }

    /// Repair the selection after a list mutation: if the current task no
    /// longer exists, fall back to the first pending task, or clear when
    /// the list is empty.
    ///
    /// Returns true when the selection changed.
    pub fn sync(&mut self, list: &TaskList) -> bool {
        if let Some(id) = self.current {
            if list.get_by_id(id).is_some() {
                return false;
            }
        }
        let fallback = list.first_pending().or_else(|| list.tasks.first()).map(|t| t.id);
        let changed = self.current != fallback;
        self.current = fallback;
        changed
    }

    /// Advance to the next pending task: scan strictly after the current
    /// task in position order, wrapping to the first pending task from the
    /// start. When no pending task exists anywhere the selection stays
    /// unchanged, so the display remains stable on a fully completed list.
    ///
    /// Returns true when the selection moved.
    pub fn advance_to_next_pending(&mut self, list: &TaskList) -> bool {
        if list.is_empty() {
            return false;
        }
        let start = self
            .current
            .and_then(|id| list.index_of(id))
            .map(|i| i + 1)
            .unwrap_or(0);

        let next = list.tasks[start..]
            .iter()
            .find(|t| !t.completed)
            .or_else(|| list.first_pending());

        match next {
            Some(t) if Some(t.id) != self.current => {
                self.current = Some(t.id);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskList;

    fn list_with(completed: &[bool]) -> TaskList {
        let mut list = TaskList::default();
        for &done in completed {
            let id = list.add_task();
            if done {
                let pos = list.get_by_id(id).unwrap().position;
                list.toggle_completed(pos);
            }
        }
        list
    }

    #[test]
    fn test_advance_skips_completed_tasks() {
        let list = list_with(&[false, true, false]);
        let mut sel = Selection::new(Some(list.tasks[0].id));
        assert!(sel.advance_to_next_pending(&list));
        assert_eq!(sel.current_id(), Some(list.tasks[2].id));
    }

    #[test]
    fn test_advance_wraps_to_first_pending() {
        let list = list_with(&[true, false, false]);
        let mut sel = Selection::new(Some(list.tasks[2].id));
        assert!(sel.advance_to_next_pending(&list));
        assert_eq!(sel.current_id(), Some(list.tasks[1].id));
    }

    #[test]
    fn test_advance_all_completed_leaves_selection_unchanged() {
        let list = list_with(&[true, true, true]);
        let current = list.tasks[1].id;
        let mut sel = Selection::new(Some(current));
        assert!(!sel.advance_to_next_pending(&list));
        assert_eq!(sel.current_id(), Some(current));
    }

    #[test]
    fn test_advance_with_no_selection_starts_from_front() {
        let list = list_with(&[true, false]);
        let mut sel = Selection::default();
        assert!(sel.advance_to_next_pending(&list));
        assert_eq!(sel.current_id(), Some(list.tasks[1].id));
    }

    #[test]
    fn test_selection_survives_reorder() {
        let mut list = list_with(&[false, false, false]);
        let id = list.tasks[2].id;
        let mut sel = Selection::new(Some(id));
        list.move_task(2, 0).unwrap();
        assert!(!sel.sync(&list));
        assert_eq!(sel.current_task(&list).unwrap().id, id);
    }

    #[test]
    fn test_sync_falls_back_to_first_pending_after_removal() {
        let mut list = list_with(&[true, false, false]);
        let removed = list.tasks[1].id;
        let expected = list.tasks[2].id;
        let mut sel = Selection::new(Some(removed));
        list.remove_task(list.get_by_id(removed).unwrap().position);
        assert!(sel.sync(&list));
        // first pending in position order is what used to be third
        assert_eq!(sel.current_id(), Some(expected));
    }

    #[test]
    fn test_sync_clears_on_empty_list() {
        let mut list = list_with(&[false]);
        let mut sel = Selection::new(Some(list.tasks[0].id));
        list.remove_task(1);
        assert!(sel.sync(&list));
        assert_eq!(sel.current_id(), None);
    }

    #[test]
    fn test_select_ignores_unknown_id() {
        let list = list_with(&[false]);
        let mut sel = Selection::default();
        sel.select(&list, 999);
        assert_eq!(sel.current_id(), None);
    }
}
