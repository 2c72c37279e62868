//! Task form handling for the terminal user interface.
//!
//! The add/edit form holds the three editable task fields and validates
//! them before anything reaches the store, so users get immediate
//! feedback. The store re-validates on its side; this layer exists for the
//! error message, not the guarantee.

use crate::store::{validate_field, StoreError};
use crate::task::{Task, TaskField, DEFAULT_DURATION};
use crate::tui::input::InputField;

pub const NAME_FIELD: usize = 0;
pub const OBJECTIVE_FIELD: usize = 1;
pub const DURATION_FIELD: usize = 2;
pub const FIELD_COUNT: usize = 3;

/// Form state for adding or editing a task.
pub struct TaskForm {
    pub name: InputField,
    pub objective: InputField,
    pub duration: InputField,
    pub current_field: usize,
}

impl TaskForm {
    pub fn new() -> Self {
        TaskForm {
            name: InputField::new(),
            objective: InputField::new(),
            duration: InputField::with_value(&DEFAULT_DURATION.to_string()),
            current_field: NAME_FIELD,
        }
    }

    pub fn from_task(task: &Task) -> Self {
        TaskForm {
            name: InputField::with_value(&task.name),
            objective: InputField::with_value(&task.objective),
            duration: InputField::with_value(&task.duration.to_string()),
            current_field: NAME_FIELD,
        }
    }

    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.current_field = (self.current_field + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    pub fn active_input(&mut self) -> &mut InputField {
        match self.current_field {
            OBJECTIVE_FIELD => &mut self.objective,
            DURATION_FIELD => &mut self.duration,
            _ => &mut self.name,
        }
    }

    /// Check every field against the shared limits, returning the first
    /// failure as a user-facing message.
    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            (TaskField::Name, self.name.value.as_str()),
            (TaskField::Objective, self.objective.value.as_str()),
            (TaskField::Duration, self.duration.value.as_str()),
        ];
        for (field, value) in checks {
            if let Err(StoreError::Validation(msg)) = validate_field(field, value) {
                return Err(msg);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_validation() {
        assert!(TaskForm::new().validate().is_ok());
    }

    #[test]
    fn test_name_over_limit_rejected_at_ui_layer() {
        let mut form = TaskForm::new();
        form.name = InputField::with_value(&"x".repeat(31));
        assert!(form.validate().is_err());
        form.name = InputField::with_value(&"x".repeat(30));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_duration_must_be_numeric_and_in_range() {
        let mut form = TaskForm::new();
        form.duration = InputField::with_value("soon");
        assert!(form.validate().is_err());
        form.duration = InputField::with_value("1000");
        assert!(form.validate().is_err());
        form.duration = InputField::with_value("0");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_field_cycling_wraps() {
        let mut form = TaskForm::new();
        form.next_field();
        form.next_field();
        assert_eq!(form.current_field, DURATION_FIELD);
        form.next_field();
        assert_eq!(form.current_field, NAME_FIELD);
        form.prev_field();
        assert_eq!(form.current_field, DURATION_FIELD);
    }
}
