//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    TaskList,
    AddTask,
    EditTask,
    AudioSettings,
    Help,
    Confirm,
}

/// Which control inside the audio settings dialog has focus.
#[derive(Clone, Copy, PartialEq)]
pub enum AudioField {
    Background,
    Alert,
    Volume,
}
