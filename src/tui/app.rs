//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task list, the
//! countdown, the selection and the audio controller, handles user input,
//! renders the interface, and snapshots state after every mutation.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};

use crate::audio::{AudioController, SilentProvider, ALERT_TRACKS, BACKGROUND_TRACKS};
use crate::db::SavedState;
use crate::selection::Selection;
use crate::store::TaskList;
use crate::task::TaskField;
use crate::timer::{format_remaining, Timer, TimerEvent, TimerPhase};
use crate::tui::{
    colors::{DARK_GREEN, DARK_RED, DIM_GREY, GOLD},
    enums::{AppState, AudioField},
    task_form::{TaskForm, DURATION_FIELD, NAME_FIELD, OBJECTIVE_FIELD},
    utils::centered_rect,
};

/// Main application state for the terminal user interface.
///
/// Coordinates the task list, selection, countdown and audio roles; every
/// mutation is followed by a snapshot to the state file.
pub struct App {
    state: AppState,
    store: TaskList,
    selection: Selection,
    timer: Timer,
    audio: AudioController,
    db_path: PathBuf,
    table_state: TableState,
    task_form: TaskForm,
    editing_position: Option<u64>,
    audio_field: AudioField,
    status_message: String,
    confirm_remove: Option<u64>,
    last_second: Instant,
}

impl App {
    /// Create a new App instance, loading saved state from the given path.
    pub fn new(db_path: &Path) -> io::Result<Self> {
        let saved = SavedState::load(db_path);
        let store = saved.tasks;
        let mut selection = Selection::new(saved.current_task);
        selection.sync(&store);

        let mut timer = Timer::default();
        timer.load(selection.current_task(&store));

        let mut audio = AudioController::new(Box::new(SilentProvider));

        // A run in progress when the app last quit resumes from a full
        // countdown; only the running flag survives, not elapsed time.
        if saved.is_running && timer.start() {
            audio.resume_background();
        }

        let mut app = App {
            state: AppState::TaskList,
            store,
            selection,
            timer,
            audio,
            db_path: db_path.to_path_buf(),
            table_state: TableState::default(),
            task_form: TaskForm::new(),
            editing_position: None,
            audio_field: AudioField::Background,
            status_message: String::new(),
            confirm_remove: None,
            last_second: Instant::now(),
        };
        app.clamp_highlight();
        Ok(app)
    }

    /// Main event loop: render, poll input, advance the countdown.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
            self.on_tick();
        }
        self.audio.dispose();
        self.persist();
        Ok(())
    }

    // --- state plumbing -------------------------------------------------

    /// Write a snapshot of tasks + selection to the state file, reporting
    /// failures in the status bar.
    fn persist(&mut self) {
        let snapshot = SavedState::snapshot(&self.store, &self.selection, self.timer.is_running());
        if let Err(e) = snapshot.save(&self.db_path) {
            self.status_message = format!("Save failed: {e}");
        }
    }

    /// Re-point the timer at the (new) current task. Must run before any
    /// further ticking so a stale countdown never decrements against a
    /// fresh task.
    fn reload_timer(&mut self) {
        self.timer.load(self.selection.current_task(&self.store));
        self.last_second = Instant::now();
        self.audio.pause_background();
    }

    /// Repair selection after a list mutation and reset the countdown if
    /// the current task changed.
    fn after_mutation(&mut self) {
        if self.selection.sync(&self.store) {
            self.reload_timer();
        }
        self.clamp_highlight();
        self.persist();
    }

    fn clamp_highlight(&mut self) {
        if self.store.is_empty() {
            self.table_state.select(None);
            return;
        }
        let last = self.store.len() - 1;
        match self.table_state.selected() {
            Some(i) if i > last => self.table_state.select(Some(last)),
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    fn highlighted_position(&self) -> Option<u64> {
        self.table_state
            .selected()
            .and_then(|i| self.store.tasks.get(i))
            .map(|t| t.position)
    }

    /// Advance the countdown by however many whole seconds elapsed, and
    /// enforce the preview auto-stop window.
    fn on_tick(&mut self) {
        let now = Instant::now();
        self.audio.tick(now);

        if !self.timer.is_running() {
            self.last_second = now;
            return;
        }
        while now.duration_since(self.last_second) >= Duration::from_secs(1) {
            self.last_second += Duration::from_secs(1);
            if let Some(TimerEvent::Expired) = self.timer.tick() {
                self.on_expired();
                break;
            }
        }
    }

    /// Countdown hit zero: alert, advance to the next pending task, reset.
    fn on_expired(&mut self) {
        let finished = self
            .selection
            .current_task(&self.store)
            .map(|t| t.name.clone())
            .unwrap_or_default();
        self.audio.play_alert();
        self.selection.advance_to_next_pending(&self.store);
        self.reload_timer();
        self.status_message = format!("Time's up: {finished}");
        self.persist();
    }

    // --- input handling -------------------------------------------------

    /// Poll for and handle keyboard events based on current application
    /// state.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let should_quit = match self.state {
                    AppState::TaskList => self.handle_task_list_input(key.code, key.modifiers)?,
                    AppState::AddTask => self.handle_form_input(key.code, false)?,
                    AppState::EditTask => self.handle_form_input(key.code, true)?,
                    AppState::AudioSettings => self.handle_audio_input(key.code)?,
                    AppState::Help => self.handle_help_input(key.code)?,
                    AppState::Confirm => self.handle_confirm_input(key.code)?,
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Handle keys on the main task list screen.
    fn handle_task_list_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> io::Result<bool> {
        self.status_message.clear();
        match key {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('?') => self.state = AppState::Help,
            KeyCode::Char('a') => {
                self.task_form = TaskForm::new();
                self.editing_position = None;
                self.state = AppState::AddTask;
            }
            KeyCode::Char('e') => {
                if let Some(pos) = self.highlighted_position() {
                    if let Some(task) = self.store.get(pos) {
                        self.task_form = TaskForm::from_task(task);
                        self.editing_position = Some(pos);
                        self.state = AppState::EditTask;
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(pos) = self.highlighted_position() {
                    self.confirm_remove = Some(pos);
                    self.state = AppState::Confirm;
                }
            }
            KeyCode::Char(' ') => {
                if let Some(pos) = self.highlighted_position() {
                    self.store.toggle_completed(pos);
                    self.after_mutation();
                }
            }
            KeyCode::Up if modifiers.contains(KeyModifiers::SHIFT) => self.move_highlighted(-1),
            KeyCode::Down if modifiers.contains(KeyModifiers::SHIFT) => self.move_highlighted(1),
            KeyCode::Up | KeyCode::Char('k') => self.highlight_delta(-1),
            KeyCode::Down | KeyCode::Char('j') => self.highlight_delta(1),
            KeyCode::Enter => {
                if let Some(pos) = self.highlighted_position() {
                    if let Some(task) = self.store.get(pos) {
                        self.selection.select(&self.store, task.id);
                        self.reload_timer();
                        self.persist();
                    }
                }
            }
            KeyCode::Char('p') => self.toggle_play(),
            KeyCode::Char('n') => self.skip_to_next(),
            KeyCode::Char('m') => {
                // opening the settings dialog pauses a running countdown
                if self.timer.is_running() {
                    self.timer.toggle_pause();
                    self.audio.pause_background();
                }
                self.audio_field = AudioField::Background;
                self.state = AppState::AudioSettings;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Play/pause for the current task. Starting from Ready begins the
    /// countdown; Running and Paused flip into each other; with no task
    /// the control is inert.
    fn toggle_play(&mut self) {
        match self.timer.phase() {
            TimerPhase::Ready => {
                self.last_second = Instant::now();
                if self.timer.start() {
                    self.audio.resume_background();
                    self.persist();
                }
            }
            TimerPhase::Running => {
                self.timer.toggle_pause();
                self.audio.pause_background();
                self.persist();
            }
            TimerPhase::Paused => {
                self.last_second = Instant::now();
                self.timer.toggle_pause();
                self.audio.resume_background();
                self.persist();
            }
            TimerPhase::Idle | TimerPhase::Expired => {}
        }
    }

    /// Skip to the next pending task without completing the current one.
    fn skip_to_next(&mut self) {
        self.audio.stop_preview();
        if self.selection.advance_to_next_pending(&self.store) {
            self.reload_timer();
            self.persist();
        } else {
            self.status_message = "No other pending task".to_string();
        }
    }

    fn highlight_delta(&mut self, delta: i64) {
        if self.store.is_empty() {
            return;
        }
        let last = self.store.len() as i64 - 1;
        let cur = self.table_state.selected().unwrap_or(0) as i64;
        let next = (cur + delta).clamp(0, last);
        self.table_state.select(Some(next as usize));
    }

    /// Reorder: move the highlighted row up or down one slot.
    fn move_highlighted(&mut self, delta: i64) {
        let Some(from) = self.table_state.selected() else {
            return;
        };
        let to = from as i64 + delta;
        if to < 0 || to >= self.store.len() as i64 {
            return;
        }
        match self.store.move_task(from, to as usize) {
            Ok(()) => {
                self.table_state.select(Some(to as usize));
                self.after_mutation();
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Handle keys in the add/edit form.
    ///
    /// Returns true if the application should quit.
    fn handle_form_input(&mut self, key: KeyCode, editing: bool) -> io::Result<bool> {
        match key {
            KeyCode::Esc => self.state = AppState::TaskList,
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Enter => {
                if let Err(msg) = self.task_form.validate() {
                    self.status_message = msg;
                    return Ok(false);
                }
                let position = if editing {
                    self.editing_position
                } else {
                    let id = self.store.add_task();
                    self.store.get_by_id(id).map(|t| t.position)
                };
                if let Some(pos) = position {
                    self.apply_form(pos);
                }
                self.after_mutation();
                self.state = AppState::TaskList;
            }
            KeyCode::Backspace => self.task_form.active_input().handle_backspace(),
            KeyCode::Delete => self.task_form.active_input().handle_delete(),
            KeyCode::Left => self.task_form.active_input().move_cursor_left(),
            KeyCode::Right => self.task_form.active_input().move_cursor_right(),
            KeyCode::Char(c) => self.task_form.active_input().handle_char(c),
            _ => {}
        }
        Ok(false)
    }

    /// Copy validated form fields into the task at the given position. The
    /// store re-validates; failures land in the status bar.
    fn apply_form(&mut self, position: u64) {
        let old_duration = self.store.get(position).map(|t| t.duration);
        let edits = [
            (TaskField::Name, self.task_form.name.value.clone()),
            (TaskField::Objective, self.task_form.objective.value.clone()),
            (TaskField::Duration, self.task_form.duration.value.clone()),
        ];
        for (field, value) in edits {
            if let Err(e) = self.store.edit_task(position, field, &value) {
                self.status_message = e.to_string();
                return;
            }
        }
        // an edited duration restarts the countdown for the current task
        let is_current =
            self.selection.current_task(&self.store).map(|t| t.position) == Some(position);
        if is_current && self.store.get(position).map(|t| t.duration) != old_duration {
            self.reload_timer();
        }
    }

    /// Handle keys in the audio settings dialog.
    ///
    /// Returns true if the application should quit.
    fn handle_audio_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => {
                // closing the dialog cancels any preview in flight
                self.audio.stop_preview();
                self.state = AppState::TaskList;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.audio_field = match self.audio_field {
                    AudioField::Background => AudioField::Alert,
                    AudioField::Alert => AudioField::Volume,
                    AudioField::Volume => AudioField::Background,
                };
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.audio_field = match self.audio_field {
                    AudioField::Background => AudioField::Volume,
                    AudioField::Alert => AudioField::Background,
                    AudioField::Volume => AudioField::Alert,
                };
            }
            KeyCode::Left => self.cycle_audio(-1),
            KeyCode::Right => self.cycle_audio(1),
            _ => {}
        }
        Ok(false)
    }

    /// Step the focused audio control: previous/next track (with a
    /// preview) or volume down/up.
    fn cycle_audio(&mut self, delta: i64) {
        match self.audio_field {
            AudioField::Background => {
                let uri = cycle_track(BACKGROUND_TRACKS, self.audio.background_track(), delta);
                self.audio.set_background_track(&uri);
                if !uri.is_empty() {
                    self.audio.play_preview(&uri, Instant::now());
                }
            }
            AudioField::Alert => {
                let uri = cycle_track(ALERT_TRACKS, self.audio.alert_track(), delta);
                self.audio.set_alert_track(&uri);
                self.audio.play_preview(&uri, Instant::now());
            }
            AudioField::Volume => {
                let v = self.audio.volume() + delta as f32 * 0.05;
                self.audio.set_volume(v);
            }
        }
    }

    /// Handle keys on the help screen.
    ///
    /// Returns true if the application should quit.
    fn handle_help_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keys in the remove-confirmation dialog.
    ///
    /// Returns true if the application should quit.
    fn handle_confirm_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Some(pos) = self.confirm_remove.take() {
                    self.store.remove_task(pos);
                    self.after_mutation();
                }
                self.state = AppState::TaskList;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.confirm_remove = None;
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        Ok(false)
    }

    // --- rendering ------------------------------------------------------

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // timer panel
                Constraint::Min(0),    // task table
                Constraint::Length(1), // status bar
            ])
            .split(f.area());

        self.render_timer_panel(f, chunks[0]);
        self.render_task_table(f, chunks[1]);
        self.render_status_bar(f, chunks[2]);

        match self.state {
            AppState::AddTask | AppState::EditTask => self.render_task_form(f),
            AppState::AudioSettings => self.render_audio_settings(f),
            AppState::Help => self.render_help(f),
            AppState::Confirm => self.render_confirm(f),
            AppState::TaskList => {}
        }
    }

    /// Render the countdown panel for the current task.
    fn render_timer_panel(&self, f: &mut Frame, area: Rect) {
        let (phase_label, phase_color) = match self.timer.phase() {
            TimerPhase::Idle => ("no task", DIM_GREY),
            TimerPhase::Ready => ("ready", Color::Blue),
            TimerPhase::Running => ("running", DARK_GREEN),
            TimerPhase::Paused => ("paused", DARK_RED),
            TimerPhase::Expired => ("time's up", DARK_RED),
        };

        let (name, objective) = match self.selection.current_task(&self.store) {
            Some(t) => (t.name.clone(), t.objective.clone()),
            None => ("No task selected".to_string(), String::new()),
        };

        let lines = vec![
            Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(objective, Style::default().fg(DIM_GREY))),
            Line::from(Span::styled(
                format!("Remaining: {}", format_remaining(self.timer.remaining_secs())),
                Style::default().fg(phase_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("[{phase_label}]  p play/pause  n skip  m audio"),
                Style::default().fg(DIM_GREY),
            )),
        ];

        let panel = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Task Timer "));
        f.render_widget(panel, area);
    }

    /// Render the main task table.
    fn render_task_table(&mut self, f: &mut Frame, area: Rect) {
        let current_id = self.selection.current_id();
        let rows: Vec<Row> = self
            .store
            .tasks
            .iter()
            .map(|t| {
                let marker = if Some(t.id) == current_id { ">" } else { " " };
                let done = if t.completed { "x" } else { " " };
                let style = if t.completed {
                    Style::default().fg(DIM_GREY).add_modifier(Modifier::CROSSED_OUT)
                } else if Some(t.id) == current_id {
                    Style::default().fg(GOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    format!("{:>3}", t.position),
                    marker.to_string(),
                    format!("[{done}]"),
                    t.name.clone(),
                    format!("{:>4}", t.duration),
                    t.objective.clone(),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(32),
                Constraint::Length(4),
                Constraint::Min(10),
            ],
        )
        .header(
            Row::new(vec!["Pos", "", "", "Name", "Min", "Objective"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL).title(" Tasks "));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let text = if self.status_message.is_empty() {
            "a add  e edit  d remove  space done  shift+↑/↓ reorder  enter select  ? help  q quit"
                .to_string()
        } else {
            self.status_message.clone()
        };
        f.render_widget(Paragraph::new(text).style(Style::default().fg(DIM_GREY)), area);
    }

    /// Render the add/edit form dialog.
    fn render_task_form(&self, f: &mut Frame) {
        let area = centered_rect(60, 40, f.area());
        f.render_widget(Clear, area);

        let title = if self.state == AppState::AddTask { " Add Task " } else { " Edit Task " };
        let field_line = |label: &str, value: &str, active: bool| {
            let style = if active {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{label:<11} {value}"), style))
        };

        let lines = vec![
            field_line("Name:", &self.task_form.name.value, self.task_form.current_field == NAME_FIELD),
            field_line(
                "Objective:",
                &self.task_form.objective.value,
                self.task_form.current_field == OBJECTIVE_FIELD,
            ),
            field_line(
                "Duration:",
                &self.task_form.duration.value,
                self.task_form.current_field == DURATION_FIELD,
            ),
            Line::from(""),
            Line::from(Span::styled(
                "tab next field  enter save  esc cancel",
                Style::default().fg(DIM_GREY),
            )),
        ];
        let form = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(form, area);
    }

    /// Render the audio settings dialog.
    fn render_audio_settings(&self, f: &mut Frame) {
        let area = centered_rect(60, 45, f.area());
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .margin(1)
            .split(area);

        let active = |field: AudioField| {
            if self.audio_field == field {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            }
        };

        let bg_label = track_label(BACKGROUND_TRACKS, self.audio.background_track());
        let alert_label = track_label(ALERT_TRACKS, self.audio.alert_track());
        let tracks = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Background:  < {bg_label} >"),
                active(AudioField::Background),
            )),
            Line::from(Span::styled(
                format!("Alert:       < {alert_label} >"),
                active(AudioField::Alert),
            )),
            Line::from(Span::styled(
                "left/right picks a track and plays a short preview",
                Style::default().fg(DIM_GREY),
            )),
        ]);
        f.render_widget(tracks, chunks[0]);

        let volume = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Volume "))
            .gauge_style(active(AudioField::Volume).fg(if self.audio_field == AudioField::Volume {
                GOLD
            } else {
                DARK_GREEN
            }))
            .ratio(f64::from(self.audio.volume()));
        f.render_widget(volume, chunks[1]);

        let outer = Block::default().borders(Borders::ALL).title(" Audio Settings ");
        f.render_widget(outer, area);
    }

    /// Render the help overlay.
    fn render_help(&self, f: &mut Frame) {
        let area = centered_rect(60, 60, f.area());
        f.render_widget(Clear, area);

        let lines: Vec<Line> = [
            "↑/↓ or j/k     move highlight",
            "shift+↑/↓      reorder task",
            "enter          make highlighted task current",
            "p              start / pause countdown",
            "n              skip to next pending task",
            "space          toggle completed",
            "a / e / d      add / edit / remove task",
            "m              audio settings",
            "q              quit",
        ]
        .iter()
        .map(|s| Line::from(*s))
        .collect();

        let help = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Help "));
        f.render_widget(help, area);
    }

    /// Render the remove-confirmation dialog.
    fn render_confirm(&self, f: &mut Frame) {
        let area = centered_rect(40, 20, f.area());
        f.render_widget(Clear, area);

        let name = self
            .confirm_remove
            .and_then(|pos| self.store.get(pos))
            .map(|t| t.name.clone())
            .unwrap_or_default();
        let confirm = Paragraph::new(vec![
            Line::from(format!("Remove \"{name}\"?")),
            Line::from(""),
            Line::from(Span::styled("y confirm  n cancel", Style::default().fg(DIM_GREY))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Confirm "));
        f.render_widget(confirm, area);
    }
}

/// Step through a track table relative to the currently selected URI.
fn cycle_track(tracks: &[(&str, &str)], current: &str, delta: i64) -> String {
    let len = tracks.len() as i64;
    let cur = tracks.iter().position(|(_, uri)| *uri == current).unwrap_or(0) as i64;
    let next = (cur + delta).rem_euclid(len) as usize;
    tracks[next].1.to_string()
}

/// Display name for a track URI.
fn track_label(tracks: &[(&str, &str)], current: &str) -> String {
    tracks
        .iter()
        .find(|(_, uri)| *uri == current)
        .map(|(label, _)| label.to_string())
        .unwrap_or_else(|| current.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_track_wraps_both_ways() {
        assert_eq!(cycle_track(BACKGROUND_TRACKS, "", 1), "audio/lofi01.mp3");
        assert_eq!(cycle_track(BACKGROUND_TRACKS, "", -1), "audio/lofi04.mp3");
        assert_eq!(cycle_track(BACKGROUND_TRACKS, "audio/lofi04.mp3", 1), "");
    }

    #[test]
    fn test_track_label_falls_back_to_uri() {
        assert_eq!(track_label(BACKGROUND_TRACKS, ""), "None");
        assert_eq!(track_label(BACKGROUND_TRACKS, "audio/custom.mp3"), "audio/custom.mp3");
    }
}
