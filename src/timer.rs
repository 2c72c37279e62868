//! Countdown engine for the current task.
//!
//! The engine is a small phase machine driven by an external 1 Hz tick.
//! Loading a task always resets the countdown, even mid-run, so callers
//! must re-load before resuming ticking whenever the current task changes.
//! Expiry fires exactly once per countdown; afterwards the engine parks in
//! `Expired` until something loads a task again.

use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// No current task; controls are disabled.
    Idle,
    /// Task loaded, countdown full, not yet started.
    Ready,
    Running,
    /// Started and stopped mid-countdown; remaining seconds kept.
    Paused,
    /// Countdown hit zero and the expiry event already fired.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Expired,
}

#[derive(Debug)]
pub struct Timer {
    phase: TimerPhase,
    remaining_secs: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Timer { phase: TimerPhase::Idle, remaining_secs: 0 }
    }
}

impl Timer {
    /// Reset the engine for a (possibly absent) current task. Always takes
    /// effect, regardless of the previous phase.
    pub fn load(&mut self, task: Option<&Task>) {
        match task {
            Some(t) => {
                self.phase = TimerPhase::Ready;
                self.remaining_secs = t.duration_secs();
            }
            None => {
                self.phase = TimerPhase::Idle;
                self.remaining_secs = 0;
            }
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Begin counting down. Only valid from `Ready`; returns whether the
    /// engine is now running.
    pub fn start(&mut self) -> bool {
        if self.phase == TimerPhase::Ready {
            self.phase = TimerPhase::Running;
        }
        self.is_running()
    }

    /// Flip between `Running` and `Paused`. No-op in every other phase, so
    /// the pause control is inert when no countdown has been started.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            TimerPhase::Running => TimerPhase::Paused,
            TimerPhase::Paused => TimerPhase::Running,
            other => other,
        };
    }

    /// Advance the countdown by one second. Call once per elapsed
    /// wall-clock second while running; the caller owns the cadence.
    ///
    /// Returns the expiry event when the countdown reaches zero, exactly
    /// once. A zero-duration task expires on the first tick after start.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.phase != TimerPhase::Running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        if self.remaining_secs == 0 {
            self.phase = TimerPhase::Expired;
            return Some(TimerEvent::Expired);
        }
        None
    }
}

/// Format remaining seconds as `M:SS` for display.
pub fn format_remaining(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn task_with_duration(minutes: u32) -> Task {
        let mut t = Task::templated(1, 1);
        t.duration = minutes;
        t
    }

    #[test]
    fn test_load_resets_countdown() {
        let mut timer = Timer::default();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        let t = task_with_duration(2);
        timer.load(Some(&t));
        assert_eq!(timer.phase(), TimerPhase::Ready);
        assert_eq!(timer.remaining_secs(), 120);
    }

    #[test]
    fn test_load_mid_run_discards_progress() {
        let mut timer = Timer::default();
        let t = task_with_duration(1);
        timer.load(Some(&t));
        timer.start();
        timer.tick();
        assert_eq!(timer.remaining_secs(), 59);
        let other = task_with_duration(2);
        timer.load(Some(&other));
        assert_eq!(timer.phase(), TimerPhase::Ready);
        assert_eq!(timer.remaining_secs(), 120);
    }

    #[test]
    fn test_tick_only_decrements_while_running() {
        let mut timer = Timer::default();
        let t = task_with_duration(1);
        timer.load(Some(&t));
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_secs(), 60);
        timer.start();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_secs(), 59);
        timer.toggle_pause();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_secs(), 59);
        timer.toggle_pause();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_secs(), 58);
    }

    #[test]
    fn test_expiry_fires_exactly_once() {
        let mut timer = Timer::default();
        let t = task_with_duration(1);
        timer.load(Some(&t));
        timer.start();
        let mut events = 0;
        for _ in 0..120 {
            if timer.tick().is_some() {
                events += 1;
            }
        }
        assert_eq!(events, 1);
        assert_eq!(timer.phase(), TimerPhase::Expired);
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn test_zero_duration_expires_on_first_tick() {
        let mut timer = Timer::default();
        let t = task_with_duration(0);
        timer.load(Some(&t));
        assert!(timer.start());
        assert_eq!(timer.tick(), Some(TimerEvent::Expired));
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_controls_inert_without_task() {
        let mut timer = Timer::default();
        timer.load(None);
        assert!(!timer.start());
        timer.toggle_pause();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_start_not_valid_after_expiry() {
        let mut timer = Timer::default();
        let t = task_with_duration(0);
        timer.load(Some(&t));
        timer.start();
        timer.tick();
        assert!(!timer.start());
        assert_eq!(timer.phase(), TimerPhase::Expired);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(0), "0:00");
        assert_eq!(format_remaining(65), "1:05");
        assert_eq!(format_remaining(600), "10:00");
    }
}
