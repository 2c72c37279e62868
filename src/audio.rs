//! Audio playback roles and their lifecycle.
//!
//! Three independent roles: a looping background track, a short-lived
//! preview (auto-stopped five seconds after it starts), and fire-and-forget
//! alerts on timer expiry. Playback itself is behind the `SoundProvider`
//! trait; the binary ships with a silent implementation and tests use a
//! recording fake.

use std::time::{Duration, Instant};

/// How long a preview plays before it is stopped automatically.
pub const PREVIEW_WINDOW: Duration = Duration::from_secs(5);

/// Background track choices offered in the audio settings dialog. The empty
/// URI is the valid "no background" state.
pub const BACKGROUND_TRACKS: &[(&str, &str)] = &[
    ("None", ""),
    ("Lo-fi 01", "audio/lofi01.mp3"),
    ("Lo-fi 02", "audio/lofi02.mp3"),
    ("Lo-fi 03", "audio/lofi03.mp3"),
    ("Lo-fi 04", "audio/lofi04.mp3"),
];

/// Alert track choices.
pub const ALERT_TRACKS: &[(&str, &str)] = &[
    ("Alert 01", "audio/bip01.mp3"),
    ("Alert 02", "audio/bip02.mp3"),
    ("Alert 03", "audio/bip03.mp3"),
];

/// A loaded sound. Dropping a handle must not cut playback short; `stop`
/// is the explicit way to silence one.
pub trait Sound {
    /// Begin or resume playback from the given offset in seconds.
    fn play(&mut self, start_secs: f32);
    /// Stop playback, returning the current offset in seconds.
    fn pause(&mut self) -> f32;
    fn stop(&mut self);
    fn set_volume(&mut self, volume: f32);
}

/// Loads URIs into playable sounds. Implementations own format handling;
/// the controller never inspects the URI beyond emptiness.
pub trait SoundProvider {
    fn load(&self, uri: &str, looping: bool) -> Box<dyn Sound>;
}

/// Provider used when no audio backend is wired up.
pub struct SilentProvider;

struct SilentSound;

impl Sound for SilentSound {
    fn play(&mut self, _start_secs: f32) {}
    fn pause(&mut self) -> f32 {
        0.0
    }
    fn stop(&mut self) {}
    fn set_volume(&mut self, _volume: f32) {}
}

impl SoundProvider for SilentProvider {
    fn load(&self, _uri: &str, _looping: bool) -> Box<dyn Sound> {
        Box::new(SilentSound)
    }
}

/// Owns the three playback roles and their handles. One instance per
/// running application; handles live in private fields with explicit
/// lifecycle, never in free-floating globals.
pub struct AudioController {
    provider: Box<dyn SoundProvider>,
    background: Option<Box<dyn Sound>>,
    background_track: String,
    background_pos: f32,
    preview: Option<Box<dyn Sound>>,
    preview_deadline: Option<Instant>,
    alert: Option<Box<dyn Sound>>,
    alert_track: String,
    volume: f32,
}

impl AudioController {
    pub fn new(provider: Box<dyn SoundProvider>) -> Self {
        AudioController {
            provider,
            background: None,
            background_track: BACKGROUND_TRACKS[1].1.to_string(),
            background_pos: 0.0,
            preview: None,
            preview_deadline: None,
            alert: None,
            alert_track: ALERT_TRACKS[0].1.to_string(),
            volume: 0.5,
        }
    }

    pub fn background_track(&self) -> &str {
        &self.background_track
    }

    pub fn alert_track(&self) -> &str {
        &self.alert_track
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Start or resume the background loop from the last known offset.
    /// No-op when the track is set to none.
    pub fn resume_background(&mut self) {
        if self.background_track.is_empty() {
            return;
        }
        if self.background.is_none() {
            let mut sound = self.provider.load(&self.background_track, true);
            sound.set_volume(self.volume);
            self.background = Some(sound);
        }
        if let Some(bg) = self.background.as_mut() {
            bg.play(self.background_pos);
        }
    }

    /// Pause the background loop, remembering the offset so the next
    /// resume is seamless.
    pub fn pause_background(&mut self) {
        if let Some(bg) = self.background.as_mut() {
            self.background_pos = bg.pause();
        }
    }

    /// Switch the background track. A different resource starts from zero;
    /// the empty URI tears the handle down entirely.
    pub fn set_background_track(&mut self, uri: &str) {
        if uri == self.background_track {
            return;
        }
        if let Some(mut bg) = self.background.take() {
            bg.stop();
        }
        self.background_track = uri.to_string();
        self.background_pos = 0.0;
    }

    pub fn set_alert_track(&mut self, uri: &str) {
        self.alert_track = uri.to_string();
    }

    /// Fire-and-forget alert playback; no pause/resume for alerts.
    pub fn play_alert(&mut self) {
        let mut sound = self.provider.load(&self.alert_track, false);
        sound.set_volume(self.volume);
        sound.play(0.0);
        // keep the handle so a backend that ties playback to handle
        // lifetime still finishes the clip
        self.alert = Some(sound);
    }

    /// Play a short preview of a track, replacing any preview in flight
    /// and rearming the auto-stop window.
    pub fn play_preview(&mut self, uri: &str, now: Instant) {
        if let Some(mut p) = self.preview.take() {
            p.stop();
        }
        let mut sound = self.provider.load(uri, false);
        sound.set_volume(self.volume);
        sound.play(0.0);
        self.preview = Some(sound);
        self.preview_deadline = Some(now + PREVIEW_WINDOW);
    }

    /// Stop any preview in flight and cancel the pending auto-stop.
    pub fn stop_preview(&mut self) {
        if let Some(mut p) = self.preview.take() {
            p.stop();
        }
        self.preview_deadline = None;
    }

    /// Enforce the preview auto-stop window. Call from the event loop.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.preview_deadline {
            if now >= deadline {
                self.stop_preview();
            }
        }
    }

    /// Apply a new volume immediately to every live handle.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(bg) = self.background.as_mut() {
            bg.set_volume(self.volume);
        }
        if let Some(p) = self.preview.as_mut() {
            p.set_volume(self.volume);
        }
    }

    /// Tear everything down: background, preview, and the pending
    /// auto-stop.
    pub fn dispose(&mut self) {
        if let Some(mut bg) = self.background.take() {
            bg.stop();
        }
        self.stop_preview();
        self.alert = None;
    }

    pub fn has_background_handle(&self) -> bool {
        self.background.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Load { uri: String, looping: bool },
        Play { uri: String, start: f32 },
        Pause { uri: String },
        Stop { uri: String },
        Volume { uri: String, volume: f32 },
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct FakeProvider {
        log: Log,
        /// Offset reported by `pause` on every handle.
        pause_at: f32,
    }

    struct FakeSound {
        log: Log,
        uri: String,
        pause_at: f32,
    }

    impl Sound for FakeSound {
        fn play(&mut self, start_secs: f32) {
            self.log.borrow_mut().push(Call::Play { uri: self.uri.clone(), start: start_secs });
        }
        fn pause(&mut self) -> f32 {
            self.log.borrow_mut().push(Call::Pause { uri: self.uri.clone() });
            self.pause_at
        }
        fn stop(&mut self) {
            self.log.borrow_mut().push(Call::Stop { uri: self.uri.clone() });
        }
        fn set_volume(&mut self, volume: f32) {
            self.log.borrow_mut().push(Call::Volume { uri: self.uri.clone(), volume });
        }
    }

    impl SoundProvider for FakeProvider {
        fn load(&self, uri: &str, looping: bool) -> Box<dyn Sound> {
            self.log.borrow_mut().push(Call::Load { uri: uri.to_string(), looping });
            Box::new(FakeSound {
                log: self.log.clone(),
                uri: uri.to_string(),
                pause_at: self.pause_at,
            })
        }
    }

    fn controller(pause_at: f32) -> (AudioController, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let provider = FakeProvider { log: log.clone(), pause_at };
        (AudioController::new(Box::new(provider)), log)
    }

    #[test]
    fn test_background_resumes_at_paused_offset() {
        let (mut audio, log) = controller(12.3);
        audio.resume_background();
        audio.pause_background();
        audio.resume_background();
        let calls = log.borrow();
        let plays: Vec<f32> = calls
            .iter()
            .filter_map(|c| match c {
                Call::Play { start, .. } => Some(*start),
                _ => None,
            })
            .collect();
        assert_eq!(plays, vec![0.0, 12.3]);
    }

    #[test]
    fn test_changing_track_restarts_from_zero() {
        let (mut audio, log) = controller(12.3);
        audio.resume_background();
        audio.pause_background();
        audio.set_background_track("audio/lofi02.mp3");
        audio.resume_background();
        let calls = log.borrow();
        assert!(calls.contains(&Call::Stop { uri: "audio/lofi01.mp3".into() }));
        assert!(calls.contains(&Call::Play { uri: "audio/lofi02.mp3".into(), start: 0.0 }));
    }

    #[test]
    fn test_background_loads_looping() {
        let (mut audio, log) = controller(0.0);
        audio.resume_background();
        assert_eq!(
            log.borrow()[0],
            Call::Load { uri: "audio/lofi01.mp3".into(), looping: true }
        );
    }

    #[test]
    fn test_no_track_means_no_handle() {
        let (mut audio, log) = controller(0.0);
        audio.set_background_track("");
        audio.resume_background();
        assert!(!audio.has_background_handle());
        assert!(log.borrow().iter().all(|c| !matches!(c, Call::Load { .. })));
    }

    #[test]
    fn test_preview_auto_stops_after_window() {
        let (mut audio, log) = controller(0.0);
        let t0 = Instant::now();
        audio.play_preview("audio/bip01.mp3", t0);
        audio.tick(t0 + Duration::from_secs(4));
        assert!(!log.borrow().contains(&Call::Stop { uri: "audio/bip01.mp3".into() }));
        audio.tick(t0 + Duration::from_secs(5));
        assert!(log.borrow().contains(&Call::Stop { uri: "audio/bip01.mp3".into() }));
    }

    #[test]
    fn test_new_preview_cancels_pending_stop() {
        let (mut audio, log) = controller(0.0);
        let t0 = Instant::now();
        audio.play_preview("audio/bip01.mp3", t0);
        audio.play_preview("audio/bip02.mp3", t0 + Duration::from_secs(4));
        // the first preview's window passing must not stop the second
        audio.tick(t0 + Duration::from_secs(6));
        let calls = log.borrow();
        assert!(calls.contains(&Call::Stop { uri: "audio/bip01.mp3".into() }));
        assert!(!calls.contains(&Call::Stop { uri: "audio/bip02.mp3".into() }));
        drop(calls);
        audio.tick(t0 + Duration::from_secs(9));
        assert!(log.borrow().contains(&Call::Stop { uri: "audio/bip02.mp3".into() }));
    }

    #[test]
    fn test_volume_applies_to_live_handles() {
        let (mut audio, log) = controller(0.0);
        audio.resume_background();
        audio.play_preview("audio/bip01.mp3", Instant::now());
        log.borrow_mut().clear();
        audio.set_volume(0.8);
        let calls = log.borrow();
        assert!(calls.contains(&Call::Volume { uri: "audio/lofi01.mp3".into(), volume: 0.8 }));
        assert!(calls.contains(&Call::Volume { uri: "audio/bip01.mp3".into(), volume: 0.8 }));
    }

    #[test]
    fn test_alert_plays_from_start_without_looping() {
        let (mut audio, log) = controller(0.0);
        audio.play_alert();
        let calls = log.borrow();
        assert!(calls.contains(&Call::Load { uri: "audio/bip01.mp3".into(), looping: false }));
        assert!(calls.contains(&Call::Play { uri: "audio/bip01.mp3".into(), start: 0.0 }));
    }
}
