//! Headless media and track elements.

use crate::cues::Cue;
use crate::host::{MediaElement, TrackElement};

/// In-memory media element.
///
/// Duration is NaN until [`HeadlessMedia::load_metadata`] is called, like a
/// browser media element before metadata arrives.
#[derive(Debug, Clone)]
pub struct HeadlessMedia {
    current_time: f64,
    duration: f64,
    paused: bool,
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: f64::NAN,
            paused: true,
        }
    }
}

impl HeadlessMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Media with a known duration.
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Make the duration known.
    pub fn load_metadata(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Advance playback by `seconds` if playing. Stops at the end.
    pub fn advance(&mut self, seconds: f64) {
        if self.paused {
            return;
        }
        self.set_current_time(self.current_time + seconds);
        if self.duration.is_finite() && self.current_time >= self.duration {
            self.paused = true;
        }
    }

    /// Replace the source: position, duration and play state reset.
    pub fn unload(&mut self) {
        *self = Self::default();
    }
}

impl MediaElement for HeadlessMedia {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let mut t = if seconds.is_nan() { 0.0 } else { seconds.max(0.0) };
        if self.duration.is_finite() {
            t = t.min(self.duration);
        }
        self.current_time = t;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }
}

/// In-memory text track. Empty until [`HeadlessTrack::load`].
#[derive(Debug, Clone, Default)]
pub struct HeadlessTrack {
    cues: Vec<Cue>,
}

impl HeadlessTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load (or replace) the track's cues.
    pub fn load(&mut self, cues: Vec<Cue>) {
        self.cues = cues;
    }
}

impl TrackElement for HeadlessTrack {
    fn cues(&self) -> &[Cue] {
        &self.cues
    }
}
