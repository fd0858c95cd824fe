//! Page abstraction the chapter widget runs against.
//!
//! The widget never holds element references. It keeps element identifiers
//! and receives the host on every call, so the host stays the single owner
//! of the media position and the rendered bar.
//!
//! A browser binding implements these traits over real DOM nodes; the
//! `dom` module provides an in-memory implementation.

mod events;

pub use events::{EventKind, EventTarget};

use crate::cues::Cue;

/// Attribute on each segment holding its cue start time in seconds.
pub const DATA_START_ATTR: &str = "data-start";

/// Stable handle of a rendered segment within its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub usize);

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "segment-{}", self.0)
    }
}

/// A playable media element (`<video>` / `<audio>`).
pub trait MediaElement {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Seek. Implementations clamp out-of-range values themselves.
    fn set_current_time(&mut self, seconds: f64);

    /// Media duration in seconds. Zero or NaN until metadata is known.
    fn duration(&self) -> f64;

    fn paused(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);
}

/// A timed-text track element.
pub trait TrackElement {
    /// Loaded cues in track order. Empty until the track has loaded.
    fn cues(&self) -> &[Cue];
}

/// Markup for one new bar segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSpec {
    /// CSS class list.
    pub class: String,
    /// CSS width value.
    pub width: String,
    /// Extra attributes, in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Visible text.
    pub label: String,
}

/// The container element hosting the chapter bar.
pub trait BarElement {
    /// Number of rendered segments.
    fn segment_count(&self) -> usize;

    /// Append a segment after the existing ones.
    fn append_segment(&mut self, spec: SegmentSpec) -> SegmentId;

    /// Read an attribute of a rendered segment.
    fn segment_attribute(&self, id: SegmentId, name: &str) -> Option<String>;

    /// Add or remove one class on a rendered segment.
    fn toggle_segment_class(&mut self, id: SegmentId, class: &str, on: bool);

    /// Remove every segment.
    fn clear_segments(&mut self);

    /// Set the container's `background` style.
    fn set_background(&mut self, css: &str);
}

/// The page: element lookup by identifier plus event subscription.
pub trait Host {
    type Media: MediaElement;
    type Track: TrackElement;
    type Bar: BarElement;

    fn media(&self, id: &str) -> Option<&Self::Media>;

    fn media_mut(&mut self, id: &str) -> Option<&mut Self::Media>;

    fn track(&self, id: &str) -> Option<&Self::Track>;

    fn bar(&self, id: &str) -> Option<&Self::Bar>;

    fn bar_mut(&mut self, id: &str) -> Option<&mut Self::Bar>;

    /// Register a listener for `event` on `target`.
    fn subscribe(&mut self, target: EventTarget, event: EventKind);

    /// Drop a listener registered with [`Host::subscribe`].
    fn unsubscribe(&mut self, target: &EventTarget, event: EventKind);
}
