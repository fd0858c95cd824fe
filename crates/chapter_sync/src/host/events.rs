//! Host event vocabulary.

use serde::{Deserialize, Serialize};

use super::SegmentId;

/// Host events the chapter widget listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Media position moved (periodic playback tick or seek).
    TimeUpdate,
    /// First frame of media data is available; duration is now reliable.
    LoadedData,
    /// The text track finished loading its cues.
    CuesLoaded,
    /// Pointer click.
    Click,
    /// The media source was replaced or unloaded.
    Emptied,
}

impl EventKind {
    /// DOM event name.
    pub fn dom_name(&self) -> &'static str {
        match self {
            EventKind::TimeUpdate => "timeupdate",
            EventKind::LoadedData => "loadeddata",
            EventKind::CuesLoaded => "load",
            EventKind::Click => "click",
            EventKind::Emptied => "emptied",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dom_name())
    }
}

/// What an event is dispatched on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventTarget {
    /// A page element addressed by identifier.
    Element(String),
    /// A segment rendered inside a bar.
    Segment { bar: String, segment: SegmentId },
}

impl EventTarget {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }

    pub fn segment(bar: impl Into<String>, segment: SegmentId) -> Self {
        Self::Segment {
            bar: bar.into(),
            segment,
        }
    }
}

impl std::fmt::Display for EventTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventTarget::Element(id) => write!(f, "#{}", id),
            EventTarget::Segment { bar, segment } => write!(f, "#{} {}", bar, segment),
        }
    }
}
