//! Chapter widget messages (events)

use crate::host::SegmentId;

/// Messages handled by [`super::ChapterSync::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMsg {
    // === Media element ===
    /// Playback position moved (tick or seek)
    PositionChanged,

    /// First frame data available; duration is reliable from here on
    FirstFrameAvailable,

    /// Media surface clicked
    SurfaceClicked,

    /// Media source replaced
    SourceChanged,

    // === Track element ===
    /// Track cues loaded
    CuesLoaded,

    // === Chapter bar ===
    /// A rendered segment was clicked
    SegmentActivated(SegmentId),
}
