//! Chapter widget state.

use serde::{Deserialize, Serialize};

use crate::chapters::{ChapterSegment, ProgressPalette};
use crate::host::{EventKind, EventTarget, Host, SegmentId};

/// Identifiers of the three page elements the widget binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIds {
    pub media: String,
    pub track: String,
    pub bar: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            media: "video".to_string(),
            track: "chapters".to_string(),
            bar: "chapter-bar".to_string(),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Played / remaining colours of the progress split.
    pub palette: ProgressPalette,
    /// Class on every segment.
    pub segment_class: String,
    /// Extra class on the segment containing the playback position.
    pub active_class: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            palette: ProgressPalette::new("#1e88e5", "#e0e0e0"),
            segment_class: "chapter-segment".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Lifecycle of a bound widget.
///
/// There is no `Uninitialized` variant: a widget that failed to bind is
/// never constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Bound, waiting for both duration and cues.
    WaitingForData,
    /// Bar built; only position and click events matter now.
    Ready,
}

/// A segment as rendered into the bar.
#[derive(Debug, Clone)]
pub(super) struct RenderedSegment {
    pub id: SegmentId,
    pub segment: ChapterSegment,
}

/// Chapter bar controller bound to one media/track/bar triple.
///
/// Created by [`ChapterSync::initialize`]; every handler takes the host
/// explicitly.
#[derive(Debug, Clone)]
pub struct ChapterSync {
    pub(super) ids: ElementIds,
    pub(super) options: SyncOptions,
    /// Build guard. Set once the bar holds segments for the current source.
    pub(super) built: bool,
    pub(super) segments: Vec<RenderedSegment>,
    /// Index into `segments` of the segment marked active.
    pub(super) active: Option<usize>,
}

impl ChapterSync {
    /// Bind the widget to the page.
    ///
    /// Returns `None` without touching the page when any of the three
    /// elements is missing. Otherwise subscribes the media and track
    /// listeners and makes a first build attempt, since the data may
    /// already be loaded by the time the page is ready.
    pub fn initialize<H: Host>(host: &mut H, ids: ElementIds, options: SyncOptions) -> Option<Self> {
        if host.media(&ids.media).is_none()
            || host.track(&ids.track).is_none()
            || host.bar(&ids.bar).is_none()
        {
            tracing::debug!(
                media = %ids.media,
                track = %ids.track,
                bar = %ids.bar,
                "Chapter elements not all present; chapter bar disabled"
            );
            return None;
        }

        let mut sync = Self {
            ids,
            options,
            built: false,
            segments: Vec::new(),
            active: None,
        };

        for (target, event) in sync.base_subscriptions() {
            host.subscribe(target, event);
        }

        sync.build_chapter_bar(host);
        Some(sync)
    }

    /// Listeners registered for the lifetime of the widget.
    pub(super) fn base_subscriptions(&self) -> [(EventTarget, EventKind); 5] {
        let media = EventTarget::element(&self.ids.media);
        [
            (media.clone(), EventKind::TimeUpdate),
            (media.clone(), EventKind::LoadedData),
            (EventTarget::element(&self.ids.track), EventKind::CuesLoaded),
            (media.clone(), EventKind::Click),
            (media, EventKind::Emptied),
        ]
    }

    pub fn state(&self) -> SyncState {
        if self.built {
            SyncState::Ready
        } else {
            SyncState::WaitingForData
        }
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Rendered segments in bar order.
    pub fn segments(&self) -> impl Iterator<Item = &ChapterSegment> {
        self.segments.iter().map(|r| &r.segment)
    }

    /// Segment ids in bar order.
    pub fn segment_ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.segments.iter().map(|r| r.id)
    }

    /// The chapter containing the last observed playback position.
    pub fn active_segment(&self) -> Option<&ChapterSegment> {
        self.active.map(|i| &self.segments[i].segment)
    }
}
