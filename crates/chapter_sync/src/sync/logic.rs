//! Chapter widget update logic.

use crate::chapters::{layout_segments, progress_percent};
use crate::host::{
    BarElement, EventKind, EventTarget, Host, MediaElement, SegmentId, SegmentSpec, TrackElement,
    DATA_START_ATTR,
};

use super::messages::SyncMsg;
use super::model::{ChapterSync, RenderedSegment};

impl ChapterSync {
    /// Translate a host event into a message, if the widget listens for it.
    pub fn message_for(&self, target: &EventTarget, event: EventKind) -> Option<SyncMsg> {
        match target {
            EventTarget::Element(id) if *id == self.ids.media => match event {
                EventKind::TimeUpdate => Some(SyncMsg::PositionChanged),
                EventKind::LoadedData => Some(SyncMsg::FirstFrameAvailable),
                EventKind::Click => Some(SyncMsg::SurfaceClicked),
                EventKind::Emptied => Some(SyncMsg::SourceChanged),
                EventKind::CuesLoaded => None,
            },
            EventTarget::Element(id) if *id == self.ids.track => match event {
                EventKind::CuesLoaded => Some(SyncMsg::CuesLoaded),
                _ => None,
            },
            EventTarget::Segment { bar, segment }
                if *bar == self.ids.bar
                    && event == EventKind::Click
                    && self.segments.iter().any(|r| r.id == *segment) =>
            {
                Some(SyncMsg::SegmentActivated(*segment))
            }
            _ => None,
        }
    }

    /// Handle a message.
    pub fn update<H: Host>(&mut self, host: &mut H, msg: SyncMsg) {
        tracing::trace!(?msg, "chapter sync update");
        match msg {
            SyncMsg::PositionChanged => self.on_position_changed(host),
            SyncMsg::FirstFrameAvailable | SyncMsg::CuesLoaded => self.build_chapter_bar(host),
            SyncMsg::SurfaceClicked => self.on_playback_toggle_requested(host),
            SyncMsg::SourceChanged => self.on_source_changed(host),
            SyncMsg::SegmentActivated(id) => self.on_segment_activated(host, id),
        }
    }

    /// Dispatch a raw host event. Events nobody subscribed to are ignored.
    pub fn dispatch<H: Host>(&mut self, host: &mut H, target: &EventTarget, event: EventKind) {
        if let Some(msg) = self.message_for(target, event) {
            self.update(host, msg);
        }
    }

    /// Render one segment per cue, once.
    ///
    /// Does nothing when already built, when an element is missing, or
    /// while duration or cues are still unknown. Both data events call
    /// this, in either order; the `built` flag keeps the second call from
    /// duplicating segments.
    pub fn build_chapter_bar<H: Host>(&mut self, host: &mut H) {
        if self.built {
            tracing::trace!("Chapter bar already built");
            return;
        }

        let Some(media) = host.media(&self.ids.media) else {
            return;
        };
        let duration = media.duration();

        let Some(track) = host.track(&self.ids.track) else {
            return;
        };
        let Some(segments) = layout_segments(track.cues(), duration) else {
            tracing::debug!(
                duration,
                cues = track.cues().len(),
                "Chapter data not ready yet"
            );
            return;
        };

        let Some(bar) = host.bar_mut(&self.ids.bar) else {
            return;
        };

        let mut rendered = Vec::with_capacity(segments.len());
        for segment in segments {
            let id = bar.append_segment(SegmentSpec {
                class: self.options.segment_class.clone(),
                width: segment.width_css(),
                attributes: vec![(DATA_START_ATTR.to_string(), segment.start_time.to_string())],
                label: segment.label.clone(),
            });
            rendered.push(RenderedSegment { id, segment });
        }

        for r in &rendered {
            host.subscribe(EventTarget::segment(&self.ids.bar, r.id), EventKind::Click);
        }

        tracing::info!(
            segments = rendered.len(),
            duration,
            "Chapter bar built"
        );

        self.segments = rendered;
        self.active = None;
        self.built = true;

        self.on_position_changed(host);
    }

    /// Seek to the segment's recorded start and make sure playback runs.
    pub fn on_segment_activated<H: Host>(&mut self, host: &mut H, segment: SegmentId) {
        let Some(start) = host
            .bar(&self.ids.bar)
            .and_then(|bar| bar.segment_attribute(segment, DATA_START_ATTR))
            .and_then(|value| value.parse::<f64>().ok())
        else {
            tracing::debug!(%segment, "Segment has no usable start time");
            return;
        };

        let Some(media) = host.media_mut(&self.ids.media) else {
            return;
        };

        media.set_current_time(start);
        if media.paused() {
            media.play();
        }
        tracing::debug!(%segment, start, "Seeked to chapter");
    }

    /// Move the played/remaining boundary and the active-chapter marker.
    pub fn on_position_changed<H: Host>(&mut self, host: &mut H) {
        let Some(media) = host.media(&self.ids.media) else {
            return;
        };
        let current_time = media.current_time();
        let Some(percent) = progress_percent(current_time, media.duration()) else {
            return;
        };

        let active = self
            .segments
            .iter()
            .position(|r| r.segment.contains(current_time));

        let Some(bar) = host.bar_mut(&self.ids.bar) else {
            return;
        };
        bar.set_background(&self.options.palette.gradient(percent));

        if active != self.active {
            if let Some(prev) = self.active {
                bar.toggle_segment_class(self.segments[prev].id, &self.options.active_class, false);
            }
            if let Some(next) = active {
                bar.toggle_segment_class(self.segments[next].id, &self.options.active_class, true);
            }
            self.active = active;
        }
    }

    /// Click on the media surface: play when paused, pause when playing.
    pub fn on_playback_toggle_requested<H: Host>(&mut self, host: &mut H) {
        let Some(media) = host.media_mut(&self.ids.media) else {
            return;
        };
        if media.paused() {
            media.play();
        } else {
            media.pause();
        }
    }

    /// The media source changed: drop the bar so the next data events rebuild it.
    pub fn on_source_changed<H: Host>(&mut self, host: &mut H) {
        for r in &self.segments {
            host.unsubscribe(&EventTarget::segment(&self.ids.bar, r.id), EventKind::Click);
        }

        if let Some(bar) = host.bar_mut(&self.ids.bar) {
            bar.clear_segments();
            bar.set_background(&self.options.palette.gradient(0.0));
        }

        if self.built {
            tracing::info!("Media source changed; chapter bar reset");
        }

        self.segments.clear();
        self.active = None;
        self.built = false;
    }
}
