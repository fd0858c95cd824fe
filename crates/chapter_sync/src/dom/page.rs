//! Headless page: element registry plus listener bookkeeping.

use std::collections::{BTreeSet, HashMap};

use super::bar::HeadlessBar;
use super::elements::{HeadlessMedia, HeadlessTrack};
use crate::host::{EventKind, EventTarget, Host};

/// An element living on the headless page.
#[derive(Debug, Clone)]
pub enum PageElement {
    Media(HeadlessMedia),
    Track(HeadlessTrack),
    Bar(HeadlessBar),
}

/// In-memory page implementing [`Host`].
#[derive(Debug, Default)]
pub struct HeadlessPage {
    elements: HashMap<String, PageElement>,
    listeners: BTreeSet<(EventTarget, EventKind)>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an element under `id`.
    pub fn insert(&mut self, id: impl Into<String>, element: PageElement) {
        self.elements.insert(id.into(), element);
    }

    pub fn insert_media(&mut self, id: impl Into<String>, media: HeadlessMedia) {
        self.insert(id, PageElement::Media(media));
    }

    pub fn insert_track(&mut self, id: impl Into<String>, track: HeadlessTrack) {
        self.insert(id, PageElement::Track(track));
    }

    /// Add an empty bar container under `id`.
    pub fn insert_bar(&mut self, id: impl Into<String>) {
        let id = id.into();
        let bar = HeadlessBar::new(id.clone());
        self.insert(id, PageElement::Bar(bar));
    }

    /// Remove an element. Its listeners stay registered, like a detached node.
    pub fn remove(&mut self, id: &str) -> Option<PageElement> {
        self.elements.remove(id)
    }

    pub fn track_mut(&mut self, id: &str) -> Option<&mut HeadlessTrack> {
        match self.elements.get_mut(id)? {
            PageElement::Track(track) => Some(track),
            _ => None,
        }
    }

    /// Whether a listener for `event` on `target` is registered.
    pub fn fire(&self, target: &EventTarget, event: EventKind) -> bool {
        self.listeners.contains(&(target.clone(), event))
    }

    /// Registered listeners in a stable order.
    pub fn listeners(&self) -> impl Iterator<Item = &(EventTarget, EventKind)> {
        self.listeners.iter()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Host for HeadlessPage {
    type Media = HeadlessMedia;
    type Track = HeadlessTrack;
    type Bar = HeadlessBar;

    fn media(&self, id: &str) -> Option<&HeadlessMedia> {
        match self.elements.get(id)? {
            PageElement::Media(media) => Some(media),
            _ => None,
        }
    }

    fn media_mut(&mut self, id: &str) -> Option<&mut HeadlessMedia> {
        match self.elements.get_mut(id)? {
            PageElement::Media(media) => Some(media),
            _ => None,
        }
    }

    fn track(&self, id: &str) -> Option<&HeadlessTrack> {
        match self.elements.get(id)? {
            PageElement::Track(track) => Some(track),
            _ => None,
        }
    }

    fn bar(&self, id: &str) -> Option<&HeadlessBar> {
        match self.elements.get(id)? {
            PageElement::Bar(bar) => Some(bar),
            _ => None,
        }
    }

    fn bar_mut(&mut self, id: &str) -> Option<&mut HeadlessBar> {
        match self.elements.get_mut(id)? {
            PageElement::Bar(bar) => Some(bar),
            _ => None,
        }
    }

    fn subscribe(&mut self, target: EventTarget, event: EventKind) {
        tracing::trace!(%target, %event, "subscribe");
        self.listeners.insert((target, event));
    }

    fn unsubscribe(&mut self, target: &EventTarget, event: EventKind) {
        tracing::trace!(%target, %event, "unsubscribe");
        self.listeners.remove(&(target.clone(), event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MediaElement;

    #[test]
    fn lookup_respects_element_kind() {
        let mut page = HeadlessPage::new();
        page.insert_media("video", HeadlessMedia::with_duration(10.0));
        page.insert_bar("bar");

        assert!(page.media("video").is_some());
        assert!(page.track("video").is_none());
        assert!(page.bar("video").is_none());
        assert!(page.bar("bar").is_some());
        assert!(page.media("missing").is_none());
    }

    #[test]
    fn media_mut_updates_element() {
        let mut page = HeadlessPage::new();
        page.insert_media("video", HeadlessMedia::with_duration(10.0));
        page.media_mut("video").unwrap().set_current_time(4.0);
        assert_eq!(page.media("video").unwrap().current_time(), 4.0);
    }

    #[test]
    fn subscriptions_are_tracked() {
        let mut page = HeadlessPage::new();
        let target = EventTarget::element("video");

        page.subscribe(target.clone(), EventKind::TimeUpdate);
        page.subscribe(target.clone(), EventKind::TimeUpdate);
        assert_eq!(page.listener_count(), 1);
        assert!(page.fire(&target, EventKind::TimeUpdate));
        assert!(!page.fire(&target, EventKind::Click));

        page.unsubscribe(&target, EventKind::TimeUpdate);
        assert!(!page.fire(&target, EventKind::TimeUpdate));
    }
}
