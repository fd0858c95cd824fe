//! Chapter bar synchronisation widget.
//!
//! Binds a media element's chapter cues to a bar of clickable segments and
//! keeps the bar's played/remaining split in step with playback.
//!
//! # Lifecycle
//!
//! `initialize` binds the widget (or returns `None` if an element is
//! missing) and subscribes the media/track listeners. The bar is built by
//! whichever of `FirstFrameAvailable` / `CuesLoaded` arrives with the other
//! precondition already met. After that only position and click events
//! matter, until the media source changes.
//!
//! # Usage
//!
//! ```ignore
//! use chapter_sync::sync::{ChapterSync, ElementIds, SyncOptions};
//!
//! let Some(mut sync) = ChapterSync::initialize(&mut page, ElementIds::default(), SyncOptions::default()) else {
//!     return;
//! };
//! sync.dispatch(&mut page, &EventTarget::element("video"), EventKind::LoadedData);
//! ```

mod logic;
mod messages;
mod model;

pub use messages::SyncMsg;
pub use model::{ChapterSync, ElementIds, SyncOptions, SyncState};
