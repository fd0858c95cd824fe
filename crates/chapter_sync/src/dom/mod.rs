//! Headless, in-memory implementation of the host page.
//!
//! Used by the CLI to pre-render chapter bars and by tests to drive the
//! widget through the same event sequence a browser would produce.

mod bar;
mod elements;
mod page;

pub use bar::{escape_html, HeadlessBar, SegmentNode};
pub use elements::{HeadlessMedia, HeadlessTrack};
pub use page::{HeadlessPage, PageElement};
