//! Chapter bar model.
//!
//! Turns cues into bar segments and playback position into the bar's
//! progress style. Everything here is pure; the `sync` module applies the
//! results to a host page.

mod layout;
mod progress;
mod types;

pub use layout::{is_known_duration, layout_segments};
pub use progress::{progress_percent, ProgressPalette};
pub use types::{css_number, ChapterSegment};
