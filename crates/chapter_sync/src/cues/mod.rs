//! Chapter track (timed-text cue) loading.
//!
//! In a browser the host platform parses the track and hands the widget a
//! cue list. The headless page and the CLI load cues with this module.
//!
//! # Usage
//!
//! ```ignore
//! use chapter_sync::cues::parse_file;
//!
//! let cues = parse_file("chapters.vtt")?;
//! for cue in cues.iter() {
//!     println!("{} {}", cue.start_time, cue.text);
//! }
//! ```

mod error;
pub mod parsers;
mod types;

use std::fs;
use std::path::Path;

pub use error::{CueError, ParseError};
pub use parsers::{parse_content, parse_srt, parse_srt_time, parse_vtt, parse_vtt_time};
pub use types::{format_cue_time, Cue, CueFormat, CueList};

/// Parse a chapter track file from disk.
///
/// Detects the format from the file extension, falling back to content
/// detection for unknown extensions.
pub fn parse_file(path: impl AsRef<Path>) -> Result<CueList, CueError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| CueError::read(path, e))?;
    let format = CueFormat::from_extension(path);

    let mut list = parse_content(&content, format)?;
    list.source_path = Some(path.to_path_buf());

    tracing::debug!(
        path = %path.display(),
        cues = list.len(),
        format = ?list.format,
        "Loaded chapter track"
    );

    Ok(list)
}
