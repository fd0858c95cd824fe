//! Chapter track parsers.
//!
//! Each parser is a pure function that takes content and returns a `CueList`.

mod srt;
mod vtt;

pub use srt::{parse_srt, parse_srt_time};
pub use vtt::{parse_vtt, parse_vtt_time};

use crate::cues::error::ParseError;
use crate::cues::types::{CueFormat, CueList};

/// Parse chapter track content with auto-detection.
///
/// Tries to detect the format from content if not specified.
pub fn parse_content(content: &str, format: Option<CueFormat>) -> Result<CueList, ParseError> {
    let format = format.unwrap_or_else(|| detect_format(content));

    match format {
        CueFormat::WebVtt => parse_vtt(content),
        CueFormat::Srt => parse_srt(content),
    }
}

/// Detect track format from content.
fn detect_format(content: &str) -> CueFormat {
    if content.trim_start_matches('\u{feff}').trim_start().starts_with("WEBVTT") {
        return CueFormat::WebVtt;
    }

    CueFormat::Srt
}

/// A blank-line separated block of lines.
struct Block<'a> {
    /// 1-based line number of the first line in the block.
    first_line: usize,
    lines: Vec<&'a str>,
}

/// Split normalized content into blocks separated by blank lines.
fn split_blocks(content: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }

        current
            .get_or_insert_with(|| Block {
                first_line: idx + 1,
                lines: Vec::new(),
            })
            .lines
            .push(line);
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}

/// Normalize CRLF and lone CR line endings.
fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Whole seconds of an `H:M:S` clock reading.
///
/// Minutes and seconds must be at most 59. Readings too large for `u64`
/// are rejected.
fn clock_to_secs(hours: u64, minutes: u64, seconds: u64) -> Option<u64> {
    if minutes > 59 || seconds > 59 {
        return None;
    }
    hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)
}

/// Convert a fractional-seconds digit string to seconds.
fn fraction_to_secs(digits: &str) -> Option<f64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: f64 = digits.parse().ok()?;
    Some(value / 10f64.powi(digits.len() as i32))
}
