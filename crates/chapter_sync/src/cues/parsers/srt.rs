//! SubRip chapter track parser.
//!
//! ```text
//! 1
//! 00:00:00,000 --> 00:01:30,000
//! Introduction
//!
//! 2
//! 00:01:30,000 --> 00:04:00,000
//! Building the model
//! ```
//!
//! The index line is optional and ignored.

use super::{clock_to_secs, fraction_to_secs, normalize_line_endings, split_blocks};
use crate::cues::error::ParseError;
use crate::cues::types::{Cue, CueFormat, CueList};

/// Parse SRT content into a `CueList`.
pub fn parse_srt(content: &str) -> Result<CueList, ParseError> {
    let mut list = CueList::with_format(CueFormat::Srt);
    let content = normalize_line_endings(content);

    for block in split_blocks(&content) {
        let Some(timing_idx) = block.lines.iter().position(|l| l.contains("-->")) else {
            continue;
        };

        let timing_line = block.lines[timing_idx];
        let line_num = block.first_line + timing_idx;

        let (start, end) = parse_srt_timing(timing_line)
            .ok_or_else(|| ParseError::invalid_time(line_num, timing_line))?;

        let cue = Cue::new(start, end, block.lines[timing_idx + 1..].join("\n"));
        if !cue.is_valid() {
            return Err(ParseError::invalid_cue(
                line_num,
                format!("end {end} is not after start {start}"),
            ));
        }

        list.cues.push(cue);
    }

    Ok(list)
}

/// Parse SRT timing line: `HH:MM:SS,mmm --> HH:MM:SS,mmm`
fn parse_srt_timing(line: &str) -> Option<(f64, f64)> {
    let (start, end) = line.split_once("-->")?;
    Some((parse_srt_time(start)?, parse_srt_time(end)?))
}

/// Parse SRT timestamp: `HH:MM:SS,mmm` (a period separator is also accepted).
///
/// Returns time in seconds.
pub fn parse_srt_time(s: &str) -> Option<f64> {
    let s = s.trim().replace(',', ".");

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours: u64 = parts[0].parse().ok()?;
    let minutes: u64 = parts[1].parse().ok()?;

    let (secs, frac) = match parts[2].split_once('.') {
        Some((secs, frac)) => (secs, fraction_to_secs(frac)?),
        None => (parts[2], 0.0),
    };
    let seconds: u64 = secs.parse().ok()?;

    Some(clock_to_secs(hours, minutes, seconds)? as f64 + frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_srt_time_works() {
        assert!((parse_srt_time("00:00:00,000").unwrap() - 0.0).abs() < 1e-9);
        assert!((parse_srt_time("00:00:01,500").unwrap() - 1.5).abs() < 1e-9);
        assert!((parse_srt_time("01:00:00,000").unwrap() - 3600.0).abs() < 1e-9);
        assert!((parse_srt_time("00:00:01.500").unwrap() - 1.5).abs() < 1e-9);
        assert!(parse_srt_time("00:01,500").is_none());
        assert!(parse_srt_time("aa:00:01,500").is_none());
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        assert!(parse_srt_time("00:99:99,000").is_none());
        assert!(parse_srt_time("00:60:00,000").is_none());
        assert!(parse_srt_time("00:00:60,000").is_none());
        assert!((parse_srt_time("00:59:59,000").unwrap() - 3599.0).abs() < 1e-9);
    }

    #[test]
    fn oversized_hours_are_rejected() {
        assert!(parse_srt_time("18446744073709551615:00:00,000").is_none());

        let content = "1\n18446744073709551615:00:00,000 --> 00:00:01,000\nHuge\n";
        let err = parse_srt(content).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTime { line: 2, .. }));
    }

    #[test]
    fn parse_basic_srt() {
        let content = "1\n00:00:00,000 --> 00:00:30,000\nIntro\n\n2\n00:00:30,000 --> 00:01:00,000\nSetup\nand tools\n";

        let list = parse_srt(content).unwrap();
        assert_eq!(list.format, CueFormat::Srt);
        assert_eq!(list.len(), 2);
        assert_eq!(list.cues[0], Cue::new(0.0, 30.0, "Intro"));
        assert_eq!(list.cues[1].text, "Setup\nand tools");
    }

    #[test]
    fn parse_srt_with_crlf_and_no_index() {
        let content = "00:00:01,000 --> 00:00:04,000\r\nHello\r\n\r\n00:00:05,000 --> 00:00:08,000\r\nWorld\r\n";
        let list = parse_srt(content).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.cues[1].text, "World");
    }

    #[test]
    fn reversed_timing_is_rejected() {
        let content = "1\n00:00:05,000 --> 00:00:01,000\nBackwards\n";
        let err = parse_srt(content).unwrap_err();
        assert!(matches!(err, ParseError::InvalidCue { line: 2, .. }));
    }

    #[test]
    fn garbage_timing_is_rejected() {
        let content = "1\n00:00:xx,000 --> 00:00:01,000\nBad\n";
        let err = parse_srt(content).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTime { line: 2, .. }));
    }
}
