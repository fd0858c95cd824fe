//! WebVTT chapter track parser.
//!
//! ```text
//! WEBVTT
//!
//! NOTE chapters for the quick-start video
//!
//! intro
//! 00:00.000 --> 01:30.000
//! Introduction
//!
//! 01:30.000 --> 04:00.000 align:start
//! Building the model
//! ```
//!
//! Cue identifiers and cue settings are accepted and ignored. `NOTE`,
//! `STYLE` and `REGION` blocks are skipped.

use super::{clock_to_secs, fraction_to_secs, normalize_line_endings, split_blocks, Block};
use crate::cues::error::ParseError;
use crate::cues::types::{Cue, CueFormat, CueList};

/// Parse WebVTT content into a `CueList`.
pub fn parse_vtt(content: &str) -> Result<CueList, ParseError> {
    let mut list = CueList::with_format(CueFormat::WebVtt);
    let content = normalize_line_endings(content);
    let content = content.trim_start_matches('\u{feff}');

    let mut blocks = split_blocks(content).into_iter();

    let header = blocks.next().ok_or(ParseError::MissingHeader)?;
    if !is_signature(header.lines[0]) {
        return Err(ParseError::MissingHeader);
    }

    for block in blocks {
        if is_metadata_block(&block) {
            continue;
        }
        if let Some(cue) = parse_cue_block(&block)? {
            list.cues.push(cue);
        }
    }

    Ok(list)
}

/// `WEBVTT` alone or followed by a space/tab and free text.
fn is_signature(line: &str) -> bool {
    match line.strip_prefix("WEBVTT") {
        Some(rest) => rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t'),
        None => false,
    }
}

fn is_metadata_block(block: &Block<'_>) -> bool {
    let first = block.lines[0];
    ["NOTE", "STYLE", "REGION"].iter().any(|kw| {
        first
            .strip_prefix(kw)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']))
    })
}

/// Parse one cue block. Blocks without a timing line are dropped.
fn parse_cue_block(block: &Block<'_>) -> Result<Option<Cue>, ParseError> {
    // Timing is on the first line, or the second when an identifier precedes it.
    let Some(timing_idx) = block.lines.iter().take(2).position(|l| l.contains("-->")) else {
        return Ok(None);
    };

    let timing_line = block.lines[timing_idx];
    let line_num = block.first_line + timing_idx;

    let (start, end) = parse_vtt_timing(timing_line)
        .ok_or_else(|| ParseError::invalid_time(line_num, timing_line))?;

    let cue = Cue::new(start, end, block.lines[timing_idx + 1..].join("\n"));
    if !cue.is_valid() {
        return Err(ParseError::invalid_cue(
            line_num,
            format!("end {end} is not after start {start}"),
        ));
    }

    Ok(Some(cue))
}

/// Parse `start --> end [settings]`.
fn parse_vtt_timing(line: &str) -> Option<(f64, f64)> {
    let (start, rest) = line.split_once("-->")?;
    let end = rest.split_whitespace().next()?;
    Some((parse_vtt_time(start)?, parse_vtt_time(end)?))
}

/// Parse a WebVTT timestamp: `HH:MM:SS.mmm` or `MM:SS.mmm`.
///
/// Returns time in seconds.
pub fn parse_vtt_time(s: &str) -> Option<f64> {
    let s = s.trim();
    let parts: Vec<&str> = s.split(':').collect();

    let (hours, minutes, rest) = match parts.as_slice() {
        [h, m, rest] => (h.parse::<u64>().ok()?, m.parse::<u64>().ok()?, *rest),
        [m, rest] => (0, m.parse::<u64>().ok()?, *rest),
        _ => return None,
    };

    let (secs, frac) = rest.split_once('.')?;
    let seconds: u64 = secs.parse().ok()?;

    Some(clock_to_secs(hours, minutes, seconds)? as f64 + fraction_to_secs(frac)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vtt_time_works() {
        assert!((parse_vtt_time("00:00:01.500").unwrap() - 1.5).abs() < 1e-9);
        assert!((parse_vtt_time("01:30.250").unwrap() - 90.25).abs() < 1e-9);
        assert!((parse_vtt_time("02:00:00.000").unwrap() - 7200.0).abs() < 1e-9);
        assert!(parse_vtt_time("00:00:01").is_none());
        assert!(parse_vtt_time("00:61.000").is_none());
        assert!(parse_vtt_time("1.000").is_none());
    }

    #[test]
    fn oversized_hours_are_rejected() {
        assert!(parse_vtt_time("18446744073709551615:00:00.000").is_none());

        let content = "WEBVTT\n\n18446744073709551615:00:00.000 --> 00:00:01.000\nHuge\n";
        let err = parse_vtt(content).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTime { line: 3, .. }));
    }

    #[test]
    fn parse_basic_vtt() {
        let content = "WEBVTT\n\n00:00.000 --> 00:30.000\nIntro\n\n00:30.000 --> 01:00.000\nSetup\n";
        let list = parse_vtt(content).unwrap();
        assert_eq!(list.format, CueFormat::WebVtt);
        assert_eq!(
            list.cues,
            vec![Cue::new(0.0, 30.0, "Intro"), Cue::new(30.0, 60.0, "Setup")]
        );
    }

    #[test]
    fn identifiers_settings_and_notes_are_ignored() {
        let content = "WEBVTT - chapters\n\nNOTE\nwritten by hand\n\nSTYLE\n::cue { color: red }\n\nch1\n00:00:00.000 --> 00:00:45.000 align:start position:10%\nFirst chapter\n\nch2\n00:00:45.000 --> 00:02:00.000\nSecond\nchapter\n";
        let list = parse_vtt(content).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.cues[0], Cue::new(0.0, 45.0, "First chapter"));
        assert_eq!(list.cues[1].text, "Second\nchapter");
    }

    #[test]
    fn missing_header_is_rejected() {
        let err = parse_vtt("00:00.000 --> 00:01.000\nA\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader));
        assert!(matches!(parse_vtt("").unwrap_err(), ParseError::MissingHeader));
        assert!(matches!(
            parse_vtt("WEBVTTX\n").unwrap_err(),
            ParseError::MissingHeader
        ));
    }

    #[test]
    fn bom_and_crlf_are_tolerated() {
        let content = "\u{feff}WEBVTT\r\n\r\n00:00.000 --> 00:10.000\r\nOnly\r\n";
        let list = parse_vtt(content).unwrap();
        assert_eq!(list.cues, vec![Cue::new(0.0, 10.0, "Only")]);
    }

    #[test]
    fn bad_timestamps_report_line() {
        let content = "WEBVTT\n\nid\n00:00.0x0 --> 00:10.000\nBroken\n";
        let err = parse_vtt(content).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTime { line: 4, .. }));
    }

    #[test]
    fn empty_cue_is_rejected() {
        let content = "WEBVTT\n\n00:10.000 --> 00:10.000\nZero\n";
        let err = parse_vtt(content).unwrap_err();
        assert!(matches!(err, ParseError::InvalidCue { line: 3, .. }));
    }
}
