//! Core cue types.
//!
//! Cue times are `f64` seconds, matching what a media element's text track
//! exposes. Formatting to timestamp strings happens only for display.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Supported chapter track formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueFormat {
    /// WebVTT (.vtt)
    #[default]
    WebVtt,
    /// SubRip (.srt)
    Srt,
}

impl CueFormat {
    /// Detect format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "vtt" => Some(Self::WebVtt),
            "srt" => Some(Self::Srt),
            _ => None,
        }
    }

    /// Get the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::WebVtt => "vtt",
            Self::Srt => "srt",
        }
    }
}

/// A single timed-text cue used as a chapter marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Start time in seconds.
    pub start_time: f64,
    /// End time in seconds. Always greater than `start_time`.
    pub end_time: f64,
    /// Chapter label.
    pub text: String,
}

impl Cue {
    /// Create a new cue.
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether `time` falls inside `[start_time, end_time)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }

    /// Whether the timing is usable (finite, non-negative, end after start).
    pub fn is_valid(&self) -> bool {
        self.start_time.is_finite()
            && self.end_time.is_finite()
            && self.start_time >= 0.0
            && self.end_time > self.start_time
    }
}

/// An ordered list of cues, in track order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CueList {
    /// Cues in the order the track declares them.
    pub cues: Vec<Cue>,
    /// Format the cues were parsed from.
    pub format: CueFormat,
    /// Source file path (if loaded from file).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl CueList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified format.
    pub fn with_format(format: CueFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Number of cues.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Check if there are no cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Get an iterator over cues.
    pub fn iter(&self) -> impl Iterator<Item = &Cue> {
        self.cues.iter()
    }

    /// End of the last cue in seconds, or 0 for an empty list.
    pub fn span_end(&self) -> f64 {
        self.cues.iter().map(|c| c.end_time).fold(0.0, f64::max)
    }

    /// Consume the list, returning the cues.
    pub fn into_cues(self) -> Vec<Cue> {
        self.cues
    }
}

/// Format seconds as `HH:MM:SS.mmm`.
pub fn format_cue_time(seconds: f64) -> String {
    let ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let millis = ms % 1000;
    let total_secs = ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection() {
        assert_eq!(
            CueFormat::from_extension(Path::new("chapters.vtt")),
            Some(CueFormat::WebVtt)
        );
        assert_eq!(
            CueFormat::from_extension(Path::new("chapters.SRT")),
            Some(CueFormat::Srt)
        );
        assert_eq!(CueFormat::from_extension(Path::new("chapters.txt")), None);
    }

    #[test]
    fn cue_contains_is_half_open() {
        let cue = Cue::new(10.0, 20.0, "Intro");
        assert!(cue.contains(10.0));
        assert!(cue.contains(19.999));
        assert!(!cue.contains(20.0));
        assert!(!cue.contains(9.0));
    }

    #[test]
    fn cue_validity() {
        assert!(Cue::new(0.0, 1.0, "a").is_valid());
        assert!(!Cue::new(1.0, 1.0, "a").is_valid());
        assert!(!Cue::new(-1.0, 1.0, "a").is_valid());
        assert!(!Cue::new(0.0, f64::NAN, "a").is_valid());
    }

    #[test]
    fn format_cue_time_works() {
        assert_eq!(format_cue_time(0.0), "00:00:00.000");
        assert_eq!(format_cue_time(1.5), "00:00:01.500");
        assert_eq!(format_cue_time(3661.25), "01:01:01.250");
    }

    #[test]
    fn span_end_uses_latest_cue() {
        let mut list = CueList::new();
        list.cues.push(Cue::new(0.0, 30.0, "a"));
        list.cues.push(Cue::new(60.0, 90.0, "b"));
        assert_eq!(list.span_end(), 90.0);
        assert_eq!(CueList::new().span_end(), 0.0);
    }
}
