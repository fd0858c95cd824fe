//! Chapter bar segment types.

use serde::{Deserialize, Serialize};

use crate::cues::Cue;

/// One rendered segment of the chapter bar, derived from a cue.
///
/// Segments are built once per cue and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterSegment {
    /// Cue start time in seconds (seek target on click).
    pub start_time: f64,
    /// Cue end time in seconds.
    pub end_time: f64,
    /// Share of the bar width, in `[0, 1]`.
    pub width_fraction: f64,
    /// Visible label (the cue text).
    pub label: String,
}

impl ChapterSegment {
    /// Derive a segment from a cue for media of the given duration.
    ///
    /// `duration` must be positive and finite.
    pub fn from_cue(cue: &Cue, duration: f64) -> Self {
        let fraction = (cue.end_time - cue.start_time) / duration;
        Self {
            start_time: cue.start_time,
            end_time: cue.end_time,
            width_fraction: fraction.clamp(0.0, 1.0),
            label: cue.text.clone(),
        }
    }

    /// Width as a CSS percentage value, e.g. `"25%"`.
    pub fn width_css(&self) -> String {
        format!("{}%", css_number(self.width_fraction * 100.0))
    }

    /// Whether playback at `time` is inside this chapter.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

/// Format a number for CSS with at most four decimals and no trailing zeros.
pub fn css_number(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_from_cue() {
        let seg = ChapterSegment::from_cue(&Cue::new(30.0, 60.0, "Setup"), 120.0);
        assert_eq!(seg.start_time, 30.0);
        assert!((seg.width_fraction - 0.25).abs() < 1e-12);
        assert_eq!(seg.label, "Setup");
        assert_eq!(seg.width_css(), "25%");
    }

    #[test]
    fn overlong_cue_is_clamped() {
        let seg = ChapterSegment::from_cue(&Cue::new(0.0, 200.0, "Too long"), 120.0);
        assert_eq!(seg.width_fraction, 1.0);
    }

    #[test]
    fn css_number_trims() {
        assert_eq!(css_number(25.0), "25");
        assert_eq!(css_number(33.333333333), "33.3333");
        assert_eq!(css_number(12.5), "12.5");
        assert_eq!(css_number(0.0), "0");
    }
}
