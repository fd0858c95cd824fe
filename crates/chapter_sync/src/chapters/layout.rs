//! Chapter bar layout.
//!
//! Pure functions turning a cue list plus a media duration into bar
//! segments. Gaps between cues are not filled; they show as empty bar.

use crate::cues::Cue;

use super::types::ChapterSegment;

/// Whether a duration is usable for layout (positive and finite).
pub fn is_known_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}

/// Lay out one segment per cue, in cue order.
///
/// Returns `None` when the data is not ready yet: unknown duration or no
/// cues. Callers retry on the next data event.
pub fn layout_segments(cues: &[Cue], duration: f64) -> Option<Vec<ChapterSegment>> {
    if !is_known_duration(duration) || cues.is_empty() {
        return None;
    }

    Some(
        cues.iter()
            .map(|cue| ChapterSegment::from_cue(cue, duration))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cues() -> Vec<Cue> {
        vec![
            Cue::new(0.0, 30.0, "Intro"),
            Cue::new(30.0, 45.0, "Setup"),
            // gap 45..60
            Cue::new(60.0, 120.0, "Build"),
        ]
    }

    #[test]
    fn widths_follow_cue_durations() {
        let segments = layout_segments(&cues(), 120.0).unwrap();
        let widths: Vec<f64> = segments.iter().map(|s| s.width_fraction).collect();
        let expected = [0.25, 0.125, 0.5];
        for (w, e) in widths.iter().zip(expected) {
            assert!((w - e).abs() < 1e-12);
        }
        // Gap means the bar is not fully covered.
        assert!((widths.iter().sum::<f64>() - 0.875).abs() < 1e-12);
    }

    #[test]
    fn order_is_preserved() {
        let labels: Vec<String> = layout_segments(&cues(), 120.0)
            .unwrap()
            .into_iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, ["Intro", "Setup", "Build"]);
    }

    #[test]
    fn not_ready_without_duration_or_cues() {
        assert!(layout_segments(&cues(), 0.0).is_none());
        assert!(layout_segments(&cues(), f64::NAN).is_none());
        assert!(layout_segments(&cues(), f64::INFINITY).is_none());
        assert!(layout_segments(&[], 120.0).is_none());
    }
}
