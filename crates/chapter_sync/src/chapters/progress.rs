//! Playback progress styling for the chapter bar.

use super::layout::is_known_duration;
use super::types::css_number;

/// Played share of the media as a percentage in `[0, 100]`.
///
/// Returns `None` when the duration is zero, negative or not finite, or the
/// position is NaN, so nothing invalid reaches a rendered style.
pub fn progress_percent(current_time: f64, duration: f64) -> Option<f64> {
    if !is_known_duration(duration) || current_time.is_nan() {
        return None;
    }
    Some((current_time / duration * 100.0).clamp(0.0, 100.0))
}

/// Colours of the played/remaining split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressPalette {
    pub played: String,
    pub remaining: String,
}

impl ProgressPalette {
    pub fn new(played: impl Into<String>, remaining: impl Into<String>) -> Self {
        Self {
            played: played.into(),
            remaining: remaining.into(),
        }
    }

    /// Hard-stop gradient placing the played/remaining boundary at `percent`.
    pub fn gradient(&self, percent: f64) -> String {
        let at = css_number(percent);
        format!(
            "linear-gradient(to right, {} {}%, {} {}%)",
            self.played, at, self.remaining, at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_progress() {
        assert_eq!(progress_percent(30.0, 120.0), Some(25.0));
    }

    #[test]
    fn invalid_duration_is_skipped() {
        assert_eq!(progress_percent(30.0, 0.0), None);
        assert_eq!(progress_percent(30.0, f64::NAN), None);
        assert_eq!(progress_percent(f64::NAN, 120.0), None);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(progress_percent(130.0, 120.0), Some(100.0));
        assert_eq!(progress_percent(-1.0, 120.0), Some(0.0));
    }

    #[test]
    fn gradient_format() {
        let palette = ProgressPalette::new("#1e88e5", "#e0e0e0");
        assert_eq!(
            palette.gradient(25.0),
            "linear-gradient(to right, #1e88e5 25%, #e0e0e0 25%)"
        );
    }
}
