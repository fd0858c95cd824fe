//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::chapters::ProgressPalette;
use crate::logging::LogLevel;
use crate::sync::{ElementIds, SyncOptions};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Page element identifiers.
    #[serde(default)]
    pub elements: ElementSettings,

    /// Bar colours and classes.
    #[serde(default)]
    pub appearance: AppearanceSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Element identifiers for [`crate::sync::ChapterSync::initialize`].
    pub fn element_ids(&self) -> ElementIds {
        ElementIds {
            media: self.elements.media_id.clone(),
            track: self.elements.track_id.clone(),
            bar: self.elements.bar_id.clone(),
        }
    }

    /// Rendering options for [`crate::sync::ChapterSync::initialize`].
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            palette: ProgressPalette::new(
                self.appearance.played_color.clone(),
                self.appearance.remaining_color.clone(),
            ),
            segment_class: self.appearance.segment_class.clone(),
            active_class: self.appearance.active_class.clone(),
        }
    }
}

/// Identifiers of the media, track and bar elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSettings {
    #[serde(default = "default_media_id")]
    pub media_id: String,

    #[serde(default = "default_track_id")]
    pub track_id: String,

    #[serde(default = "default_bar_id")]
    pub bar_id: String,
}

fn default_media_id() -> String {
    ElementIds::default().media
}

fn default_track_id() -> String {
    ElementIds::default().track
}

fn default_bar_id() -> String {
    ElementIds::default().bar
}

impl Default for ElementSettings {
    fn default() -> Self {
        Self {
            media_id: default_media_id(),
            track_id: default_track_id(),
            bar_id: default_bar_id(),
        }
    }
}

/// Chapter bar appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceSettings {
    /// Colour of the played part of the bar.
    #[serde(default = "default_played_color")]
    pub played_color: String,

    /// Colour of the remaining part of the bar.
    #[serde(default = "default_remaining_color")]
    pub remaining_color: String,

    /// Class on every segment.
    #[serde(default = "default_segment_class")]
    pub segment_class: String,

    /// Class on the segment under the playback position.
    #[serde(default = "default_active_class")]
    pub active_class: String,
}

fn default_played_color() -> String {
    SyncOptions::default().palette.played
}

fn default_remaining_color() -> String {
    SyncOptions::default().palette.remaining
}

fn default_segment_class() -> String {
    SyncOptions::default().segment_class
}

fn default_active_class() -> String {
    SyncOptions::default().active_class
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            played_color: default_played_color(),
            remaining_color: default_remaining_color(),
            segment_class: default_segment_class(),
            active_class: default_active_class(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Elements,
    Appearance,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::Elements,
        ConfigSection::Appearance,
        ConfigSection::Logging,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Elements => "elements",
            ConfigSection::Appearance => "appearance",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigSection::Elements => "Page element identifiers",
            ConfigSection::Appearance => "Chapter bar colours and classes",
            ConfigSection::Logging => "Logging configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[elements]"));
        assert!(toml.contains("[appearance]"));
        assert!(toml.contains("media_id = \"video\""));
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.elements.bar_id, settings.elements.bar_id);
        assert_eq!(parsed.logging.level, settings.logging.level);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[elements]\nmedia_id = \"tutorial-video\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        assert_eq!(parsed.elements.media_id, "tutorial-video");
        assert_eq!(parsed.elements.track_id, "chapters");
        assert_eq!(parsed.appearance.active_class, "active");
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }

    #[test]
    fn converts_to_sync_inputs() {
        let mut settings = Settings::default();
        settings.appearance.played_color = "red".to_string();
        settings.elements.bar_id = "bar".to_string();

        assert_eq!(settings.element_ids().bar, "bar");
        assert_eq!(settings.sync_options().palette.played, "red");
        assert_eq!(settings.sync_options().segment_class, "chapter-segment");
    }
}
