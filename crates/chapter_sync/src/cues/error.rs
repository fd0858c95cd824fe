//! Cue loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading a chapter track from disk.
#[derive(Debug, thiserror::Error)]
pub enum CueError {
    /// Failed to read the track file.
    #[error("Failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parse error.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}

/// Errors that can occur during cue parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Invalid or malformed time format.
    #[error("Invalid time format at line {line}: '{value}'")]
    InvalidTime { line: usize, value: String },

    /// Timing parsed but describes an unusable cue.
    #[error("Invalid cue at line {line}: {message}")]
    InvalidCue { line: usize, message: String },

    /// WebVTT file without the `WEBVTT` signature.
    #[error("Missing WEBVTT header")]
    MissingHeader,
}

impl CueError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl ParseError {
    /// Create an invalid time error.
    pub fn invalid_time(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidTime {
            line,
            value: value.into(),
        }
    }

    /// Create an invalid cue error.
    pub fn invalid_cue(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidCue {
            line,
            message: message.into(),
        }
    }
}
