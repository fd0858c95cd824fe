//! Chapter Sync - chapter bar synchronisation for documentation videos
//!
//! Builds a clickable chapter bar from a media element's chapter track and
//! keeps it in step with playback. The page is reached through the `host`
//! traits; `dom` provides an in-memory page for tools and tests.

pub mod chapters;
pub mod config;
pub mod cues;
pub mod dom;
pub mod host;
pub mod logging;
pub mod sync;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
