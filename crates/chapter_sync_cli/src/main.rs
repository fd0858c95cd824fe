//! chapter-sync - pre-render chapter bars from the command line
//!
//! Loads a chapter track, replays the page events on the headless page and
//! prints the resulting bar. Useful for static pages and for checking a
//! track before publishing it.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use chapter_sync::chapters::progress_percent;
use chapter_sync::config::{ConfigManager, ConfigSection, Settings};
use chapter_sync::cues::{format_cue_time, parse_file};
use chapter_sync::dom::{HeadlessMedia, HeadlessPage, HeadlessTrack};
use chapter_sync::host::{EventKind, EventTarget, Host, MediaElement};
use chapter_sync::logging::{init_tracing, init_tracing_with_file, LogLevel};
use chapter_sync::sync::ChapterSync;

#[derive(Debug, Parser)]
#[command(name = "chapter-sync", version, about = "Render video chapter bars")]
struct Cli {
    /// Log level (RUST_LOG overrides it).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Also write logs to a daily file in this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the chapter bar for a track and print it.
    Render {
        /// Chapter track (.vtt or .srt).
        cues: PathBuf,

        /// Media duration in seconds.
        #[arg(long)]
        duration: f64,

        /// Playback position in seconds.
        #[arg(long)]
        position: Option<f64>,

        /// Print segments as JSON instead of HTML.
        #[arg(long)]
        json: bool,

        /// Config file; created with defaults if missing.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the cues of a chapter track.
    Cues {
        /// Chapter track (.vtt or .srt).
        cues: PathBuf,
    },
    /// Store the default log level in a config file.
    SetLogLevel {
        /// Config file; created with defaults if missing.
        config: PathBuf,

        /// Level to store.
        level: LogLevel,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config comes first: it carries the default log level.
    let settings = match &cli.command {
        Command::Render {
            config: Some(path), ..
        } => load_settings(path)?,
        _ => Settings::default(),
    };

    let level = cli.log_level.unwrap_or(settings.logging.level);
    let _log_guard = match &cli.log_dir {
        Some(dir) => Some(
            init_tracing_with_file(level, dir)
                .with_context(|| format!("Failed to set up logging in {}", dir.display()))?,
        ),
        None => {
            init_tracing(level);
            None
        }
    };

    tracing::debug!(version = chapter_sync::version(), "chapter-sync starting");

    match cli.command {
        Command::Render {
            cues,
            duration,
            position,
            json,
            ..
        } => render(&settings, &cues, duration, position, json),
        Command::Cues { cues } => list_cues(&cues),
        Command::SetLogLevel { config, level } => set_log_level(&config, level),
    }
}

fn load_settings(path: &Path) -> Result<Settings> {
    let mut manager = ConfigManager::new(path);
    manager
        .load_or_create()
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    Ok(manager.settings().clone())
}

/// Deliver an event the way a browser would: only to subscribed listeners.
fn deliver(page: &mut HeadlessPage, sync: &mut ChapterSync, target: EventTarget, event: EventKind) {
    if page.fire(&target, event) {
        sync.dispatch(page, &target, event);
    } else {
        tracing::debug!(%target, %event, "No listener for event");
    }
}

fn render(
    settings: &Settings,
    cues_path: &Path,
    duration: f64,
    position: Option<f64>,
    json: bool,
) -> Result<()> {
    let cues = parse_file(cues_path)
        .with_context(|| format!("Failed to load chapter track {}", cues_path.display()))?;
    if cues.span_end() > duration {
        tracing::warn!(
            span_end = cues.span_end(),
            duration,
            "Chapters run past the media end; segments are clamped"
        );
    }

    let ids = settings.element_ids();
    let mut page = HeadlessPage::new();
    page.insert_media(&ids.media, HeadlessMedia::new());
    page.insert_track(&ids.track, HeadlessTrack::new());
    page.insert_bar(&ids.bar);

    let mut sync = ChapterSync::initialize(&mut page, ids.clone(), settings.sync_options())
        .context("Chapter bar elements missing from page")?;

    if let Some(media) = page.media_mut(&ids.media) {
        media.load_metadata(duration);
    }
    deliver(
        &mut page,
        &mut sync,
        EventTarget::element(&ids.media),
        EventKind::LoadedData,
    );

    if let Some(track) = page.track_mut(&ids.track) {
        track.load(cues.into_cues());
    }
    deliver(
        &mut page,
        &mut sync,
        EventTarget::element(&ids.track),
        EventKind::CuesLoaded,
    );

    if !sync.is_built() {
        bail!(
            "Chapter bar not built: duration must be positive and {} must contain cues",
            cues_path.display()
        );
    }

    if let Some(position) = position {
        if let Some(media) = page.media_mut(&ids.media) {
            media.set_current_time(position);
        }
        deliver(
            &mut page,
            &mut sync,
            EventTarget::element(&ids.media),
            EventKind::TimeUpdate,
        );
    }

    let bar = page
        .bar(&ids.bar)
        .context("Chapter bar container disappeared")?;

    if json {
        let current = page.media(&ids.media).map_or(0.0, |m| m.current_time());
        let segments: Vec<_> = sync.segments().collect();
        let output = serde_json::json!({
            "duration": duration,
            "position": current,
            "progress": progress_percent(current, duration),
            "background": bar.background(),
            "active": sync.active_segment().map(|s| s.label.as_str()),
            "segments": segments,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", bar.render_html());
    }

    Ok(())
}

fn list_cues(path: &Path) -> Result<()> {
    let cues = parse_file(path)
        .with_context(|| format!("Failed to load chapter track {}", path.display()))?;

    for (i, cue) in cues.iter().enumerate() {
        println!(
            "{:>3}  {} --> {}  {}",
            i + 1,
            format_cue_time(cue.start_time),
            format_cue_time(cue.end_time),
            cue.text
        );
    }
    println!(
        "{} cues ({}), ending at {}",
        cues.len(),
        cues.format.extension(),
        format_cue_time(cues.span_end())
    );

    Ok(())
}

fn set_log_level(path: &Path, level: LogLevel) -> Result<()> {
    let mut manager = ConfigManager::new(path);
    manager
        .load_or_create()
        .with_context(|| format!("Failed to load config {}", path.display()))?;

    manager.settings_mut().logging.level = level;
    manager
        .update_section(ConfigSection::Logging)
        .with_context(|| format!("Failed to update config {}", path.display()))?;

    tracing::info!(path = %path.display(), %level, "Stored log level");
    Ok(())
}
