use anyhow::{anyhow, Result};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub mod app_core;
pub mod config;
pub mod domain;
pub mod key_handler;
pub mod library;
pub mod playback;
pub mod player;
pub mod tui;
pub mod ui_state;

pub use config::Config;
pub use domain::Episode;
pub use library::Catalogue;
pub use playback::{PlaybackError, PlaybackState};
pub use player::{MediaElement, MediaEvent, MediaHandle, MediaNotice};
pub use ui_state::{Controls, TransportView, UiState};

pub const CONFIG_DIRECTORY: &str = "podcastr";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "podcastr.log";

// ~30fps
pub const REFRESH_RATE: u64 = 33;

pub enum DurationStyle {
    Clean,
    Clock,
    Compact,
}

pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let mut secs = duration.as_secs();
    let mins = secs / 60;
    secs %= 60;

    match style {
        DurationStyle::Clean => match mins {
            0 => format!("{secs:02}s"),
            _ => format!("{mins}m {secs:02}s"),
        },
        DurationStyle::Clock => format!("{mins:02}:{secs:02}"),
        DurationStyle::Compact => format!("{mins}:{secs:02}"),
    }
}

/// Shorthand for the `mm:ss` readout used by the transport.
pub fn clock(secs: u64) -> String {
    get_readable_duration(Duration::from_secs(secs), DurationStyle::Clock)
}

pub(crate) fn truncate_at_last_space(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }

    let byte_limit = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(limit)
        .unwrap_or(s.len());

    match s[..byte_limit].rfind(' ') {
        Some(last_space) => {
            let mut truncated = s[..last_space].to_string();
            truncated.push('…');
            truncated
        }
        None => {
            let char_boundary = s[..byte_limit]
                .char_indices()
                .map(|(i, _)| i)
                .last()
                .unwrap_or(0);

            let mut truncated = s[..char_boundary].to_string();
            truncated.push('…');
            truncated
        }
    }
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if path_str == "~" {
        return Err(anyhow!(
            "Refusing to use the home directory itself. Please provide a more specific path!"
        ));
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error reading path with tilde (~): {path_str}"))
}

/// Turns an episode url into a local path. Remote schemes yield `None`.
pub fn local_path(url: &str) -> Option<PathBuf> {
    if let Some(stripped) = url.strip_prefix("file://") {
        return Some(PathBuf::from(stripped));
    }

    match url.split_once("://") {
        Some(_) => None,
        None => expand_tilde(url).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(clock(0), "00:00");
        assert_eq!(clock(42), "00:42");
        assert_eq!(clock(180), "03:00");
        assert_eq!(clock(3725), "62:05");
    }

    #[test]
    fn other_duration_styles() {
        let d = Duration::from_secs(187);
        assert_eq!(get_readable_duration(d, DurationStyle::Compact), "3:07");
        assert_eq!(get_readable_duration(d, DurationStyle::Clean), "3m 07s");
        assert_eq!(
            get_readable_duration(Duration::from_secs(9), DurationStyle::Clean),
            "09s"
        );
    }

    #[test]
    fn truncation_prefers_word_boundaries() {
        assert_eq!(truncate_at_last_space("short", 10), "short");
        assert_eq!(truncate_at_last_space("hello there world", 12), "hello there…");
        assert_eq!(truncate_at_last_space("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn local_path_handles_schemes() {
        assert_eq!(
            local_path("file:///tmp/ep.mp3"),
            Some(PathBuf::from("/tmp/ep.mp3"))
        );
        assert_eq!(local_path("/tmp/ep.mp3"), Some(PathBuf::from("/tmp/ep.mp3")));
        assert_eq!(local_path("https://example.com/ep.mp3"), None);
    }
}
