use crate::{get_readable_duration, DurationStyle};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Episode {
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Length in whole seconds
    #[serde(default)]
    pub duration: u64,
    pub url: String,
}

impl Episode {
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        duration: u64,
        url: impl Into<String>,
    ) -> Self {
        Episode {
            title: title.into(),
            members: members.into(),
            thumbnail: String::new(),
            duration,
            url: url.into(),
        }
    }

    pub fn get_duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    /// Short `m:ss` length for listings.
    pub fn get_duration_str(&self) -> String {
        get_readable_duration(self.get_duration(), DurationStyle::Compact)
    }

    /// Spelled out length, e.g. `42m 07s`.
    pub fn get_length_str(&self) -> String {
        get_readable_duration(self.get_duration(), DurationStyle::Clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_strings() {
        let ep = Episode::new("Ep", "Host", 2527, "/tmp/ep.mp3");
        assert_eq!(ep.get_duration(), Duration::from_secs(2527));
        assert_eq!(ep.get_duration_str(), "42:07");
        assert_eq!(ep.get_length_str(), "42m 07s");

        let short = Episode::new("Short", "Host", 9, "/tmp/short.mp3");
        assert_eq!(short.get_length_str(), "09s");
    }

    #[test]
    fn thumbnail_and_members_are_optional_in_toml() {
        let ep: Episode = toml::from_str("title = \"Ep\"\nurl = \"/tmp/ep.mp3\"").unwrap();
        assert!(ep.members.is_empty());
        assert!(ep.thumbnail.is_empty());
        assert_eq!(ep.duration, 0);
    }
}
