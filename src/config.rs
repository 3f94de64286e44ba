use crate::{expand_tilde, CONFIG_DIRECTORY, CONFIG_FILE, REFRESH_RATE};
use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Episodes TOML file or a directory of audio files
    pub catalogue: Option<PathBuf>,
    pub refresh_rate_ms: u64,
    pub seek_small: u64,
    pub seek_large: u64,
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalogue: None,
            refresh_rate_ms: REFRESH_RATE,
            seek_small: 5,
            seek_large: 30,
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: Color,
    pub rail: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            accent: Color::Rgb(4, 179, 97),
            rail: Color::Rgb(159, 117, 255),
            text: Color::Rgb(210, 210, 210),
            muted: Color::Rgb(100, 100, 100),
            error: Color::LightRed,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
    }

    /// Read the user's config. A missing file falls back to defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config at {}", path.display()))?;

        Self::from_toml(&file_str)
            .with_context(|| format!("Invalid config at {}", path.display()))
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let mut config = toml::from_str::<Config>(s)?;

        if let Some(catalogue) = config.catalogue.take() {
            config.catalogue = Some(expand_tilde(catalogue)?);
        }
        config.refresh_rate_ms = config.refresh_rate_ms.max(1);

        Ok(config)
    }
}
