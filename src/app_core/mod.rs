mod app;
mod player;

pub use app::Podcastr;

use crate::{CONFIG_DIRECTORY, LOG_FILE};
use anyhow::{anyhow, Result};
use std::{fs::File, sync::Mutex};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PODCASTR_LOG";

/// Route tracing output to a file, the terminal belongs to the UI.
pub fn init_logging() -> Result<()> {
    let Some(log_dir) = dirs::cache_dir().map(|dir| dir.join(CONFIG_DIRECTORY)) else {
        return Ok(());
    };
    std::fs::create_dir_all(&log_dir)?;
    let file = File::create(log_dir.join(LOG_FILE))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("podcastr=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Could not start logging: {e}"))
}
