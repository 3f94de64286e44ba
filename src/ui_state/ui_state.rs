use super::{Mode, TransportView};
use crate::{
    config::ThemeConfig, domain::Episode, key_handler::Director, player::MediaElement, Catalogue,
    PlaybackState,
};
use anyhow::{Error, Result};
use ratatui::widgets::TableState;
use std::sync::Arc;
use tracing::error;

pub struct UiState {
    // Backend Modules
    pub(crate) catalogue: Catalogue,
    pub playback: PlaybackState,
    pub transport: TransportView,

    // Visual Elements
    pub(crate) theme: ThemeConfig,
    pub(crate) table_pos: TableState,

    mode: Mode,
    error: Option<String>,
}

impl UiState {
    pub fn new(catalogue: Catalogue, media: Box<dyn MediaElement>, theme: ThemeConfig) -> Self {
        let mut table_pos = TableState::default();
        if !catalogue.is_empty() {
            table_pos.select(Some(0));
        }

        UiState {
            catalogue,
            playback: PlaybackState::new(),
            transport: TransportView::new(media),
            theme,
            table_pos,
            mode: Mode::default(),
            error: None,
        }
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_error(&mut self, e: Error) {
        error!("{e:#}");
        self.error = Some(format!("{e:#}"));
        self.mode = Mode::Error;
    }

    pub fn get_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        if self.mode == Mode::Error {
            self.mode = Mode::Browse;
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
}

// ===============
//    SELECTION
// ===============
impl UiState {
    pub fn scroll(&mut self, director: Director) {
        let len = self.catalogue.len();
        if len == 0 {
            return;
        }
        let current = self.table_pos.selected().unwrap_or(0);

        let next = match director {
            Director::Up(n) => current.saturating_sub(n),
            Director::Down(n) => (current + n).min(len - 1),
            Director::Top => 0,
            Director::Bottom => len - 1,
        };
        self.table_pos.select(Some(next));
    }

    pub fn get_selected_idx(&self) -> Option<usize> {
        self.table_pos
            .selected()
            .filter(|idx| *idx < self.catalogue.len())
    }

    pub fn get_selected_episode(&self) -> Option<&Arc<Episode>> {
        self.get_selected_idx().and_then(|idx| self.catalogue.get(idx))
    }
}

// ===============
//    PLAYBACK
// ===============
impl UiState {
    /// Queue the whole catalogue and start at the selected row.
    pub fn play_from_selection(&mut self) -> Result<()> {
        if let Some(idx) = self.get_selected_idx() {
            let episodes = self.catalogue.episodes.clone();
            self.playback.play_list(episodes, idx)?;
        }
        Ok(())
    }

    pub fn play_selected_only(&mut self) {
        if let Some(episode) = self.get_selected_episode().cloned() {
            self.playback.play(episode);
        }
    }

    pub fn sync_transport(&mut self) -> Result<()> {
        self.transport.sync(&self.playback)
    }

    /// Drain the media element and apply each notification in arrival order.
    pub fn drain_media_events(&mut self) {
        for notice in self.transport.poll_events() {
            if let Err(e) = self.transport.handle_media_notice(notice, &mut self.playback) {
                self.set_error(e);
            }
        }
    }

    pub fn seek_by(&mut self, delta: i64) -> Result<()> {
        self.transport.seek_by(delta, &self.playback)
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }
}
