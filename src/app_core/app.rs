use crate::{
    key_handler::{self, Action},
    player::{MediaElement, MediaHandle},
    tui,
    ui_state::{Mode, UiState},
    Catalogue, Config,
};
use anyhow::{anyhow, Result};
use ratatui::{
    crossterm::event::{Event, KeyEventKind},
    DefaultTerminal,
};
use std::time::Duration;
use tracing::info;

pub struct Podcastr {
    pub(super) ui: UiState,
    config: Config,
}

impl Podcastr {
    pub fn new(config: Config, catalogue: Catalogue) -> Self {
        let media = MediaHandle::spawn(Duration::from_millis(config.refresh_rate_ms));
        Self::with_media(config, catalogue, Box::new(media))
    }

    pub fn with_media(config: Config, catalogue: Catalogue, media: Box<dyn MediaElement>) -> Self {
        let empty = catalogue.is_empty();
        let mut ui = UiState::new(catalogue, media, config.theme.clone());

        if empty {
            ui.set_error(anyhow!(
                "No episodes loaded!\n\nRun `podcastr <PATH>` with an episodes file or a folder of audio files, or set `catalogue` in the config."
            ));
        }

        Podcastr { ui, config }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        info!("podcastr started");
        let result = self.main_loop(&mut terminal);

        ratatui::restore();
        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let timeout = Duration::from_millis(self.config.refresh_rate_ms);

        // MAIN ROUTINE
        loop {
            // Check for user input
            match key_handler::next_event(timeout)? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    let action = key_handler::handle_key_event(
                        key,
                        &self.ui,
                        self.config.seek_small,
                        self.config.seek_large,
                    );
                    if let Some(action) = action {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
                _ => (),
            }

            self.ui.drain_media_events();
            self.sync();

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::QUIT {
                info!("shutting down");
                break;
            }
        }

        Ok(())
    }

    fn sync(&mut self) {
        if let Err(e) = self.ui.sync_transport() {
            self.ui.set_error(e);
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }
}

impl Podcastr {
    #[rustfmt::skip]
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Player
            Action::PlayFromHere    => self.ui.play_from_selection()?,
            Action::PlaySingle      => self.ui.play_selected_only(),
            Action::TogglePlay      => self.toggle_play(),
            Action::PlayNext        => self.play_next(),
            Action::PlayPrev        => self.play_prev(),
            Action::ToggleShuffle   => self.toggle_shuffle(),
            Action::ToggleLoop      => self.toggle_loop(),
            Action::Seek(delta)     => self.ui.seek_by(delta)?,

            // UI
            Action::Scroll(s)       => self.ui.scroll(s),
            Action::ClearError      => self.ui.clear_error(),
            Action::QUIT            => self.ui.set_mode(Mode::QUIT),
        }

        self.ui.sync_transport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{key_handler::Director, player::SilentMedia, Episode};
    use std::sync::Arc;

    fn app(titles: &[&str]) -> Podcastr {
        let catalogue = Catalogue {
            episodes: titles
                .iter()
                .map(|t| Arc::new(Episode::new(*t, "Host", 300, format!("/tmp/{t}.mp3"))))
                .collect(),
            source: None,
        };
        Podcastr::with_media(Config::default(), catalogue, Box::new(SilentMedia))
    }

    #[test]
    fn player_actions_drive_the_queue() {
        let mut app = app(&["A", "B", "C"]);
        app.handle_action(Action::Scroll(Director::Down(1))).unwrap();
        app.handle_action(Action::PlayFromHere).unwrap();
        assert_eq!(app.ui().playback.current_index(), 1);
        assert!(app.ui().transport.has_source());

        app.handle_action(Action::PlayNext).unwrap();
        assert_eq!(app.ui().playback.current_index(), 2);
        app.handle_action(Action::PlayPrev).unwrap();
        assert_eq!(app.ui().playback.current_index(), 1);

        app.handle_action(Action::TogglePlay).unwrap();
        assert!(!app.ui().is_playing());
        app.handle_action(Action::ToggleShuffle).unwrap();
        app.handle_action(Action::ToggleLoop).unwrap();
        assert!(app.ui().playback.is_shuffling() && app.ui().playback.is_looping());

        app.handle_action(Action::Seek(42)).unwrap();
        assert_eq!(app.ui().transport.progress(), 42);
    }

    #[test]
    fn empty_catalogue_opens_with_a_hint() {
        let mut app = app(&[]);
        assert_eq!(app.ui().get_mode(), Mode::Error);

        app.handle_action(Action::ClearError).unwrap();
        assert_eq!(app.ui().get_mode(), Mode::Browse);
        app.handle_action(Action::QUIT).unwrap();
        assert_eq!(app.ui().get_mode(), Mode::QUIT);
    }
}

