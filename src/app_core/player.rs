use crate::app_core::Podcastr;
use tracing::debug;

impl Podcastr {
    pub(super) fn toggle_play(&mut self) {
        self.ui.playback.toggle_play();
        debug!(playing = self.ui.playback.is_playing(), "toggled playback");
    }

    pub(super) fn play_next(&mut self) {
        self.ui.playback.play_next();
        debug!(index = self.ui.playback.current_index(), "skipped forward");
    }

    pub(super) fn play_prev(&mut self) {
        self.ui.playback.play_previous();
        debug!(index = self.ui.playback.current_index(), "skipped back");
    }

    pub(super) fn toggle_shuffle(&mut self) {
        self.ui.playback.toggle_shuffle();
        debug!(shuffle = self.ui.playback.is_shuffling(), "toggled shuffle");
    }

    pub(super) fn toggle_loop(&mut self) {
        self.ui.playback.toggle_loop();
        debug!(looping = self.ui.playback.is_looping(), "toggled loop");
    }
}
