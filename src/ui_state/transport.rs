use crate::{
    clock,
    player::{MediaElement, MediaEvent, MediaNotice},
    PlaybackState,
};
use anyhow::{anyhow, Result};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Which transport buttons accept input, plus the toggle highlights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub play_pause: bool,
    pub previous: bool,
    pub next: bool,
    pub shuffle: bool,
    pub looping: bool,

    pub is_playing: bool,
    pub shuffle_active: bool,
    pub loop_active: bool,
}

/// Binds a media element to the shared `PlaybackState`.
///
/// `sync` runs the effects after a state change, `handle_media_event` feeds
/// element notifications back into the state. Progress is owned here and
/// never stored in the state holder.
pub struct TransportView {
    media: Box<dyn MediaElement>,
    progress: u64,

    mounted: Option<u64>,
    tracking: bool,
    observed_playing: bool,
    observed_looping: Option<bool>,
}

impl TransportView {
    pub fn new(media: Box<dyn MediaElement>) -> Self {
        TransportView {
            media,
            progress: 0,

            mounted: None,
            tracking: false,
            observed_playing: false,
            observed_looping: None,
        }
    }

    pub fn progress(&self) -> u64 {
        self.progress
    }

    pub fn has_source(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn poll_events(&mut self) -> Vec<MediaNotice> {
        self.media.poll_events()
    }

    /// Bring the media element in line with `state`.
    pub fn sync(&mut self, state: &PlaybackState) -> Result<()> {
        self.sync_source(state)?;

        if self.mounted.is_some() && self.observed_looping != Some(state.is_looping()) {
            self.media.set_looping(state.is_looping())?;
            self.observed_looping = Some(state.is_looping());
        }

        // Fires on transitions only, never on a plain redraw
        if self.observed_playing != state.is_playing() {
            self.observed_playing = state.is_playing();

            if self.mounted.is_some() {
                match state.is_playing() {
                    true => self.media.play()?,
                    false => self.media.pause()?,
                }
            }
        }

        Ok(())
    }

    fn sync_source(&mut self, state: &PlaybackState) -> Result<()> {
        let wanted = state.current_episode().map(|ep| (state.generation(), ep));

        match (wanted, self.mounted) {
            (Some((generation, _)), Some(mounted)) if generation == mounted => {}
            (Some((generation, episode)), _) => {
                info!(title = %episode.title, url = %episode.url, "mounting episode");

                self.media.load(&episode.url, true, generation)?;
                self.mounted = Some(generation);
                self.progress = 0;
                self.tracking = false;
                self.observed_looping = None;
            }
            (None, Some(_)) => {
                debug!("queue emptied, unmounting source");

                self.media.unload()?;
                self.mounted = None;
                self.progress = 0;
                self.tracking = false;
            }
            (None, None) => {}
        }
        Ok(())
    }

    /// Apply a notice from the element, dropping anything raised by a source
    /// that is no longer mounted.
    pub fn handle_media_notice(
        &mut self,
        notice: MediaNotice,
        state: &mut PlaybackState,
    ) -> Result<()> {
        match notice.source {
            Some(source) if self.mounted != Some(source) => {
                debug!(source, event = ?notice.event, "dropping event from a replaced source");
                Ok(())
            }
            _ => self.handle_media_event(notice.event, state),
        }
    }

    /// React to an event of the mounted source. Element errors come back as `Err`.
    pub fn handle_media_event(
        &mut self,
        event: MediaEvent,
        state: &mut PlaybackState,
    ) -> Result<()> {
        match event {
            MediaEvent::MetadataLoaded => {
                self.progress = 0;
                self.media.seek(Duration::ZERO)?;
                self.tracking = true;
            }
            MediaEvent::TimeUpdate(position) => {
                if self.tracking {
                    self.progress = position.as_secs();
                }
            }
            // The element is already where the flag says, so the play/pause
            // effect must not echo it back
            MediaEvent::Play => {
                state.set_playing_state(true);
                self.observed_playing = true;
            }
            MediaEvent::Pause => {
                state.set_playing_state(false);
                self.observed_playing = false;
            }
            MediaEvent::Ended => self.handle_episode_ended(state),
            MediaEvent::Error(e) => {
                warn!("media element error: {e}");
                return Err(anyhow!(e));
            }
        }
        Ok(())
    }

    fn handle_episode_ended(&mut self, state: &mut PlaybackState) {
        match state.has_next() {
            true => state.play_next(),
            false => state.clear_player_state(),
        }
    }

    /// Move the playhead to `amount` seconds, ahead of the element's own clock.
    pub fn seek(&mut self, amount: u64, state: &PlaybackState) -> Result<()> {
        let Some(episode) = state.current_episode() else {
            return Ok(());
        };

        let amount = amount.min(episode.duration);
        self.media.seek(Duration::from_secs(amount))?;
        self.progress = amount;

        Ok(())
    }

    pub fn seek_by(&mut self, delta: i64, state: &PlaybackState) -> Result<()> {
        let target = self.progress.saturating_add_signed(delta);
        self.seek(target, state)
    }

    pub fn controls(&self, state: &PlaybackState) -> Controls {
        let active = state.current_episode().is_some();

        Controls {
            play_pause: active,
            previous: active && state.has_previous(),
            next: active && state.has_next(),
            shuffle: active && state.len() > 1,
            looping: active,

            is_playing: state.is_playing(),
            shuffle_active: state.is_shuffling(),
            loop_active: state.is_looping(),
        }
    }

    pub fn elapsed_display(&self) -> String {
        clock(self.progress)
    }

    pub fn duration_display(&self, state: &PlaybackState) -> String {
        clock(state.current_episode().map_or(0, |ep| ep.duration))
    }

    /// Slider position in `[0.0, 1.0]`.
    pub fn ratio(&self, state: &PlaybackState) -> f64 {
        match state.current_episode() {
            Some(ep) if ep.duration > 0 => (self.progress.min(ep.duration) as f64) / ep.duration as f64,
            _ => 0.0,
        }
    }
}
