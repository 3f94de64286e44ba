use super::PlaybackError;
use crate::domain::Episode;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Queue, cursor and transport flags shared by every view.
///
/// Mutations bump `revision` only when something actually changed, so an
/// observer can compare revisions between frames instead of diffing fields.
/// `generation` moves every time an episode is (re)selected for playback,
/// including a shuffle that lands on the index already playing.
#[derive(Default)]
pub struct PlaybackState {
    episodes: Vec<Arc<Episode>>,
    current: usize,

    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    revision: u64,
    generation: u64,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, episode: Arc<Episode>) {
        debug!(title = %episode.title, "play single episode");

        self.episodes = vec![episode];
        self.current = 0;
        self.is_playing = true;
        self.select();
    }

    /// Replace the queue and start at `start`.
    ///
    /// An out of range `start` is rejected and the state is left untouched.
    pub fn play_list(
        &mut self,
        episodes: Vec<Arc<Episode>>,
        start: usize,
    ) -> Result<(), PlaybackError> {
        if start >= episodes.len() {
            return Err(PlaybackError::StartOutOfRange {
                start,
                len: episodes.len(),
            });
        }

        debug!(len = episodes.len(), start, "play episode list");

        self.episodes = episodes;
        self.current = start;
        self.is_playing = true;
        self.select();
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        self.touch();
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        self.touch();
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        self.touch();
    }

    /// Reconcile with the media element. Setting the current value is a no-op.
    pub fn set_playing_state(&mut self, value: bool) {
        if self.is_playing != value {
            self.is_playing = value;
            self.touch();
        }
    }

    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::rng());
    }

    pub fn play_next_with<R: Rng>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            // An empty queue keeps the cursor parked at 0
            if !self.episodes.is_empty() {
                self.current = rng.random_range(0..self.episodes.len());
                debug!(index = self.current, "shuffled to episode");
                self.select();
            }
        } else if self.has_next() {
            self.current += 1;
            self.select();
        }
    }

    pub fn play_previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.select();
        }
    }

    pub fn clear_player_state(&mut self) {
        debug!("clearing player queue");

        self.episodes.clear();
        self.current = 0;
        self.touch();
    }
}

// ===============
//    ACCESSORS
// ===============
impl PlaybackState {
    pub fn episodes(&self) -> &[Arc<Episode>] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_episode(&self) -> Option<&Arc<Episode>> {
        self.episodes.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current + 1 < self.episodes.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn select(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn ep(title: &str) -> Arc<Episode> {
        Arc::new(Episode::new(title, "Host", 180, format!("/tmp/{title}.mp3")))
    }

    fn queue(n: usize) -> Vec<Arc<Episode>> {
        (0..n).map(|i| ep(&format!("ep{i}"))).collect()
    }

    #[test]
    fn starts_empty_and_stopped() {
        let state = PlaybackState::new();
        assert!(state.is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(state.current_episode().is_none());
        assert!(!state.is_playing());
        assert!(!state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn play_replaces_queue_with_single_episode() {
        let mut state = PlaybackState::new();
        state.play_list(queue(3), 2).unwrap();
        state.set_playing_state(false);

        let single = ep("solo");
        state.play(Arc::clone(&single));

        assert_eq!(state.episodes(), &[single]);
        assert_eq!(state.current_index(), 0);
        assert!(state.is_playing());
    }

    #[test]
    fn play_list_out_of_range_leaves_state_alone() {
        let mut state = PlaybackState::new();
        state.play_list(queue(2), 1).unwrap();
        let before = state.revision();

        let err = state.play_list(queue(3), 3).unwrap_err();
        assert_eq!(err, PlaybackError::StartOutOfRange { start: 3, len: 3 });
        assert_eq!(state.len(), 2);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.revision(), before);

        assert!(state.play_list(Vec::new(), 0).is_err());
    }

    #[test]
    fn toggles_flip_flags() {
        let mut state = PlaybackState::new();
        state.toggle_play();
        state.toggle_loop();
        state.toggle_shuffle();
        assert!(state.is_playing() && state.is_looping() && state.is_shuffling());

        state.toggle_play();
        state.toggle_loop();
        state.toggle_shuffle();
        assert!(!state.is_playing() && !state.is_looping() && !state.is_shuffling());
    }

    #[test]
    fn set_playing_state_is_idempotent() {
        let mut state = PlaybackState::new();
        state.set_playing_state(true);
        let rev = state.revision();

        state.set_playing_state(true);
        assert_eq!(state.revision(), rev);

        state.set_playing_state(false);
        assert_ne!(state.revision(), rev);
        assert!(!state.is_playing());
    }

    #[test]
    fn next_stops_at_end_without_shuffle() {
        let mut state = PlaybackState::new();
        state.play_list(queue(3), 2).unwrap();
        let generation = state.generation();

        state.play_next();
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.generation(), generation);

        state.play_list(queue(3), 0).unwrap();
        state.play_next();
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn shuffle_always_has_next_and_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = PlaybackState::new();
        state.play_list(queue(4), 3).unwrap();
        state.toggle_shuffle();

        for _ in 0..1000 {
            assert!(state.has_next());
            state.play_next_with(&mut rng);
            assert!(state.current_index() < 4);
        }
    }

    #[test]
    fn shuffle_on_empty_queue_keeps_index_zero() {
        let mut state = PlaybackState::new();
        state.toggle_shuffle();
        state.play_next();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn previous_steps_back_until_zero() {
        let mut state = PlaybackState::new();
        state.play_list(queue(3), 2).unwrap();

        state.play_previous();
        assert_eq!(state.current_index(), 1);
        assert!(state.has_previous());

        state.play_previous();
        assert_eq!(state.current_index(), 0);

        state.play_previous();
        assert_eq!(state.current_index(), 0);
        assert!(!state.has_previous());
    }

    #[test]
    fn clear_keeps_flags() {
        let mut state = PlaybackState::new();
        state.play_list(queue(3), 1).unwrap();
        state.toggle_loop();
        state.toggle_shuffle();

        state.clear_player_state();

        assert!(state.is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(state.is_playing());
        assert!(state.is_looping());
        assert!(state.is_shuffling());
    }
}
