use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Cannot start playback at episode {start}: the list holds {len} episode(s)")]
    StartOutOfRange { start: usize, len: usize },
}
