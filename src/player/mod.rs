mod backend_rodio;
mod core;
mod handle;
#[cfg(test)]
mod silent;

pub use backend_rodio::RodioBackend;
pub use handle::MediaHandle;
#[cfg(test)]
pub(crate) use silent::SilentMedia;

use anyhow::Result;
use std::{path::Path, time::Duration};

/// Notifications coming back from a media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// A freshly loaded source is ready, fires once per `load`
    MetadataLoaded,
    /// The playback clock crossed into a new whole second
    TimeUpdate(Duration),
    Play,
    Pause,
    /// The source ran out and is not looping
    Ended,
    Error(String),
}

/// An event stamped with the load it belongs to.
///
/// `source` is the token passed to `MediaElement::load`. Events raised
/// outside any load, like an output device that never opened, carry `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaNotice {
    pub source: Option<u64>,
    pub event: MediaEvent,
}

/// The contract the transport drives: a source slot, a loop attribute and
/// imperative play/pause/seek commands.
pub trait MediaElement {
    /// Mount `url`. Every event caused by this source is echoed back with `token`.
    fn load(&mut self, url: &str, autoplay: bool, token: u64) -> Result<()>;
    fn unload(&mut self) -> Result<()>;
    fn set_looping(&mut self, looping: bool) -> Result<()>;
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
    fn seek(&mut self, position: Duration) -> Result<()>;
    fn poll_events(&mut self) -> Vec<MediaNotice>;
}

/// What the player thread needs from an audio output.
pub trait PodcastBackend {
    fn load(&mut self, source: &Path) -> Result<()>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    fn seek(&mut self, position: Duration) -> Result<()>;
    fn position(&self) -> Duration;
    fn is_paused(&self) -> bool;
    fn track_ended(&self) -> bool;
}

pub(crate) enum PlayerCommand {
    Load {
        url: String,
        autoplay: bool,
        token: u64,
    },
    Unload,
    SetLooping(bool),
    Play,
    Pause,
    Seek(Duration),
    Shutdown,
}
