use crate::player::{
    core::PlayerCore, MediaElement, MediaNotice, PlayerCommand, PodcastBackend, RodioBackend,
};
use anyhow::{anyhow, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::{thread::JoinHandle, time::Duration};

/// A media element whose clock runs on a dedicated player thread.
pub struct MediaHandle {
    commands: Sender<PlayerCommand>,
    events: Receiver<MediaNotice>,
    thread_handle: Option<JoinHandle<()>>,
}

impl MediaHandle {
    /// Start the rodio player thread. `tick_rate` paces its clock.
    pub fn spawn(tick_rate: Duration) -> Self {
        Self::with_backend(tick_rate, || {
            let backend = RodioBackend::new()?;
            Ok(Box::new(backend) as Box<dyn PodcastBackend>)
        })
    }

    pub fn with_backend<F>(tick_rate: Duration, make_backend: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn PodcastBackend>> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();

        let thread_handle = PlayerCore::spawn(make_backend, cmd_rx, evt_tx, tick_rate);

        MediaHandle {
            commands: cmd_tx,
            events: evt_rx,
            thread_handle: Some(thread_handle),
        }
    }

    fn send(&self, cmd: PlayerCommand) -> Result<()> {
        self.commands
            .send(cmd)
            .map_err(|_| anyhow!("The player thread is not running"))
    }
}

// =====================
//    COMMAND HANDLER
// =====================
impl MediaElement for MediaHandle {
    fn load(&mut self, url: &str, autoplay: bool, token: u64) -> Result<()> {
        self.send(PlayerCommand::Load {
            url: url.to_string(),
            autoplay,
            token,
        })
    }

    fn unload(&mut self) -> Result<()> {
        self.send(PlayerCommand::Unload)
    }

    fn set_looping(&mut self, looping: bool) -> Result<()> {
        self.send(PlayerCommand::SetLooping(looping))
    }

    fn play(&mut self) -> Result<()> {
        self.send(PlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.send(PlayerCommand::Pause)
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.send(PlayerCommand::Seek(position))
    }

    fn poll_events(&mut self) -> Vec<MediaNotice> {
        self.events.try_iter().collect()
    }
}

impl Drop for MediaHandle {
    fn drop(&mut self) {
        let _ = self.commands.send(PlayerCommand::Shutdown);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}
