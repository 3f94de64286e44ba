use crate::{
    local_path,
    player::{MediaEvent, MediaNotice, PlayerCommand, PodcastBackend},
};
use anyhow::{anyhow, Result};
use crossbeam_channel::{Receiver, Sender};
use std::{
    path::{Path, PathBuf},
    thread::{self, JoinHandle},
    time::Duration,
};
use tracing::{debug, warn};

/// Owns the audio output and plays the part of the media element's clock.
pub(crate) struct PlayerCore {
    backend: Box<dyn PodcastBackend>,
    commands: Receiver<PlayerCommand>,
    events: Sender<MediaNotice>,
    tick_rate: Duration,

    source: Option<PathBuf>,
    token: Option<u64>,
    looping: bool,
    ended: bool,
    last_secs: Option<u64>,
}

impl PlayerCore {
    pub(crate) fn spawn<F>(
        make_backend: F,
        commands: Receiver<PlayerCommand>,
        events: Sender<MediaNotice>,
        tick_rate: Duration,
    ) -> JoinHandle<()>
    where
        F: FnOnce() -> Result<Box<dyn PodcastBackend>> + Send + 'static,
    {
        thread::spawn(move || {
            let backend = match make_backend() {
                Ok(backend) => backend,
                Err(e) => {
                    warn!("audio backend failed to start: {e}");
                    let _ = events.send(MediaNotice {
                        source: None,
                        event: MediaEvent::Error(format!("Could not open audio output: {e}")),
                    });
                    return;
                }
            };

            let mut core = PlayerCore::new(backend, commands, events, tick_rate);
            core.run();
        })
    }

    pub(crate) fn new(
        backend: Box<dyn PodcastBackend>,
        commands: Receiver<PlayerCommand>,
        events: Sender<MediaNotice>,
        tick_rate: Duration,
    ) -> Self {
        PlayerCore {
            backend,
            commands,
            events,
            tick_rate: tick_rate.max(Duration::from_millis(1)),

            source: None,
            token: None,
            looping: false,
            ended: false,
            last_secs: None,
        }
    }

    fn run(&mut self) {
        while self.tick() {
            thread::sleep(self.tick_rate);
        }
        self.backend.stop();
        debug!("player thread exiting");
    }

    /// One pass of the loop. Returns false once the thread should exit.
    pub(crate) fn tick(&mut self) -> bool {
        if !self.process_commands() {
            return false;
        }
        self.check_track_end();
        self.update_position();
        true
    }

    fn process_commands(&mut self) -> bool {
        while let Ok(cmd) = self.commands.try_recv() {
            match cmd {
                PlayerCommand::Load {
                    url,
                    autoplay,
                    token,
                } => self.load(&url, autoplay, token),
                PlayerCommand::Unload => self.unload(),
                PlayerCommand::SetLooping(looping) => self.looping = looping,
                PlayerCommand::Play => self.play(),
                PlayerCommand::Pause => self.pause(),
                PlayerCommand::Seek(pos) => self.seek(pos),
                PlayerCommand::Shutdown => return false,
            }
        }
        true
    }

    fn load(&mut self, url: &str, autoplay: bool, token: u64) {
        self.unload();
        // Failures to load are reported against the new source too
        self.token = Some(token);

        let path = match resolve_source(url) {
            Ok(path) => path,
            Err(e) => return self.emit(MediaEvent::Error(e.to_string())),
        };

        if let Err(e) = self.backend.load(&path) {
            warn!(url, "failed to load source: {e}");
            return self.emit(MediaEvent::Error(format!("Could not play {url}: {e}")));
        }

        debug!(url, autoplay, token, "source loaded");
        self.source = Some(path);
        self.emit(MediaEvent::MetadataLoaded);

        if autoplay {
            self.backend.resume();
            self.emit(MediaEvent::Play);
        }
    }

    fn unload(&mut self) {
        if self.source.take().is_some() {
            self.backend.stop();
        }
        self.token = None;
        self.ended = false;
        self.last_secs = None;
    }

    fn play(&mut self) {
        let Some(source) = self.source.clone() else {
            return;
        };

        // Playing a finished source starts it over
        if self.ended {
            if let Err(e) = self.restart(&source) {
                return self.emit(MediaEvent::Error(e.to_string()));
            }
            self.backend.resume();
            return self.emit(MediaEvent::Play);
        }

        if self.backend.is_paused() {
            self.backend.resume();
            self.emit(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        if self.source.is_some() && !self.ended && !self.backend.is_paused() {
            self.backend.pause();
            self.emit(MediaEvent::Pause);
        }
    }

    fn seek(&mut self, pos: Duration) {
        if self.source.is_none() || self.ended {
            return;
        }
        if let Err(e) = self.backend.seek(pos) {
            warn!("seek failed: {e}");
            self.emit(MediaEvent::Error(format!("Seek failed: {e}")));
        }
    }

    fn check_track_end(&mut self) {
        // Checking `ended` ensures the event is sent once per source
        if self.ended || self.source.is_none() || !self.backend.track_ended() {
            return;
        }

        match (self.looping, self.source.clone()) {
            (true, Some(source)) => match self.restart(&source) {
                Ok(()) => self.backend.resume(),
                Err(e) => {
                    self.ended = true;
                    self.emit(MediaEvent::Error(e.to_string()));
                }
            },
            _ => {
                self.ended = true;
                self.emit(MediaEvent::Ended);
            }
        }
    }

    fn restart(&mut self, source: &Path) -> Result<()> {
        self.backend.load(source)?;
        self.ended = false;
        self.last_secs = None;
        Ok(())
    }

    fn update_position(&mut self) {
        if self.source.is_none() || self.ended {
            return;
        }

        let position = self.backend.position();
        let secs = position.as_secs();
        if self.last_secs != Some(secs) {
            self.last_secs = Some(secs);
            self.emit(MediaEvent::TimeUpdate(position));
        }
    }

    fn emit(&self, event: MediaEvent) {
        let _ = self.events.send(MediaNotice {
            source: self.token,
            event,
        });
    }
}

fn resolve_source(url: &str) -> Result<PathBuf> {
    let path = local_path(url).ok_or_else(|| anyhow!("Remote sources are not supported: {url}"))?;

    if !path.is_file() {
        return Err(anyhow!("File not found: {}", path.display()));
    }
    Ok(path)
}
