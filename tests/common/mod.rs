#![allow(dead_code)]

use anyhow::Result;
use podcastr::{Episode, MediaElement, MediaEvent, MediaNotice};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    sync::Arc,
    time::Duration,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(String, bool),
    Unload,
    SetLooping(bool),
    Play,
    Pause,
    Seek(Duration),
}

/// Records every command and hands back whatever events the test queued.
#[derive(Clone, Default)]
pub struct FakeMedia {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub pending: Rc<RefCell<Vec<MediaNotice>>>,
    pub token: Rc<Cell<Option<u64>>>,
}

impl FakeMedia {
    pub fn take_calls(&self) -> Vec<Call> {
        self.calls.borrow_mut().drain(..).collect()
    }

    /// Queue an event from whatever source is loaded right now.
    pub fn push_event(&self, event: MediaEvent) {
        self.push_from(self.token.get(), event);
    }

    pub fn push_from(&self, source: Option<u64>, event: MediaEvent) {
        self.pending.borrow_mut().push(MediaNotice { source, event });
    }

    pub fn token(&self) -> Option<u64> {
        self.token.get()
    }
}

impl MediaElement for FakeMedia {
    fn load(&mut self, url: &str, autoplay: bool, token: u64) -> Result<()> {
        self.token.set(Some(token));
        self.calls
            .borrow_mut()
            .push(Call::Load(url.to_string(), autoplay));
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        self.token.set(None);
        self.calls.borrow_mut().push(Call::Unload);
        Ok(())
    }

    fn set_looping(&mut self, looping: bool) -> Result<()> {
        self.calls.borrow_mut().push(Call::SetLooping(looping));
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.calls.borrow_mut().push(Call::Play);
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.calls.borrow_mut().push(Call::Pause);
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.calls.borrow_mut().push(Call::Seek(position));
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<MediaNotice> {
        self.pending.borrow_mut().drain(..).collect()
    }
}

pub fn episode(title: &str, duration: u64) -> Arc<Episode> {
    Arc::new(Episode::new(
        title,
        "Diego e Richard",
        duration,
        format!("/podcasts/{title}.mp3"),
    ))
}

pub fn episodes(titles: &[&str]) -> Vec<Arc<Episode>> {
    titles.iter().map(|t| episode(t, 180)).collect()
}
