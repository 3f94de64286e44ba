use crate::player::{MediaElement, MediaNotice};
use anyhow::Result;
use std::time::Duration;

/// Accepts every command and never reports back.
pub(crate) struct SilentMedia;

impl MediaElement for SilentMedia {
    fn load(&mut self, _: &str, _: bool, _: u64) -> Result<()> {
        Ok(())
    }
    fn unload(&mut self) -> Result<()> {
        Ok(())
    }
    fn set_looping(&mut self, _: bool) -> Result<()> {
        Ok(())
    }
    fn play(&mut self) -> Result<()> {
        Ok(())
    }
    fn pause(&mut self) -> Result<()> {
        Ok(())
    }
    fn seek(&mut self, _: Duration) -> Result<()> {
        Ok(())
    }
    fn poll_events(&mut self) -> Vec<MediaNotice> {
        Vec::new()
    }
}
