use crate::{
    key_handler::*,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

use KeyCode::*;

/// Map a key press to an action. Keys bound to a disabled control are dropped.
pub fn handle_key_event(
    key_event: KeyEvent,
    state: &UiState,
    seek_small: u64,
    seek_large: u64,
) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    if state.get_mode() == Mode::Error {
        return Some(Action::ClearError);
    }

    let controls = state.transport.controls(&state.playback);
    let small = seek_step(seek_small);
    let large = seek_step(seek_large);

    let action = match (key_event.modifiers, key_event.code) {
        (X, Char(' ')) if controls.play_pause => Action::TogglePlay,
        (X, Char('n')) if controls.next => Action::PlayNext,
        (X, Char('p')) if controls.previous => Action::PlayPrev,
        (X, Char('s')) if controls.shuffle => Action::ToggleShuffle,
        (X, Char('l')) if controls.looping => Action::ToggleLoop,

        (X, Right) if state.transport.has_source() => Action::Seek(small),
        (X, Left) if state.transport.has_source() => Action::Seek(-small),
        (S, Right) if state.transport.has_source() => Action::Seek(large),
        (S, Left) if state.transport.has_source() => Action::Seek(-large),

        (X, Enter) => Action::PlayFromHere,
        (X, Char('o')) => Action::PlaySingle,

        (X, Char('j')) | (X, Down) => Action::Scroll(Director::Down(1)),
        (X, Char('k')) | (X, Up) => Action::Scroll(Director::Up(1)),
        (X, Char('d')) | (X, PageDown) => Action::Scroll(Director::Down(SCROLL_MID)),
        (X, Char('u')) | (X, PageUp) => Action::Scroll(Director::Up(SCROLL_MID)),
        (X, Char('g')) | (X, Home) => Action::Scroll(Director::Top),
        (S, Char('G')) | (X, End) => Action::Scroll(Director::Bottom),

        _ => return None,
    };

    Some(action)
}

fn seek_step(secs: u64) -> i64 {
    i64::try_from(secs).unwrap_or(i64::MAX)
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) | (X, Char('q')) => Some(Action::QUIT),
        (X, Esc) => Some(Action::ClearError),
        _ => None,
    }
}

pub fn next_event(timeout: Duration) -> Result<Option<Event>> {
    match event::poll(timeout)? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}
