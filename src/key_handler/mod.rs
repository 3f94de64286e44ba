mod action;

pub use action::{handle_key_event, next_event};

use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SCROLL_MID: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    // Player Controls
    PlayFromHere,
    PlaySingle,
    TogglePlay,
    PlayNext,
    PlayPrev,
    ToggleShuffle,
    ToggleLoop,
    Seek(i64),

    // Navigation
    Scroll(Director),

    // Errors, Convenience & Other
    ClearError,
    QUIT,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}
