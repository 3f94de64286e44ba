use super::{AppLayout, CatalogueTable, ErrorMsg, NowPlaying, Progress, TransportButtons};
use crate::ui_state::{Mode, UiState};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, StatefulWidget, Widget},
    Frame,
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area());

    CatalogueTable.render(layout.catalogue, f.buffer_mut(), state);
    NowPlaying.render(layout.now_playing, f.buffer_mut(), state);
    Progress.render(layout.progress, f.buffer_mut(), state);
    TransportButtons.render(layout.buttons, f.buffer_mut(), state);

    if state.get_mode() == Mode::Error {
        let popup_rect = centered_rect(40, 30, f.area());

        Clear.render(popup_rect, f.buffer_mut());
        ErrorMsg.render(popup_rect, f.buffer_mut(), state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
