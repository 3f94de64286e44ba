use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub catalogue: Rect,
    pub now_playing: Rect,
    pub progress: Rect,
    pub buttons: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let player_width = match area.width > 100 {
            true => Constraint::Length(46),
            false => Constraint::Percentage(40),
        };

        let [catalogue, player] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), player_width])
            .areas(area);

        let [now_playing, _, progress, _, buttons, _] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(player);

        AppLayout {
            catalogue,
            now_playing,
            progress: progress.inner(ratatui::layout::Margin::new(1, 0)),
            buttons,
        }
    }
}
