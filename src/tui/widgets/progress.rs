use super::DUR_WIDTH;
use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    symbols,
    text::Text,
    widgets::{LineGauge, StatefulWidget, Widget},
};

/// Elapsed time, seek slider and total time on one row.
pub struct Progress;
impl StatefulWidget for Progress {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;

        let [elapsed, slider, total] = Layout::horizontal([
            Constraint::Length(DUR_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(DUR_WIDTH),
        ])
        .spacing(1)
        .areas(area);

        Text::from(state.transport.elapsed_display())
            .fg(theme.muted)
            .right_aligned()
            .render(elapsed, buf);

        Text::from(state.transport.duration_display(&state.playback))
            .fg(theme.muted)
            .left_aligned()
            .render(total, buf);

        // Without an episode the rail is drawn empty
        let (ratio, filled, unfilled) = match state.playback.current_episode() {
            Some(_) => (state.transport.ratio(&state.playback), theme.accent, theme.rail),
            None => (0.0, theme.muted, theme.muted),
        };

        LineGauge::default()
            .filled_style(filled)
            .unfilled_style(unfilled)
            .filled_symbol(symbols::line::THICK_HORIZONTAL)
            .unfilled_symbol(symbols::line::HORIZONTAL)
            .label("")
            .ratio(ratio.clamp(0.0, 1.0))
            .render(slider, buf);
    }
}
