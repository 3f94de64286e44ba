use super::{LOOP_ICON, NEXT_ICON, PAUSE_ICON, PLAY_ICON, PREV_ICON, SHUFFLE_ICON};
use crate::ui_state::UiState;
use ratatui::{
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

pub struct TransportButtons;
impl StatefulWidget for TransportButtons {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;
        let controls = state.transport.controls(&state.playback);

        let paint = |enabled: bool, active: bool| -> Color {
            match (enabled, active) {
                (false, _) => theme.muted,
                (true, true) => theme.accent,
                (true, false) => theme.text,
            }
        };

        let play_icon = match controls.is_playing {
            true => PAUSE_ICON,
            false => PLAY_ICON,
        };

        let play_button = match controls.play_pause {
            true => Span::from(format!(" {play_icon} ")).fg(theme.text).bg(theme.rail).bold(),
            false => Span::from(format!(" {play_icon} ")).fg(theme.muted),
        };

        Line::from_iter([
            Span::from(SHUFFLE_ICON).fg(paint(controls.shuffle, controls.shuffle_active)),
            Span::from("    "),
            Span::from(PREV_ICON).fg(paint(controls.previous, false)),
            Span::from("   "),
            play_button,
            Span::from("   "),
            Span::from(NEXT_ICON).fg(paint(controls.next, false)),
            Span::from("    "),
            Span::from(LOOP_ICON).fg(paint(controls.looping, controls.loop_active)),
        ])
        .centered()
        .render(area, buf);
    }
}
