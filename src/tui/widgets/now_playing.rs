use super::PANEL_PADDING;
use crate::{truncate_at_last_space, ui_state::UiState};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::Stylize,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};

pub struct NowPlaying;
impl StatefulWidget for NowPlaying {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.rail)
            .title_top(Line::from_iter([
                Span::from(" ♫ ").fg(theme.accent),
                Span::from("Now playing ").fg(theme.text).bold(),
            ]))
            .title_alignment(Alignment::Center)
            .padding(PANEL_PADDING);

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(episode) = state.playback.current_episode() else {
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .areas(inner);

            Paragraph::new("Select a podcast to listen")
                .wrap(Wrap { trim: true })
                .centered()
                .fg(theme.muted)
                .bold()
                .render(middle, buf);
            return;
        };

        let width = inner.width.saturating_sub(2) as usize;
        let mut lines = vec![
            Line::from(truncate_at_last_space(&episode.title, width * 2))
                .fg(theme.text)
                .bold(),
            Line::default(),
            Line::from(truncate_at_last_space(&episode.members, width)).fg(theme.accent),
            Line::from(episode.get_length_str()).fg(theme.muted),
        ];

        if !episode.thumbnail.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(episode.thumbnail.as_str()).fg(theme.muted).italic());
        }

        if state.playback.len() > 1 {
            lines.push(Line::default());
            lines.push(
                Line::from(format!(
                    "{} of {}",
                    state.playback.current_index() + 1,
                    state.playback.len()
                ))
                .fg(theme.muted),
            );
        }

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .centered()
            .render(inner, buf);
    }
}
