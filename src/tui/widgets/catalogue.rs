use crate::{truncate_at_last_space, ui_state::UiState};
use ratatui::{
    layout::{Alignment, Constraint, Flex},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Padding, Row, StatefulWidget, Table},
};

const COLUMN_SPACING: u16 = 2;
const KEYMAPS: &str =
    " ⏎ play from here ✧ [o]nly this ✧ [space] pause ✧ [n]ext ✧ [p]rev ✧ [s]huffle ✧ [l]oop ✧ ←/→ seek ✧ [q]uit ";

const PADDING: Padding = Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};

pub struct CatalogueTable;
impl StatefulWidget for CatalogueTable {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.theme.clone();
        let playing = state.playback.current_episode().cloned();
        let title_width = (area.width / 2) as usize;

        let rows = state
            .catalogue
            .episodes
            .iter()
            .enumerate()
            .map(|(idx, episode)| {
                let marker = match playing.as_ref().is_some_and(|p| p.url == episode.url) {
                    true => Span::from("♫").fg(theme.accent),
                    false => Span::from(""),
                };

                Row::new([
                    Cell::from(format!("{:>3}", idx + 1)).fg(theme.muted),
                    Cell::from(marker),
                    Cell::from(truncate_at_last_space(&episode.title, title_width)).fg(theme.text),
                    Cell::from(episode.members.clone()).fg(theme.rail),
                    Cell::from(episode.get_duration_str()).fg(theme.muted),
                ])
            })
            .collect::<Vec<Row>>();

        let mut title = Line::from_iter([
            Span::from(" Podcastr ").fg(theme.accent).bold(),
            Span::from(format!("[{} Episodes] ", state.catalogue.len())).fg(theme.muted),
        ]);
        if let Some(name) = state.catalogue.source_name() {
            title.push_span(Span::from(format!("{name} ")).fg(theme.rail));
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.muted)
            .title_top(title.alignment(Alignment::Center))
            .title_bottom(Line::from(KEYMAPS.fg(theme.muted)).alignment(Alignment::Center))
            .padding(PADDING);

        let widths = [
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(20),
            Constraint::Max(24),
            Constraint::Length(6),
        ];

        let table = Table::new(rows, widths)
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .row_highlight_style(Style::new().fg(theme.accent).bold());

        StatefulWidget::render(table, area, buf, &mut state.table_pos);
    }
}
