mod catalogue;
mod error;
mod now_playing;
mod progress;
mod transport_buttons;

pub use catalogue::CatalogueTable;
pub use error::ErrorMsg;
pub use now_playing::NowPlaying;
pub use progress::Progress;
pub use transport_buttons::TransportButtons;

const DUR_WIDTH: u16 = 6;

const PLAY_ICON: &str = "▶";
const PAUSE_ICON: &str = "⏸";
const PREV_ICON: &str = "⏮";
const NEXT_ICON: &str = "⏭";
const SHUFFLE_ICON: &str = "⤮";
const LOOP_ICON: &str = "↻";

static PANEL_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};
