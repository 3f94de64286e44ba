mod mode;
mod transport;
mod ui_state;

pub use mode::Mode;
pub use transport::{Controls, TransportView};
pub use ui_state::UiState;
