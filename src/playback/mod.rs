mod error;
mod state;

pub use error::PlaybackError;
pub use state::PlaybackState;
