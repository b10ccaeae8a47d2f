//! The music organizer: an ordered in-memory catalog plus single-track
//! playback state.
//!
//! Every index-taking operation goes through `MusicOrganizer::check_index`,
//! and every play entry point refuses while a track is already playing.

mod error;
mod model;
mod random;
mod state;

pub use error::OrganizerError;
pub use model::*;
pub use random::{IndexPicker, ThreadPicker};
pub use state::{PlaybackState, TrackId};
