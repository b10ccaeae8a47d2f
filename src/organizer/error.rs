use thiserror::Error;

/// Why an organizer operation was refused. A refused operation leaves the
/// collection, the counters and the playback state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganizerError {
    #[error("Index is too large: {index} (library has {len} tracks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A track is already playing; stop it before playing another")]
    AlreadyPlaying,

    #[error("The library is empty")]
    EmptyCollection,
}

pub type Result<T> = std::result::Result<T, OrganizerError>;
