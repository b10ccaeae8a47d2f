use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of a track inside one organizer. Never reused, so two tracks
/// sharing a filename stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackId(pub(super) u64);

/// Single-slot playback state. At most one track is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing { id: TrackId, filename: PathBuf },
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Idle
    }
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// Track that was started, if any.
    pub fn track_id(&self) -> Option<TrackId> {
        match self {
            Self::Idle => None,
            Self::Playing { id, .. } => Some(*id),
        }
    }

    /// File handed to the playback backend, if any.
    pub fn filename(&self) -> Option<&Path> {
        match self {
            Self::Idle => None,
            Self::Playing { filename, .. } => Some(filename),
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "No track is playing"),
            Self::Playing { filename, .. } => write!(f, "A track is playing: {}", filename.display()),
        }
    }
}
