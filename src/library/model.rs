use std::path::{Path, PathBuf};

const UNKNOWN: &str = "unknown";

/// A single audio item in the catalog.
///
/// The filename is fixed at creation. The play counter only moves through
/// `increment_play_count` and `reset_play_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    filename: PathBuf,
    pub artist: String,
    pub title: String,
    play_count: u32,
}

impl Track {
    pub fn new(
        filename: impl Into<PathBuf>,
        artist: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            artist: artist.into(),
            title: title.into(),
            play_count: 0,
        }
    }

    /// Build a track from a filename shaped like `Artist-Title.mp3`.
    ///
    /// When the stem has no `-`, the artist is `"unknown"` and the whole
    /// stem becomes the title.
    pub fn from_filename(filename: impl Into<PathBuf>) -> Self {
        let filename = filename.into();
        let (artist, title) = split_stem(&filename);
        Self::new(filename, artist, title)
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    pub fn increment_play_count(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
    }

    pub fn reset_play_count(&mut self) {
        self.play_count = 0;
    }
}

/// Split a file stem into `(artist, title)` on the first `-`.
pub(super) fn split_stem(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN);

    match stem.split_once('-') {
        Some((artist, title)) => {
            let artist = artist.trim();
            let title = title.trim();
            (
                if artist.is_empty() { UNKNOWN } else { artist }.to_string(),
                if title.is_empty() { stem } else { title }.to_string(),
            )
        }
        None => (UNKNOWN.to_string(), stem.to_string()),
    }
}
