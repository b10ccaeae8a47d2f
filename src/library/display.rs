use std::fmt;

use super::model::Track;

/// Short `Artist - Title` label, falling back to the title when the artist is blank.
pub fn artist_title(track: &Track) -> String {
    let title = track.title.trim();
    match track.artist.trim() {
        "" => title.to_string(),
        artist => format!("{artist} - {title}"),
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}  (file: {}) [played {} times]",
            self.artist,
            self.title,
            self.filename().display(),
            self.play_count()
        )
    }
}
