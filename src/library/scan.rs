use std::path::Path;

use lofty::prelude::{Accessor, TaggedFileExt};
use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

/// Source of the tracks an organizer starts with.
pub trait TrackLoader {
    /// Return the tracks under `folder` whose extension matches `extension`,
    /// in a stable order. Problems reading the folder are the loader's to
    /// report; an empty result is valid.
    fn load(&self, folder: &Path, extension: &str) -> Vec<Track>;
}

/// Loads tracks from disk with `walkdir`, reading tags with `lofty` and
/// falling back to the `Artist-Title` filename convention.
#[derive(Debug, Clone, Default)]
pub struct FolderScanner {
    settings: LibrarySettings,
}

impl FolderScanner {
    pub fn new(settings: LibrarySettings) -> Self {
        Self { settings }
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.to_ascii_lowercase() == wanted)
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Build a track for `path`, preferring embedded tags over the filename.
fn read_track(path: &Path) -> Track {
    let mut track = Track::from_filename(path);

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title() {
                    let v = v.trim();
                    if !v.is_empty() {
                        track.title = v.to_string();
                    }
                }
                if let Some(v) = tag.artist() {
                    let v = v.trim();
                    if !v.is_empty() {
                        track.artist = v.to_string();
                    }
                }
            }
        }
        Err(e) => debug!("no tags for {}: {e}", path.display()),
    }

    track
}

impl TrackLoader for FolderScanner {
    fn load(&self, folder: &Path, extension: &str) -> Vec<Track> {
        let settings = &self.settings;
        let wanted = normalize_extension(extension);
        let mut tracks: Vec<Track> = Vec::new();

        let mut walker = WalkDir::new(folder).follow_links(settings.follow_links);

        // Non-recursive = only the root directory.
        let depth_cap = if settings.recursive {
            settings.max_depth
        } else {
            Some(1)
        };
        if let Some(d) = depth_cap {
            walker = walker.max_depth(d);
        }

        for entry in walker
            .into_iter()
            .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry under {}: {e}", folder.display());
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() {
                if has_extension(path, &wanted) {
                    tracks.push(read_track(path));
                } else {
                    debug!("ignoring {}", path.display());
                }
            }
        }

        tracks.sort_by(|a, b| a.filename().cmp(b.filename()));
        tracks
    }
}
