//! `MusicOrganizer`: owns the track list, the playback backend and the
//! playback state.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::audio::Playback;
use crate::library::{Track, TrackLoader, artist_title};

use super::error::{OrganizerError, Result};
use super::random::{IndexPicker, ThreadPicker};
use super::state::{PlaybackState, TrackId};

/// Extension the organizer asks its loader for.
pub const DEFAULT_EXTENSION: &str = "mp3";

/// The main catalog model.
///
/// `ids[i]` is the identity of `tracks[i]`; both vectors change together.
pub struct MusicOrganizer<P> {
    tracks: Vec<Track>,
    ids: Vec<TrackId>,
    next_id: u64,
    state: PlaybackState,
    playback: P,
}

impl<P: Playback> MusicOrganizer<P> {
    /// Load every `.mp3` track under `folder` through `loader`, keeping the
    /// loader's order.
    pub fn new(folder: &Path, loader: &impl TrackLoader, playback: P) -> Self {
        let mut organizer = Self::empty(playback);
        for track in loader.load(folder, DEFAULT_EXTENSION) {
            organizer.add_track(track);
        }
        info!("Music library loaded. {} tracks.", organizer.len());
        organizer
    }

    /// Create an organizer with no tracks.
    pub fn empty(playback: P) -> Self {
        Self {
            tracks: Vec::new(),
            ids: Vec::new(),
            next_id: 0,
            state: PlaybackState::default(),
            playback,
        }
    }

    /// Append a track to the end of the list.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
        self.ids.push(TrackId(self.next_id));
        self.next_id += 1;
    }

    /// Append a track whose artist and title are parsed from `filename`.
    pub fn add_file(&mut self, filename: impl Into<PathBuf>) {
        self.add_track(Track::from_filename(filename));
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All tracks in list order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The one bounds check shared by every index-taking operation.
    pub fn check_index(&self, index: usize) -> Result<usize> {
        if index < self.tracks.len() {
            Ok(index)
        } else {
            warn!("rejecting index {index}: library has {} tracks", self.tracks.len());
            Err(OrganizerError::IndexOutOfRange {
                index,
                len: self.tracks.len(),
            })
        }
    }

    pub fn track(&self, index: usize) -> Result<&Track> {
        let index = self.check_index(index)?;
        Ok(&self.tracks[index])
    }

    /// Start playing the track at `index` and bump its play count.
    ///
    /// While something is playing the call is refused before `index` is
    /// looked at.
    pub fn play_track(&mut self, index: usize) -> Result<&Track> {
        if self.is_playing() {
            warn!("refusing to play track {index}: {}", self.state);
            return Err(OrganizerError::AlreadyPlaying);
        }
        let index = self.check_index(index)?;

        let track = &mut self.tracks[index];
        self.playback.start_playing(track.filename());
        info!("Now playing: {}", artist_title(track));
        track.increment_play_count();
        self.state = PlaybackState::Playing {
            id: self.ids[index],
            filename: track.filename().to_path_buf(),
        };

        Ok(&self.tracks[index])
    }

    /// Play the first track. Counts as a play like any other.
    pub fn play_first(&mut self) -> Result<&Track> {
        self.ensure_can_pick("first")?;
        self.play_track(0)
    }

    /// Play a uniformly random track.
    pub fn play_random(&mut self) -> Result<&Track> {
        self.play_random_with(&mut ThreadPicker)
    }

    /// Play the track chosen by `picker`.
    pub fn play_random_with(&mut self, picker: &mut impl IndexPicker) -> Result<&Track> {
        self.ensure_can_pick("random")?;
        let index = picker.pick(self.tracks.len());
        debug!("random pick: {index} of {}", self.tracks.len());
        self.play_track(index)
    }

    /// Guard for entry points that choose the index themselves.
    fn ensure_can_pick(&self, what: &str) -> Result<()> {
        if self.is_playing() {
            warn!("refusing to play {what} track: {}", self.state);
            return Err(OrganizerError::AlreadyPlaying);
        }
        if self.is_empty() {
            warn!("refusing to play {what} track: library is empty");
            return Err(OrganizerError::EmptyCollection);
        }
        Ok(())
    }

    /// Stop playback, whether or not anything was playing.
    pub fn stop_playing(&mut self) {
        self.playback.stop();
        self.state = PlaybackState::Idle;
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The playing track, if it is still in the list.
    pub fn now_playing(&self) -> Option<&Track> {
        let id = self.state.track_id()?;
        let index = self.ids.iter().position(|&i| i == id)?;
        Some(&self.tracks[index])
    }

    /// Tracks whose artist contains `artist` (case-sensitive), with their indices.
    pub fn by_artist(&self, artist: &str) -> Vec<(usize, &Track)> {
        self.matching(|t| t.artist.contains(artist))
    }

    /// Tracks whose title contains `text` (case-sensitive), with their indices.
    pub fn find_in_title(&self, text: &str) -> Vec<(usize, &Track)> {
        self.matching(|t| t.title.contains(text))
    }

    fn matching(&self, pred: impl Fn(&Track) -> bool) -> Vec<(usize, &Track)> {
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| pred(*t))
            .collect()
    }

    /// Remove and return the track at `index`; later tracks shift down by one.
    pub fn remove_track(&mut self, index: usize) -> Result<Track> {
        let index = self.check_index(index)?;
        self.ids.remove(index);
        Ok(self.tracks.remove(index))
    }

    /// Remove every track whose artist contains `artist`. Returns how many went.
    pub fn remove_by_artist(&mut self, artist: &str) -> usize {
        self.remove_where(|t| t.artist.contains(artist))
    }

    /// Remove every track whose title contains `text`. Returns how many went.
    pub fn remove_by_title(&mut self, text: &str) -> usize {
        self.remove_where(|t| t.title.contains(text))
    }

    fn remove_where(&mut self, pred: impl Fn(&Track) -> bool) -> usize {
        let before = self.tracks.len();
        let keep: Vec<bool> = self.tracks.iter().map(|t| !pred(t)).collect();

        // `retain` visits elements in order, exactly once.
        let mut flags = keep.iter().copied();
        self.tracks.retain(|_| flags.next().unwrap_or(true));
        let mut flags = keep.iter().copied();
        self.ids.retain(|_| flags.next().unwrap_or(true));

        before - self.tracks.len()
    }

    /// Set the play count of the track at `index` back to zero.
    pub fn reset_counter(&mut self, index: usize) -> Result<()> {
        let index = self.check_index(index)?;
        self.tracks[index].reset_play_count();
        Ok(())
    }
}
