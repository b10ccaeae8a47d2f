use log::warn;

use crate::audio::Playback;
use crate::library::{Track, artist_title};
use crate::organizer::{MusicOrganizer, OrganizerError};

use super::command::{Command, HELP, to_index};

/// What the driver loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    /// Print these lines and read the next command.
    Continue(Vec<String>),
    Quit,
}

/// Run `command` against `organizer` and describe the outcome as text.
pub fn dispatch<P: Playback>(organizer: &mut MusicOrganizer<P>, command: Command) -> Flow {
    let lines = match command {
        Command::Quit => return Flow::Quit,
        Command::ListAll => {
            let mut lines = vec!["Track listing:".to_string()];
            lines.extend(
                organizer
                    .tracks()
                    .iter()
                    .enumerate()
                    .map(|(i, t)| format!("{i}: {t}")),
            );
            lines
        }
        Command::List(index) => match organizer.track(index) {
            Ok(t) => vec![format!("Track {index}: {t}")],
            Err(e) => vec![e.to_string()],
        },
        Command::Artist(artist) => matches(organizer.by_artist(&artist), &artist),
        Command::Title(text) => matches(organizer.find_in_title(&text), &text),
        // The playing check comes before any look at the index.
        Command::Play(index) if organizer.is_playing() => {
            warn!("refusing to play track {index}: {}", organizer.state());
            vec![OrganizerError::AlreadyPlaying.to_string()]
        }
        Command::Play(index) => match to_index(index) {
            Ok(index) => now_playing(organizer.play_track(index)),
            Err(e) => vec![e.to_string()],
        },
        Command::PlayFirst => now_playing(organizer.play_first()),
        Command::PlayRandom => now_playing(organizer.play_random()),
        Command::Stop => {
            organizer.stop_playing();
            vec!["Playback stopped".to_string()]
        }
        Command::Status => {
            let mut lines = vec![organizer.state().to_string()];
            if let Some(t) = organizer.now_playing() {
                lines.push(format!("Now playing: {}", artist_title(t)));
            }
            lines
        }
        Command::Remove(index) => match organizer.remove_track(index) {
            Ok(t) => vec![format!("Removed: {t}")],
            Err(e) => vec![e.to_string()],
        },
        Command::RemoveArtist(artist) => removed(organizer.remove_by_artist(&artist)),
        Command::RemoveTitle(text) => removed(organizer.remove_by_title(&text)),
        Command::Reset(index) => match organizer.reset_counter(index) {
            Ok(()) => vec![format!("Play count reset for track {index}")],
            Err(e) => vec![e.to_string()],
        },
        Command::Add(file) => {
            organizer.add_file(file);
            match organizer.tracks().last() {
                Some(t) => vec![format!("Added: {t}")],
                None => Vec::new(),
            }
        }
        Command::Count => vec![format!("{} tracks", organizer.len())],
        Command::Help => HELP.iter().map(|l| l.to_string()).collect(),
    };
    Flow::Continue(lines)
}

fn now_playing(result: Result<&Track, OrganizerError>) -> Vec<String> {
    match result {
        Ok(t) => vec![format!("Now playing: {}", artist_title(t))],
        Err(e) => vec![e.to_string()],
    }
}

fn matches(hits: Vec<(usize, &Track)>, needle: &str) -> Vec<String> {
    if hits.is_empty() {
        return vec![format!("No tracks match \"{needle}\"")];
    }
    hits.into_iter().map(|(i, t)| format!("{i}: {t}")).collect()
}

fn removed(n: usize) -> Vec<String> {
    vec![format!("Removed {n} {}", if n == 1 { "track" } else { "tracks" })]
}
