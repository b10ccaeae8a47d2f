use std::path::{Path, PathBuf};

use log::debug;

/// Starts and stops audio output for a named file.
///
/// Calls are fire-and-forget: nothing is returned and `stop` must be safe
/// to call when nothing is playing.
pub trait Playback {
    fn start_playing(&mut self, filename: &Path);
    fn stop(&mut self);
}

/// Playback stand-in that decodes nothing and only logs what it would do.
#[derive(Debug, Default)]
pub struct LoggingPlayback {
    current: Option<PathBuf>,
}

impl LoggingPlayback {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Playback for LoggingPlayback {
    fn start_playing(&mut self, filename: &Path) {
        if let Some(prev) = self.current.replace(filename.to_path_buf()) {
            debug!("replacing {} without a stop", prev.display());
        }
        debug!("start playing {}", filename.display());
    }

    fn stop(&mut self) {
        match self.current.take() {
            Some(prev) => debug!("stopped {}", prev.display()),
            None => debug!("stop requested while idle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_playback_tracks_the_active_file() {
        let mut p = LoggingPlayback::new();
        assert!(p.current.is_none());

        p.start_playing(Path::new("a.mp3"));
        assert_eq!(p.current.as_deref(), Some(Path::new("a.mp3")));

        p.start_playing(Path::new("b.mp3"));
        assert_eq!(p.current.as_deref(), Some(Path::new("b.mp3")));

        p.stop();
        assert!(p.current.is_none());
    }

    #[test]
    fn logging_playback_stop_is_idempotent() {
        let mut p = LoggingPlayback::new();
        p.stop();
        p.stop();
        assert!(p.current.is_none());
    }
}
