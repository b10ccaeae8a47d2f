use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::warn;

use crate::audio::LoggingPlayback;
use crate::library::FolderScanner;
use crate::organizer::MusicOrganizer;

mod command;
mod dispatch;
mod logging;
mod settings;

pub use command::{Command, CommandError};
pub use dispatch::{Flow, dispatch};


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();
    logging::init(&settings.log);
    if let Some(e) = fallback {
        warn!("{e}; using defaults");
    }

    let folder = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.library.folder.clone());

    let scanner = FolderScanner::new(settings.library.clone());
    let mut organizer = MusicOrganizer::new(&folder, &scanner, LoggingPlayback::new());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{} tracks. Type `help` for commands.", organizer.len())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        match dispatch(&mut organizer, command) {
            Flow::Continue(lines) => {
                for l in lines {
                    writeln!(stdout, "{l}")?;
                }
            }
            Flow::Quit => break,
        }
    }

    organizer.stop_playing();
    Ok(())
}
