use thiserror::Error;

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListAll,
    List(usize),
    Artist(String),
    Title(String),
    /// Signed so a negative index can be refused after the playing check.
    Play(i64),
    PlayFirst,
    PlayRandom,
    Stop,
    Status,
    Remove(usize),
    RemoveArtist(String),
    RemoveTitle(String),
    Reset(usize),
    Add(String),
    Count,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Index cannot be negative: {0}")]
    NegativeIndex(i64),

    #[error("not a track index: {0}")]
    InvalidIndex(String),
}

pub const HELP: &[&str] = &[
    "list                 list every track",
    "list <i>             show track <i>",
    "artist <text>        tracks whose artist contains <text>",
    "title <text>         tracks whose title contains <text>",
    "play <i>             play track <i>",
    "first                play the first track",
    "random               play a random track",
    "stop                 stop playback",
    "status               is anything playing?",
    "remove <i>           remove track <i>",
    "remove-artist <text> remove tracks whose artist contains <text>",
    "remove-title <text>  remove tracks whose title contains <text>",
    "reset <i>            reset the play count of track <i>",
    "add <file>           add a track parsed from an `Artist-Title.mp3` filename",
    "count                number of tracks",
    "quit                 leave",
];

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "" => Err(CommandError::Empty),
            "list" | "ls" if rest.is_empty() => Ok(Self::ListAll),
            "list" | "ls" => Ok(Self::List(parse_index(rest)?)),
            "artist" => Ok(Self::Artist(text_arg(rest, "artist")?)),
            "title" | "find" => Ok(Self::Title(text_arg(rest, "text")?)),
            "play" => Ok(Self::Play(parse_signed(rest)?)),
            "first" => Ok(Self::PlayFirst),
            "random" | "shuffle" => Ok(Self::PlayRandom),
            "stop" => Ok(Self::Stop),
            "status" => Ok(Self::Status),
            "remove" | "rm" => Ok(Self::Remove(parse_index(rest)?)),
            "remove-artist" => Ok(Self::RemoveArtist(text_arg(rest, "artist")?)),
            "remove-title" => Ok(Self::RemoveTitle(text_arg(rest, "text")?)),
            "reset" => Ok(Self::Reset(parse_index(rest)?)),
            "add" => Ok(Self::Add(text_arg(rest, "file")?)),
            "count" => Ok(Self::Count),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn text_arg(rest: &str, name: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(name))
    } else {
        Ok(rest.to_string())
    }
}

/// Parse a track index. Negative input is rejected here so the organizer
/// only ever sees `usize`.
fn parse_index(rest: &str) -> Result<usize, CommandError> {
    to_index(parse_signed(rest)?)
}

fn parse_signed(rest: &str) -> Result<i64, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument("index"));
    }
    rest.parse()
        .map_err(|_| CommandError::InvalidIndex(rest.to_string()))
}

/// Convert a signed index, keeping "negative" apart from "too wide for `usize`".
pub fn to_index(n: i64) -> Result<usize, CommandError> {
    if n < 0 {
        return Err(CommandError::NegativeIndex(n));
    }
    usize::try_from(n).map_err(|_| CommandError::InvalidIndex(n.to_string()))
}
