use std::{
    env,
    path::{Path, PathBuf},
};

use ::config::{Config, ConfigError, Environment, File};

use super::error::SettingsError;
use super::schema::Settings;

const ENV_PREFIX: &str = "TRACKLIST";
const CONFIG_PATH_VAR: &str = "TRACKLIST_CONFIG_PATH";

impl Settings {
    /// Read the optional config file, then `TRACKLIST__*` variables on top.
    /// Fields neither source mentions keep their struct defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load and validate in one step.
    pub fn load_checked() -> Result<Self, SettingsError> {
        let settings = Self::load()?;
        settings.validate()?;
        Ok(settings)
    }

    fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject values the scanner or logger cannot work with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let problem = if self.library.folder.as_os_str().is_empty() {
            "library.folder must not be empty"
        } else if self.library.max_depth == Some(0) {
            "library.max_depth must be >= 1"
        } else if self.log.level.trim().is_empty() {
            "log.level must not be empty"
        } else {
            return Ok(());
        };
        Err(SettingsError::Invalid(problem))
    }
}

/// `TRACKLIST_CONFIG_PATH` if set, otherwise [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `tracklist/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config`.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("tracklist").join("config.toml"))
}
