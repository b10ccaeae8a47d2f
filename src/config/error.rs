use thiserror::Error;

/// Why the configured settings could not be used.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load config: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
