//! Configuration loader and schema types.
//!
//! Settings come from struct defaults, an optional TOML file and
//! `TRACKLIST__`-prefixed environment variables, in rising precedence.

mod error;
mod load;
mod schema;

pub use error::SettingsError;
pub use schema::*;

#[cfg(test)]
mod tests;
