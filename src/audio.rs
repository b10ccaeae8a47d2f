//! Playback seam.
//!
//! The organizer drives output through the `Playback` trait; the binary
//! wires in `LoggingPlayback`, which performs no decoding.

mod player;

pub use player::{LoggingPlayback, Playback};
