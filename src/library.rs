//! Track model and library loading.
//!
//! `Track` is the catalog's value type. `TrackLoader` is the seam the
//! organizer loads through; `FolderScanner` is the on-disk implementation.

mod display;
mod model;
mod scan;

pub use display::artist_title;
pub use model::Track;
pub use scan::{FolderScanner, TrackLoader};
