//! Persistence backends for the song catalog.
//!
//! The catalog talks to a [`SongStore`] and never touches the filesystem
//! itself; [`CsvSongStore`] is the production line-oriented file store and
//! [`NullSongStore`] a no-op stand-in for tests and tools that do not need
//! persistence.

mod csv_store;
mod null_store;

pub use csv_store::CsvSongStore;
pub use null_store::NullSongStore;

use crate::catalog::Song;
use thiserror::Error;

/// Errors surfaced by a store. I/O failures are not recovered here; they
/// propagate to the caller as fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A non-fatal issue met while loading; the rest of the store still loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadProblem {
    /// A stored line that does not decode into exactly three fields.
    MalformedLine { line_number: usize, content: String },
}

/// What a load produced: the usable songs plus any quarantined lines.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub songs: Vec<Song>,
    pub problems: Vec<LoadProblem>,
}

/// Trait for catalog persistence backends.
pub trait SongStore {
    /// Load the stored sequence. A missing backing store is an empty
    /// catalog, not an error.
    fn load(&self) -> Result<LoadOutcome, StoreError>;

    /// Overwrite the backing store with the given sequence.
    fn save(&self, songs: &[Song]) -> Result<(), StoreError>;
}
