//! Null song store implementation.
//!
//! A no-op implementation of SongStore for use cases where persistence is
//! not needed (e.g., exercising the catalog in tests without touching disk).

use super::{LoadOutcome, SongStore, StoreError};
use crate::catalog::Song;

/// A no-op store: loads an empty catalog and discards saves.
pub struct NullSongStore;

impl SongStore for NullSongStore {
    fn load(&self) -> Result<LoadOutcome, StoreError> {
        Ok(LoadOutcome::default())
    }

    fn save(&self, _songs: &[Song]) -> Result<(), StoreError> {
        Ok(())
    }
}
