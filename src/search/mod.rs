//! Search strategies over the catalog sequence.
//!
//! All strategies are read-only. Linear scanning works on any ordering;
//! interpolation and exponential search require the sequence to be
//! ascending under the song order and the caller is responsible for
//! sorting first (the catalog never re-sorts on their behalf). The
//! indexed strategy goes through the red-black index instead of the
//! sequence and is correct in any order.

pub mod exponential;
pub mod interpolation;
pub mod linear;

use crate::catalog::Song;
use crate::index::SongIndex;
use clap::ValueEnum;

/// The available search algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchStrategy {
    Linear,
    Indexed,
    Interpolation,
    Exponential,
}

impl SearchStrategy {
    /// Whether the strategy only gives meaningful answers on a sequence
    /// sorted ascending by the song order.
    pub fn requires_sorted(&self) -> bool {
        matches!(
            self,
            SearchStrategy::Interpolation | SearchStrategy::Exponential
        )
    }
}

/// Result of a title search. Sequence-based strategies report the matched
/// position; the index only answers membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Position(usize),
    Present,
    Absent,
}

/// Run the chosen strategy for a title over the sequence (and index).
pub fn run(
    strategy: SearchStrategy,
    songs: &[Song],
    index: &SongIndex,
    title: &str,
) -> SearchOutcome {
    let position = match strategy {
        SearchStrategy::Linear => linear::search(songs, title),
        SearchStrategy::Interpolation => interpolation::search(songs, title),
        SearchStrategy::Exponential => exponential::search(songs, title),
        SearchStrategy::Indexed => {
            return if index.contains_title(title) {
                SearchOutcome::Present
            } else {
                SearchOutcome::Absent
            };
        }
    };
    match position {
        Some(at) => SearchOutcome::Position(at),
        None => SearchOutcome::Absent,
    }
}
