//! Comparison-based sort strategies over the catalog sequence.
//!
//! Every algorithm is a pure function generic over `T: Ord`, so callers can
//! time the strategies uniformly; the catalog applies them to its song
//! sequence and persists the result afterwards.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;

use clap::ValueEnum;

/// The available sort algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortStrategy {
    Bubble,
    Insertion,
    Merge,
    Quick,
    Heap,
}

/// Reorder `items` ascending with the chosen strategy.
pub fn run<T: Ord>(strategy: SortStrategy, items: &mut Vec<T>) {
    match strategy {
        SortStrategy::Bubble => bubble::sort(items),
        SortStrategy::Insertion => insertion::sort(items),
        SortStrategy::Merge => merge::sort(items),
        SortStrategy::Quick => quick::sort(items),
        SortStrategy::Heap => heap::sort(items),
    }
}
