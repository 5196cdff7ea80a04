use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single catalog entry.
///
/// Songs order by title, then artist, then album. All comparisons are
/// case-sensitive; "abba" and "Abba" are different titles.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Song {
        Song {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
        }
    }
}

impl Ord for Song {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.artist.cmp(&other.artist))
            .then_with(|| self.album.cmp(&other.album))
    }
}

impl PartialOrd for Song {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.artist, self.album)
    }
}
