use crate::catalog::Song;
use std::cmp::Ordering;

/// Exponential search by title.
///
/// Requires `songs` to be ascending under the song order; the result is
/// unspecified otherwise. The probe bound doubles (1, 2, 4, ...) until it
/// passes the target or the end of the sequence, then an ordinary binary
/// search runs inside the bracket. O(log n).
pub fn search(songs: &[Song], title: &str) -> Option<usize> {
    if songs.is_empty() {
        return None;
    }
    if songs[0].title == title {
        return Some(0);
    }
    let mut bound = 1;
    while bound < songs.len() && songs[bound].title.as_str() < title {
        bound *= 2;
    }
    let lo = bound / 2;
    let hi = bound.min(songs.len() - 1);
    binary(&songs[lo..=hi], title).map(|at| lo + at)
}

fn binary(songs: &[Song], title: &str) -> Option<usize> {
    let mut lo = 0;
    let mut hi = songs.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match songs[mid].title.as_str().cmp(title) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}
