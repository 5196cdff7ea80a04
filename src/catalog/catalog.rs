use super::Song;
use crate::index::SongIndex;
use crate::search::{self, SearchOutcome, SearchStrategy};
use crate::sort::{self, SortStrategy};
use crate::store::{LoadProblem, SongStore};
use anyhow::Result;
use rand::Rng;
use tracing::{info, warn};

/// The catalog pairs the authoritative song sequence with the red-black
/// index and keeps both aligned through every mutation: whatever enters or
/// leaves the sequence enters or leaves the index in the same call, and the
/// store is saved afterwards.
///
/// The sequence keeps insertion (or last-sorted) order; the index is always
/// ordered. Duplicate songs are allowed in both.
pub struct Catalog {
    songs: Vec<Song>,
    index: SongIndex,
    store: Box<dyn SongStore>,
}

impl Catalog {
    /// Load the stored sequence and build the index over it. Lines the
    /// store quarantined are logged and skipped; the rest of the catalog
    /// still opens.
    pub fn open(store: Box<dyn SongStore>) -> Result<Catalog> {
        let outcome = store.load()?;
        for problem in &outcome.problems {
            let LoadProblem::MalformedLine {
                line_number,
                content,
            } = problem;
            warn!("Skipping malformed line {}: {:?}", line_number, content);
        }
        let mut index = SongIndex::new();
        for song in &outcome.songs {
            index.insert(song.clone());
        }
        let catalog = Catalog {
            songs: outcome.songs,
            index,
            store,
        };
        catalog.integrity_check();
        info!("Catalog has {} songs.", catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// The sequence in its current order.
    pub fn list(&self) -> &[Song] {
        &self.songs
    }

    /// Whether the sequence is ascending under the song order. Interpolation
    /// and exponential search only give meaningful answers when it is.
    pub fn is_sorted(&self) -> bool {
        self.songs.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Append a song and index it. Duplicates are permitted and both kept.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Result<Song> {
        let song = Song::new(title, artist, album);
        self.songs.push(song.clone());
        self.index.insert(song.clone());
        self.persist()?;
        self.integrity_check();
        Ok(song)
    }

    /// Add `count` songs with random uppercase fields, 5 to 10 letters each.
    pub fn add_random<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<()> {
        for _ in 0..count {
            let title = random_field(rng);
            let artist = random_field(rng);
            let album = random_field(rng);
            self.add(title, artist, album)?;
        }
        Ok(())
    }

    /// Remove the first song whose title matches exactly, from the sequence
    /// and the index both. Returns the removed song, or None when absent.
    pub fn delete(&mut self, title: &str) -> Result<Option<Song>> {
        let Some(position) = self.songs.iter().position(|s| s.title == title) else {
            return Ok(None);
        };
        let removed = self.songs.remove(position);
        if !self.index.remove(&removed) {
            warn!("Index was missing {:?} while deleting it.", removed);
        }
        self.persist()?;
        self.integrity_check();
        Ok(Some(removed))
    }

    /// Run a search strategy for a title. Read-only; see
    /// [`SearchStrategy::requires_sorted`] for the ordered strategies'
    /// precondition, which is the caller's to honor.
    pub fn search(&self, strategy: SearchStrategy, title: &str) -> SearchOutcome {
        search::run(strategy, &self.songs, &self.index, title)
    }

    /// Reorder the sequence ascending with the chosen strategy and persist
    /// it. Callers wanting timings measure around this call, or time the
    /// pure functions in [`crate::sort`] directly.
    pub fn sort(&mut self, strategy: SortStrategy) -> Result<()> {
        sort::run(strategy, &mut self.songs);
        self.persist()?;
        self.integrity_check();
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.songs)?;
        Ok(())
    }

    /// Verify the sequence and the index hold the same multiset of songs.
    /// O(n log n), so skippable via the `no_checks` feature.
    fn integrity_check(&self) {
        #[cfg(not(feature = "no_checks"))]
        {
            let mut sequence: Vec<&Song> = self.songs.iter().collect();
            sequence.sort();
            assert_eq!(
                sequence,
                self.index.in_order(),
                "sequence and index diverged"
            );
        }
    }
}

fn random_field<R: Rng>(rng: &mut R) -> String {
    let len: usize = rng.random_range(5..=10);
    (0..len)
        .map(|_| rng.random_range(b'A'..=b'Z') as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NullSongStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_catalog() -> Catalog {
        Catalog::open(Box::new(NullSongStore)).expect("null store cannot fail")
    }

    #[test]
    fn add_returns_the_stored_song() {
        let mut catalog = empty_catalog();
        let song = catalog.add("Caruso", "Lucio Dalla", "Dalla").unwrap();
        assert_eq!(song, Song::new("Caruso", "Lucio Dalla", "Dalla"));
        assert_eq!(catalog.list(), &[song]);
    }

    #[test]
    fn duplicates_are_both_kept() {
        let mut catalog = empty_catalog();
        catalog.add("Same", "Same", "Same").unwrap();
        catalog.add("Same", "Same", "Same").unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn delete_removes_from_sequence_and_index() {
        let mut catalog = empty_catalog();
        catalog.add("Zed", "A", "A").unwrap();
        catalog.add("Abba", "B", "B").unwrap();
        catalog.add("Mabel", "C", "C").unwrap();

        let removed = catalog.delete("Mabel").unwrap();
        assert_eq!(removed, Some(Song::new("Mabel", "C", "C")));
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.list().iter().any(|s| s.title == "Mabel"));
        assert_eq!(
            catalog.search(SearchStrategy::Indexed, "Mabel"),
            SearchOutcome::Absent
        );
    }

    #[test]
    fn delete_of_missing_title_reports_not_found() {
        let mut catalog = empty_catalog();
        catalog.add("Only", "One", "Here").unwrap();
        assert_eq!(catalog.delete("Nope").unwrap(), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn delete_takes_the_first_of_equal_titles() {
        let mut catalog = empty_catalog();
        catalog.add("Same", "First", "1").unwrap();
        catalog.add("Same", "Second", "2").unwrap();

        let removed = catalog.delete("Same").unwrap();
        assert_eq!(removed, Some(Song::new("Same", "First", "1")));
        assert_eq!(catalog.list(), &[Song::new("Same", "Second", "2")]);
        assert_eq!(
            catalog.search(SearchStrategy::Indexed, "Same"),
            SearchOutcome::Present
        );
    }

    #[test]
    fn sorting_orders_the_sequence() {
        let mut catalog = empty_catalog();
        catalog.add("Zed", "A", "A").unwrap();
        catalog.add("Abba", "B", "B").unwrap();
        catalog.add("Mabel", "C", "C").unwrap();
        assert!(!catalog.is_sorted());

        catalog.sort(SortStrategy::Insertion).unwrap();
        assert!(catalog.is_sorted());
        let titles: Vec<&str> = catalog.list().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Abba", "Mabel", "Zed"]);
    }

    #[test]
    fn searches_follow_the_worked_example() {
        let mut catalog = empty_catalog();
        catalog.add("Zed", "A", "A").unwrap();
        catalog.add("Abba", "B", "B").unwrap();
        catalog.add("Mabel", "C", "C").unwrap();
        catalog.sort(SortStrategy::Insertion).unwrap();

        assert_eq!(
            catalog.search(SearchStrategy::Indexed, "Mabel"),
            SearchOutcome::Present
        );
        assert_eq!(
            catalog.search(SearchStrategy::Linear, "Nope"),
            SearchOutcome::Absent
        );
        assert_eq!(
            catalog.search(SearchStrategy::Interpolation, "Mabel"),
            SearchOutcome::Position(1)
        );
        assert_eq!(
            catalog.search(SearchStrategy::Exponential, "Zed"),
            SearchOutcome::Position(2)
        );
    }

    #[test]
    fn random_songs_go_through_the_normal_add_path() {
        let mut catalog = empty_catalog();
        let mut rng = StdRng::seed_from_u64(1);
        catalog.add_random(25, &mut rng).unwrap();
        assert_eq!(catalog.len(), 25);
        for song in catalog.list() {
            for field in [&song.title, &song.artist, &song.album] {
                assert!((5..=10).contains(&field.len()));
                assert!(field.chars().all(|c| c.is_ascii_uppercase()));
            }
        }
    }

    #[test]
    fn an_empty_catalog_is_sorted() {
        let catalog = empty_catalog();
        assert!(catalog.is_empty());
        assert!(catalog.is_sorted());
    }
}
