//! Line-oriented file store, one `title,artist,album` record per line.
//!
//! Plain fields are written bare; a field containing a comma, a double
//! quote, or a line break is wrapped in double quotes with inner quotes
//! doubled, so no song can corrupt the three-fields-per-line contract.
//! Files written by tools that never quote remain readable.

use super::{LoadOutcome, LoadProblem, SongStore, StoreError};
use crate::catalog::Song;
use std::path::PathBuf;

pub struct CsvSongStore {
    path: PathBuf,
}

impl CsvSongStore {
    pub fn new(path: impl Into<PathBuf>) -> CsvSongStore {
        CsvSongStore { path: path.into() }
    }
}

impl SongStore for CsvSongStore {
    fn load(&self) -> Result<LoadOutcome, StoreError> {
        if !self.path.exists() {
            return Ok(LoadOutcome::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let mut outcome = LoadOutcome::default();
        for (at, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(line) {
                Some(song) => outcome.songs.push(song),
                None => outcome.problems.push(LoadProblem::MalformedLine {
                    line_number: at + 1,
                    content: line.to_owned(),
                }),
            }
        }
        Ok(outcome)
    }

    fn save(&self, songs: &[Song]) -> Result<(), StoreError> {
        let mut content = String::new();
        for song in songs {
            content.push_str(&encode_field(&song.title));
            content.push(',');
            content.push_str(&encode_field(&song.artist));
            content.push(',');
            content.push_str(&encode_field(&song.album));
            content.push('\n');
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        let mut out = String::with_capacity(field.len() + 2);
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
        out
    } else {
        field.to_owned()
    }
}

/// Split a line into exactly three fields, honoring quoting. Returns None
/// for anything else; the caller quarantines the line.
fn decode_line(line: &str) -> Option<Song> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    if in_quotes {
        // Unterminated quote.
        return None;
    }
    fields.push(field);

    match <[String; 3]>::try_from(fields) {
        Ok([title, artist, album]) => Some(Song {
            title,
            artist,
            album,
        }),
        Err(_) => None,
    }
}
