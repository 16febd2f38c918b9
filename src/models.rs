//! Domain model for the song library. A `Song` stays a light-weight data
//! holder (name, author, optional year, lyrics) so the library and the
//! TUI layers can focus on searching and presentation. The only behavior
//! kept on the type itself is the lyrics mutation surface and the two
//! renderings every screen relies on.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::Error;

#[derive(Debug, Clone)]
/// One entry in the library. Duplicates are allowed; nothing here is
/// validated, so an empty author or a year of `Some(-3000)` is accepted as
/// plain data.
pub struct Song {
    /// Title displayed in listings and search results.
    pub name: String,
    /// Author field used both for display and for exact-match search.
    pub author: String,
    /// Release year, if the user knows it. `None` simply drops the year
    /// suffix from every rendering.
    pub year: Option<i32>,
    /// Raw lyrics text, possibly empty. Replaced wholesale or cleared, never
    /// patched line by line.
    pub lyrics: String,
}

impl Song {
    /// Create a song with empty lyrics. Lyrics usually arrive a step later
    /// (typed in the editor or loaded from a file), so the constructor does
    /// not ask for them.
    pub fn new(name: impl Into<String>, author: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            year,
            lyrics: String::new(),
        }
    }

    /// Attach lyrics at construction time.
    pub fn with_lyrics(mut self, lyrics: impl Into<String>) -> Self {
        self.lyrics = lyrics.into();
        self
    }

    /// Erase the lyrics. The song itself stays in the library.
    pub fn clear_lyrics(&mut self) {
        self.lyrics.clear();
    }

    /// Replace the lyrics wholesale with the given text.
    pub fn edit_lyrics(&mut self, text: impl Into<String>) {
        self.lyrics = text.into();
    }

    /// Write the current lyrics verbatim to `path`, truncating any existing
    /// file. No header, no trailing newline beyond what the lyrics contain.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        fs::write(path, &self.lyrics).map_err(|source| Error::SaveLyrics {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Compose the one-line descriptor used by every listing:
    /// `Author - Name`, with ` (Year)` appended only when the year is known.
    pub fn info(&self) -> String {
        format!("{} - {}{}", self.author, self.name, self.year_suffix())
    }

    fn year_suffix(&self) -> String {
        match self.year {
            Some(year) => format!(" ({year})"),
            None => String::new(),
        }
    }
}

impl fmt::Display for Song {
    /// Multi-line rendering shown on the view screen: title line (with the
    /// optional year suffix), attribution line, a `Lyrics:` label, then the
    /// raw lyrics text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Song: {}{}", self.name, self.year_suffix())?;
        writeln!(f, "Lyrics by {}", self.author)?;
        writeln!(f, "Lyrics:")?;
        write!(f, "{}", self.lyrics)
    }
}

/// Read a whole file into lyrics text. This is the load-side mirror of
/// [`Song::save`], used when the user points the add/edit flow at a file
/// instead of typing.
pub fn read_lyrics_file(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::LoadLyrics {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_appends_year_when_present() {
        let song = Song::new("Imagine", "Lennon", Some(1971));
        assert_eq!(song.info(), "Lennon - Imagine (1971)");
    }

    #[test]
    fn info_omits_missing_year() {
        let song = Song::new("Imagine", "Lennon", None);
        assert_eq!(song.info(), "Lennon - Imagine");
    }

    #[test]
    fn clear_lyrics_leaves_empty_text() {
        let mut song = Song::new("Imagine", "Lennon", Some(1971)).with_lyrics("Imagine all");
        song.clear_lyrics();
        assert_eq!(song.lyrics, "");
    }

    #[test]
    fn edit_lyrics_replaces_wholesale() {
        let mut song = Song::new("Imagine", "Lennon", Some(1971)).with_lyrics("old text");
        song.edit_lyrics("brand new verse\nsecond line");
        assert_eq!(song.lyrics, "brand new verse\nsecond line");
    }

    #[test]
    fn display_renders_title_author_and_lyrics() {
        let song =
            Song::new("Imagine", "Lennon", Some(1971)).with_lyrics("Imagine all the people");
        assert_eq!(
            song.to_string(),
            "Song: Imagine (1971)\nLyrics by Lennon\nLyrics:\nImagine all the people"
        );
    }

    #[test]
    fn display_drops_year_suffix_without_year() {
        let song = Song::new("Hey Jude", "McCartney", None);
        assert_eq!(
            song.to_string(),
            "Song: Hey Jude\nLyrics by McCartney\nLyrics:\n"
        );
    }

    #[test]
    fn save_round_trips_lyrics_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("imagine.txt");
        let song = Song::new("Imagine", "Lennon", Some(1971))
            .with_lyrics("Imagine there's no heaven\nIt's easy if you try\n");

        song.save(&path).expect("save should succeed");
        assert_eq!(
            fs::read_to_string(&path).expect("read back"),
            "Imagine there's no heaven\nIt's easy if you try\n"
        );
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("lyrics.txt");
        fs::write(&path, "previous content that is much longer").expect("seed file");

        let song = Song::new("Imagine", "Lennon", None).with_lyrics("short");
        song.save(&path).expect("save should succeed");
        assert_eq!(fs::read_to_string(&path).expect("read back"), "short");
    }

    #[test]
    fn save_reports_unwritable_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join("lyrics.txt");
        let song = Song::new("Imagine", "Lennon", None);

        let err = song.save(&path).expect_err("save into a missing directory");
        assert!(matches!(err, Error::SaveLyrics { .. }));
    }

    #[test]
    fn read_lyrics_file_returns_whole_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("input.txt");
        fs::write(&path, "verse one\n\nverse two\n").expect("seed file");

        assert_eq!(
            read_lyrics_file(&path).expect("read"),
            "verse one\n\nverse two\n"
        );
    }

    #[test]
    fn read_lyrics_file_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_lyrics_file(dir.path().join("absent.txt"))
            .expect_err("reading a missing file");
        assert!(matches!(err, Error::LoadLyrics { .. }));
    }
}
