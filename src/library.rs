//! The in-memory song collection for one session. Insertion order is display
//! order and is significant: every listing numbers songs by position, and
//! searches report positions back so the caller can browse straight into a
//! match. A session's library is small, so lookups are plain linear scans
//! over a `Vec`.

use crate::error::Error;
use crate::models::Song;

/// Ordered, append-only collection of songs. Created empty once per session
/// and never persisted; only individual lyrics are saved to files on
/// request.
#[derive(Debug, Default)]
pub struct Library {
    songs: Vec<Song>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song at the end of the collection. Always succeeds;
    /// duplicates are allowed.
    pub fn add(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Look up the song at 1-based position `index`. Out-of-range indices
    /// are clamped rather than rejected: below 1 resolves to the first
    /// song, beyond the end to the last. Only an empty library is an
    /// error.
    pub fn browse(&self, index: usize) -> Result<&Song, Error> {
        let clamped = self.clamp_index(index)?;
        Ok(&self.songs[clamped])
    }

    /// Mutable variant of [`Library::browse`] with identical clamping, used
    /// by the lyrics editing flows.
    pub fn browse_mut(&mut self, index: usize) -> Result<&mut Song, Error> {
        let clamped = self.clamp_index(index)?;
        Ok(&mut self.songs[clamped])
    }

    fn clamp_index(&self, index: usize) -> Result<usize, Error> {
        if self.songs.is_empty() {
            return Err(Error::EmptyLibrary);
        }
        Ok(index.clamp(1, self.songs.len()) - 1)
    }

    /// 0-based positions of every song whose author equals `author` exactly
    /// (case-sensitive, no normalization), in insertion order. An empty
    /// result is a normal outcome, not an error.
    pub fn search_by_author(&self, author: &str) -> Vec<usize> {
        self.songs
            .iter()
            .enumerate()
            .filter(|(_, song)| song.author == author)
            .map(|(position, _)| position)
            .collect()
    }

    /// 0-based positions of every song whose lyrics contain `word` as a
    /// contiguous substring (case-sensitive), in insertion order.
    pub fn search_by_word(&self, word: &str) -> Vec<usize> {
        self.songs
            .iter()
            .enumerate()
            .filter(|(_, song)| song.lyrics.contains(word))
            .map(|(position, _)| position)
            .collect()
    }

    /// Render the numbered listing of the whole collection, headed by the
    /// song count. Display numbers are 1-based.
    pub fn info(&self) -> String {
        let all: Vec<usize> = (0..self.songs.len()).collect();
        self.info_by_ids(&all)
    }

    /// Render the same listing restricted to the given 0-based positions,
    /// renumbered from 1 independently of where the songs sit in the
    /// collection. This is how search results are displayed.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of range. Positions are expected to come
    /// from this library's own searches.
    pub fn info_by_ids(&self, ids: &[usize]) -> String {
        let mut listing = format!("There are {} songs found", ids.len());
        for (display, &position) in ids.iter().enumerate() {
            listing.push('\n');
            listing.push_str(&format!("{}. {}", display + 1, self.songs[position].info()));
        }
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beatles_library() -> Library {
        let mut library = Library::new();
        library.add(Song::new("Imagine", "Lennon", Some(1971)).with_lyrics("Imagine all"));
        library.add(Song::new("Yesterday", "Lennon", Some(1965)).with_lyrics("all my troubles"));
        library.add(Song::new("Hey Jude", "McCartney", None).with_lyrics("na na na"));
        library
    }

    #[test]
    fn library_starts_empty_and_grows_with_adds() {
        let mut library = Library::new();
        assert!(library.is_empty());
        assert_eq!(library.len(), 0);

        library.add(Song::new("Imagine", "Lennon", Some(1971)));
        assert!(!library.is_empty());
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn browse_clamps_low_indices_to_first_song() {
        let library = beatles_library();
        let first = library.browse(1).expect("first song");
        assert_eq!(first.name, "Imagine");
        assert_eq!(library.browse(0).expect("clamped").name, "Imagine");
    }

    #[test]
    fn browse_clamps_high_indices_to_last_song() {
        let library = beatles_library();
        let last = library.browse(library.len()).expect("last song");
        assert_eq!(last.name, "Hey Jude");
        assert_eq!(library.browse(99).expect("clamped").name, "Hey Jude");
    }

    #[test]
    fn browse_on_empty_library_is_an_error() {
        let library = Library::new();
        assert!(matches!(library.browse(1), Err(Error::EmptyLibrary)));

        let mut library = Library::new();
        assert!(matches!(library.browse_mut(1), Err(Error::EmptyLibrary)));
    }

    #[test]
    fn browse_mut_clamps_and_edits_in_place() {
        let mut library = beatles_library();
        library
            .browse_mut(99)
            .expect("clamped to last")
            .edit_lyrics("better better better");
        assert_eq!(library.browse(3).expect("last").lyrics, "better better better");
    }

    #[test]
    fn search_by_author_reports_positions_in_insertion_order() {
        let library = beatles_library();
        assert_eq!(library.search_by_author("Lennon"), vec![0, 1]);
        assert_eq!(library.search_by_author("McCartney"), vec![2]);
    }

    #[test]
    fn search_by_author_is_exact_and_case_sensitive() {
        let library = beatles_library();
        assert!(library.search_by_author("lennon").is_empty());
        assert!(library.search_by_author("Lenn").is_empty());
        assert!(library.search_by_author("Harrison").is_empty());
    }

    #[test]
    fn search_by_word_matches_substrings_of_lyrics() {
        let library = beatles_library();
        assert_eq!(library.search_by_word("all"), vec![0, 1]);
        assert_eq!(library.search_by_word("na na"), vec![2]);
        assert!(library.search_by_word("troubLes").is_empty());
        assert!(library.search_by_word("submarine").is_empty());
    }

    #[test]
    fn info_numbers_every_song_under_a_count_header() {
        let library = beatles_library();
        assert_eq!(
            library.info(),
            "There are 3 songs found\n\
             1. Lennon - Imagine (1971)\n\
             2. Lennon - Yesterday (1965)\n\
             3. McCartney - Hey Jude"
        );
    }

    #[test]
    fn info_on_empty_library_is_just_the_header() {
        let library = Library::new();
        assert_eq!(library.info(), "There are 0 songs found");
    }

    #[test]
    fn info_by_ids_renumbers_the_subset_from_one() {
        let library = beatles_library();
        assert_eq!(
            library.info_by_ids(&[2, 0]),
            "There are 2 songs found\n\
             1. McCartney - Hey Jude\n\
             2. Lennon - Imagine (1971)"
        );
    }

    #[test]
    fn info_by_ids_with_no_ids_is_just_the_header() {
        let library = beatles_library();
        assert_eq!(library.info_by_ids(&[]), "There are 0 songs found");
    }
}
