use std::cmp::min;

use crate::library::Library;

use super::forms::SearchKind;

/// Row rendered in a listing (the count header or an individual song).
pub(crate) struct ListingRow {
    pub(crate) kind: RowKind,
    pub(crate) text: String,
    /// 0-based library position for song rows; `None` for the header.
    pub(crate) position: Option<usize>,
}

#[derive(PartialEq, Eq)]
pub(crate) enum RowKind {
    Header,
    Song,
}

/// Split a listing rendered by the library into rows, mapping each song line
/// back to the 0-based position it was rendered from. The first line is
/// always the count header; song line `n` corresponds to `positions[n - 1]`.
fn listing_rows(listing: &str, positions: &[usize]) -> Vec<ListingRow> {
    listing
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            if line_idx == 0 {
                ListingRow {
                    kind: RowKind::Header,
                    text: line.to_string(),
                    position: None,
                }
            } else {
                ListingRow {
                    kind: RowKind::Song,
                    text: line.to_string(),
                    position: positions.get(line_idx - 1).copied(),
                }
            }
        })
        .collect()
}

/// Backing state for the all-songs listing.
pub(crate) struct ListingScreen {
    pub(crate) rows: Vec<ListingRow>,
    pub(crate) selected: usize,
    pub(crate) scroll: u16,
}

impl ListingScreen {
    pub(crate) fn new(library: &Library) -> Self {
        let mut screen = Self {
            rows: Vec::new(),
            selected: 0,
            scroll: 0,
        };
        screen.refresh(library);
        screen
    }

    /// Rebuild the rows from the library's own listing text so the screen
    /// shows exactly what the core renders.
    pub(crate) fn refresh(&mut self, library: &Library) {
        let positions: Vec<usize> = (0..library.len()).collect();
        self.rows = listing_rows(&library.info(), &positions);
        self.ensure_in_bounds();
        self.update_scroll();
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let mut new = self.selected as isize + delta;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
        self.update_scroll();
    }

    pub(crate) fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.selected = 0;
        }
        self.update_scroll();
    }

    pub(crate) fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected = self.rows.len() - 1;
        }
        self.update_scroll();
    }

    /// 0-based library position of the selected row, when it is a song row.
    pub(crate) fn current_position(&self) -> Option<usize> {
        self.rows.get(self.selected).and_then(|row| row.position)
    }

    pub(crate) fn display_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let pointer = if idx == self.selected { "▶ " } else { "  " };
                match row.kind {
                    RowKind::Header => format!("{pointer}{}", row.text),
                    RowKind::Song => format!("{pointer}  {}", row.text),
                }
            })
            .collect()
    }

    pub(crate) fn max_scroll(&self) -> u16 {
        self.rows.len().saturating_sub(1) as u16
    }

    fn update_scroll(&mut self) {
        let desired = self.selected.saturating_sub(3) as u16;
        self.scroll = min(desired, self.max_scroll());
    }

    fn ensure_in_bounds(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}

/// Backing state for a search's result listing. Each song row carries the
/// 0-based position the search matched, so selection maps back into the
/// library.
pub(crate) struct ResultsScreen {
    pub(crate) kind: SearchKind,
    pub(crate) query: String,
    pub(crate) rows: Vec<ListingRow>,
    pub(crate) selected: usize,
    pub(crate) scroll: u16,
}

impl ResultsScreen {
    pub(crate) fn new(library: &Library, kind: SearchKind, query: String, ids: &[usize]) -> Self {
        let rows = listing_rows(&library.info_by_ids(ids), ids);
        Self {
            kind,
            query,
            rows,
            selected: 0,
            scroll: 0,
        }
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let mut new = self.selected as isize + delta;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
        self.update_scroll();
    }

    pub(crate) fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.selected = 0;
        }
        self.update_scroll();
    }

    pub(crate) fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected = self.rows.len() - 1;
        }
        self.update_scroll();
    }

    /// 0-based library position of the selected row, when it is a song row.
    pub(crate) fn current_position(&self) -> Option<usize> {
        self.rows.get(self.selected).and_then(|row| row.position)
    }

    pub(crate) fn display_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let pointer = if idx == self.selected { "▶ " } else { "  " };
                match row.kind {
                    RowKind::Header => format!("{pointer}{}", row.text),
                    RowKind::Song => format!("{pointer}  {}", row.text),
                }
            })
            .collect()
    }

    pub(crate) fn max_scroll(&self) -> u16 {
        self.rows.len().saturating_sub(1) as u16
    }

    fn update_scroll(&mut self) {
        let desired = self.selected.saturating_sub(3) as u16;
        self.scroll = min(desired, self.max_scroll());
    }
}

/// Which listing a song view returns to when dismissed.
#[derive(Clone)]
pub(crate) enum Origin {
    AllSongs,
    Search { kind: SearchKind, query: String },
}

/// Backing state for the full-lyrics view of one song. The song is addressed
/// by its 1-based browse index so every access resolves through the
/// library's clamped lookup.
pub(crate) struct ViewScreen {
    pub(crate) index: usize,
    pub(crate) scroll: u16,
    pub(crate) origin: Origin,
}

impl ViewScreen {
    pub(crate) fn new(index: usize, origin: Origin) -> Self {
        Self {
            index,
            scroll: 0,
            origin,
        }
    }

    pub(crate) fn scroll_up(&mut self, delta: u16) {
        self.scroll = self.scroll.saturating_sub(delta);
    }

    pub(crate) fn scroll_down(&mut self, delta: u16, max: u16) {
        self.scroll = min(self.scroll.saturating_add(delta), max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Song;

    fn beatles_library() -> Library {
        let mut library = Library::new();
        library.add(Song::new("Imagine", "Lennon", Some(1971)).with_lyrics("Imagine all"));
        library.add(Song::new("Yesterday", "Lennon", Some(1965)).with_lyrics("all my troubles"));
        library.add(Song::new("Hey Jude", "McCartney", None).with_lyrics("na na na"));
        library
    }

    #[test]
    fn listing_rows_mirror_the_library_rendering() {
        let library = beatles_library();
        let screen = ListingScreen::new(&library);

        assert_eq!(screen.rows.len(), 4);
        assert!(matches!(screen.rows[0].kind, RowKind::Header));
        assert_eq!(screen.rows[0].text, "There are 3 songs found");
        assert_eq!(screen.rows[0].position, None);
        assert_eq!(screen.rows[1].text, "1. Lennon - Imagine (1971)");
        assert_eq!(screen.rows[1].position, Some(0));
        assert_eq!(screen.rows[3].text, "3. McCartney - Hey Jude");
        assert_eq!(screen.rows[3].position, Some(2));
    }

    #[test]
    fn empty_library_yields_only_the_header_row() {
        let library = Library::new();
        let screen = ListingScreen::new(&library);

        assert_eq!(screen.rows.len(), 1);
        assert_eq!(screen.rows[0].text, "There are 0 songs found");
        assert_eq!(screen.current_position(), None);
    }

    #[test]
    fn results_rows_follow_the_search_subset() {
        let library = beatles_library();
        let screen = ResultsScreen::new(&library, SearchKind::Author, "x".to_string(), &[2, 0]);

        assert_eq!(screen.rows.len(), 3);
        assert_eq!(screen.rows[0].text, "There are 2 songs found");
        assert_eq!(screen.rows[1].text, "1. McCartney - Hey Jude");
        assert_eq!(screen.rows[1].position, Some(2));
        assert_eq!(screen.rows[2].text, "2. Lennon - Imagine (1971)");
        assert_eq!(screen.rows[2].position, Some(0));
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let library = beatles_library();
        let mut screen = ListingScreen::new(&library);

        screen.move_selection(-5);
        assert_eq!(screen.selected, 0);
        screen.move_selection(100);
        assert_eq!(screen.selected, 3);
        screen.select_first();
        assert_eq!(screen.selected, 0);
        screen.select_last();
        assert_eq!(screen.selected, 3);
    }

    #[test]
    fn current_position_skips_the_header() {
        let library = beatles_library();
        let mut screen = ListingScreen::new(&library);

        assert_eq!(screen.current_position(), None);
        screen.move_selection(1);
        assert_eq!(screen.current_position(), Some(0));
    }

    #[test]
    fn display_lines_mark_the_selected_row() {
        let library = beatles_library();
        let mut screen = ListingScreen::new(&library);
        screen.move_selection(1);

        let lines = screen.display_lines();
        assert_eq!(lines[0], "  There are 3 songs found");
        assert_eq!(lines[1], "▶   1. Lennon - Imagine (1971)");
        assert_eq!(lines[2], "    2. Lennon - Yesterday (1965)");
    }

    #[test]
    fn view_scroll_saturates_at_both_ends() {
        let mut view = ViewScreen::new(1, Origin::AllSongs);
        view.scroll_up(3);
        assert_eq!(view.scroll, 0);
        view.scroll_down(2, 5);
        assert_eq!(view.scroll, 2);
        view.scroll_down(10, 5);
        assert_eq!(view.scroll, 5);
    }
}
