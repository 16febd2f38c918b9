use anyhow::{anyhow, Context, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Where committed lyrics text should land: a song still being created, or an
/// existing song addressed by its 1-based browse index.
#[derive(Clone)]
pub(crate) enum LyricsTarget {
    NewSong {
        name: String,
        author: String,
        year: Option<i32>,
    },
    Existing {
        index: usize,
    },
}

/// Internal representation of the "add song" form fields.
#[derive(Default, Clone)]
pub(crate) struct SongForm {
    pub(crate) name: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) active: SongField,
    pub(crate) error: Option<String>,
}

/// Fields available within the song form.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum SongField {
    Name,
    Author,
    Year,
}

impl Default for SongField {
    fn default() -> Self {
        SongField::Name
    }
}

impl SongForm {
    /// Cycle focus across the three fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            SongField::Name => SongField::Author,
            SongField::Author => SongField::Year,
            SongField::Year => SongField::Name,
        };
    }

    /// Append a character to the active field, validating allowed input.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            SongField::Year => {
                if ch.is_ascii_digit() {
                    self.year.push(ch);
                    true
                } else {
                    false
                }
            }
            SongField::Name => {
                if !ch.is_control() {
                    self.name.push(ch);
                    true
                } else {
                    false
                }
            }
            SongField::Author => {
                if !ch.is_control() {
                    self.author.push(ch);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            SongField::Name => {
                self.name.pop();
            }
            SongField::Author => {
                self.author.pop();
            }
            SongField::Year => {
                self.year.pop();
            }
        }
    }

    /// Validate the inputs and return typed values for the new song. An empty
    /// year field means the song has no year.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String, Option<i32>)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Song name is required."));
        }
        let year_raw = self.year.trim();
        let year = if year_raw.is_empty() {
            None
        } else {
            Some(year_raw.parse::<i32>().context("Year must be a number.")?)
        };
        Ok((name.to_string(), self.author.trim().to_string(), year))
    }

    /// Render a styled line for the modal form.
    pub(crate) fn build_line(&self, field_name: &str, field: SongField) -> Line<'static> {
        let (value, is_active) = match field {
            SongField::Name => (&self.name, self.active == SongField::Name),
            SongField::Author => (&self.author, self.active == SongField::Author),
            SongField::Year => (&self.year, self.active == SongField::Year),
        };

        let placeholder = match field {
            SongField::Name => "<required>",
            SongField::Author => "<optional>",
            SongField::Year => "<optional>",
        };

        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Character length of the requested field.
    pub(crate) fn value_len(&self, field: SongField) -> usize {
        match field {
            SongField::Name => self.name.chars().count(),
            SongField::Author => self.author.chars().count(),
            SongField::Year => self.year.chars().count(),
        }
    }
}

/// Single-field form for a lyrics file path, used by both the save and the
/// load flows.
#[derive(Default, Clone)]
pub(crate) struct PathForm {
    pub(crate) path: String,
    pub(crate) error: Option<String>,
}

impl PathForm {
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.path.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.path.pop();
    }

    /// Validate and return the path text.
    pub(crate) fn parse_input(&self) -> Result<String> {
        let path = self.path.trim();
        if path.is_empty() {
            return Err(anyhow!("File path is required."));
        }
        Ok(path.to_string())
    }

    /// Render the single path line for the modal form.
    pub(crate) fn build_line(&self) -> Line<'static> {
        let display = if self.path.is_empty() {
            "<required>".to_string()
        } else {
            self.path.clone()
        };

        Line::from(vec![
            Span::raw("Path: "),
            Span::styled(display, Style::default().fg(Color::Yellow)),
        ])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.path.chars().count()
    }
}

/// Multi-line buffer for typing lyrics in. The text is committed wholesale, so
/// cancelling leaves the target untouched.
pub(crate) struct LyricsEditor {
    pub(crate) target: LyricsTarget,
    pub(crate) text: String,
}

impl LyricsEditor {
    pub(crate) fn new(target: LyricsTarget, text: String) -> Self {
        Self { target, text }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.text.push(ch);
        true
    }

    pub(crate) fn newline(&mut self) {
        self.text.push('\n');
    }

    pub(crate) fn backspace(&mut self) {
        self.text.pop();
    }

    /// (column, row) of the insertion point, counted in characters. The
    /// cursor always sits at the end of the buffer.
    pub(crate) fn cursor(&self) -> (usize, usize) {
        let row = self.text.chars().filter(|&ch| ch == '\n').count();
        let column = self.text.chars().rev().take_while(|&ch| ch != '\n').count();
        (column, row)
    }
}

/// Two-option picker for where lyrics text comes from, carrying the target
/// the chosen flow will apply to.
pub(crate) struct SourcePrompt {
    pub(crate) target: LyricsTarget,
    pub(crate) selection: LyricsSource,
}

/// The two ways lyrics can be supplied.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum LyricsSource {
    Keyboard,
    File,
}

impl SourcePrompt {
    /// Create the picker with the initial selection on typing.
    pub(crate) fn new(target: LyricsTarget) -> Self {
        Self {
            target,
            selection: LyricsSource::Keyboard,
        }
    }

    /// Move the selection forward (Keyboard -> File).
    pub(crate) fn next(&mut self) {
        self.selection = match self.selection {
            LyricsSource::Keyboard => LyricsSource::File,
            LyricsSource::File => LyricsSource::Keyboard,
        };
    }

    /// Move the selection backward (Keyboard <- File).
    pub(crate) fn previous(&mut self) {
        self.selection = match self.selection {
            LyricsSource::Keyboard => LyricsSource::File,
            LyricsSource::File => LyricsSource::Keyboard,
        };
    }

    /// Labels rendered on the picker buttons.
    pub(crate) fn labels(&self) -> [&'static str; 2] {
        ["Type them in", "Load from a file"]
    }

    /// Index of the currently highlighted choice.
    pub(crate) fn selected_index(&self) -> usize {
        match self.selection {
            LyricsSource::Keyboard => 0,
            LyricsSource::File => 1,
        }
    }
}

/// State for confirming that a song's lyrics should be erased.
pub(crate) struct ConfirmClear {
    /// 1-based browse index of the song whose lyrics are on the line.
    pub(crate) index: usize,
    /// Descriptor captured when the dialog opened, shown in the prompt.
    pub(crate) descriptor: String,
}

/// State for an active search prompt.
pub(crate) struct SearchPrompt {
    pub(crate) kind: SearchKind,
    pub(crate) query: String,
}

/// Which linear search the prompt will run.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum SearchKind {
    Author,
    Word,
}

impl SearchKind {
    /// Human label used in screen titles.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            SearchKind::Author => "author",
            SearchKind::Word => "lyrics word",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_inputs_requires_a_name() {
        let form = SongForm::default();
        let err = form.parse_inputs().expect_err("empty form");
        assert_eq!(err.to_string(), "Song name is required.");
    }

    #[test]
    fn parse_inputs_treats_an_empty_year_as_none() {
        let form = SongForm {
            name: " Imagine ".to_string(),
            author: " Lennon ".to_string(),
            ..SongForm::default()
        };
        let (name, author, year) = form.parse_inputs().expect("valid form");
        assert_eq!(name, "Imagine");
        assert_eq!(author, "Lennon");
        assert_eq!(year, None);
    }

    #[test]
    fn parse_inputs_parses_a_digit_year() {
        let form = SongForm {
            name: "Imagine".to_string(),
            year: "1971".to_string(),
            ..SongForm::default()
        };
        let (_, _, year) = form.parse_inputs().expect("valid form");
        assert_eq!(year, Some(1971));
    }

    #[test]
    fn year_field_accepts_digits_only() {
        let mut form = SongForm::default();
        form.active = SongField::Year;
        assert!(!form.push_char('x'));
        assert!(form.push_char('1'));
        assert!(form.push_char('9'));
        assert_eq!(form.year, "19");
    }

    #[test]
    fn toggle_field_cycles_through_all_three() {
        let mut form = SongForm::default();
        assert!(matches!(form.active, SongField::Name));
        form.toggle_field();
        assert!(matches!(form.active, SongField::Author));
        form.toggle_field();
        assert!(matches!(form.active, SongField::Year));
        form.toggle_field();
        assert!(matches!(form.active, SongField::Name));
    }

    #[test]
    fn editor_builds_text_through_newline_and_backspace() {
        let mut editor = LyricsEditor::new(
            LyricsTarget::Existing { index: 1 },
            String::new(),
        );
        for ch in "Imagine".chars() {
            assert!(editor.push_char(ch));
        }
        editor.newline();
        editor.push_char('a');
        editor.push_char('l');
        editor.push_char('k');
        editor.backspace();
        editor.push_char('l');
        assert_eq!(editor.text, "Imagine\nall");
    }

    #[test]
    fn editor_cursor_sits_at_the_end_of_the_last_line() {
        let mut editor = LyricsEditor::new(
            LyricsTarget::Existing { index: 1 },
            "Imagine\nall".to_string(),
        );
        assert_eq!(editor.cursor(), (3, 1));
        editor.newline();
        assert_eq!(editor.cursor(), (0, 2));
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.cursor(), (2, 1));
    }

    #[test]
    fn path_form_rejects_a_blank_path() {
        let form = PathForm {
            path: "   ".to_string(),
            error: None,
        };
        assert!(form.parse_input().is_err());
    }
}
