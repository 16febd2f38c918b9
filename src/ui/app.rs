use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::library::Library;
use crate::models::{read_lyrics_file, Song};

use super::forms::{
    ConfirmClear, LyricsEditor, LyricsSource, LyricsTarget, PathForm, SearchKind, SearchPrompt,
    SongField, SongForm, SourcePrompt,
};
use super::helpers::{centered_rect, surface_error};
use super::screens::{ListingScreen, Origin, ResultsScreen, ViewScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

/// High-level navigation states. Keeping this explicit makes it easy to reason
/// about which rendering path runs and what keyboard shortcuts should do.
enum Screen {
    Songs(ListingScreen),
    Results(ResultsScreen),
    View(ViewScreen),
}

/// Fine-grained modes scoped to the current screen.
enum Mode {
    Normal,
    AddingSong(SongForm),
    ChoosingLyricsSource(SourcePrompt),
    EditingLyrics(LyricsEditor),
    EnteringLyricsPath {
        target: LyricsTarget,
        form: PathForm,
    },
    SavingLyrics {
        index: usize,
        form: PathForm,
    },
    ConfirmClearLyrics(ConfirmClear),
    PromptingSearch(SearchPrompt),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    library: Library,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(library: Library) -> Self {
        let listing = ListingScreen::new(&library);
        Self {
            library,
            screen: Screen::Songs(listing),
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingSong(form) => self.handle_add_song(code, form)?,
            Mode::ChoosingLyricsSource(prompt) => self.handle_lyrics_source(code, prompt)?,
            Mode::EditingLyrics(editor) => self.handle_lyrics_editor(code, editor)?,
            Mode::EnteringLyricsPath { target, form } => {
                self.handle_lyrics_path(code, target, form)?
            }
            Mode::SavingLyrics { index, form } => self.handle_save_path(code, index, form)?,
            Mode::ConfirmClearLyrics(confirm) => self.handle_confirm_clear(code, confirm)?,
            Mode::PromptingSearch(prompt) => self.handle_search_prompt(code, prompt)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Songs(ref mut listing) => {
                let mut open_position: Option<usize> = None;

                match code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        *exit = true;
                    }
                    KeyCode::Up => listing.move_selection(-1),
                    KeyCode::Down => listing.move_selection(1),
                    KeyCode::PageUp => listing.move_selection(-5),
                    KeyCode::PageDown => listing.move_selection(5),
                    KeyCode::Home => listing.select_first(),
                    KeyCode::End => listing.select_last(),
                    KeyCode::Enter => {
                        open_position = listing.current_position();
                    }
                    KeyCode::Char('+') => {
                        self.clear_status();
                        return Ok(Mode::AddingSong(SongForm::default()));
                    }
                    KeyCode::Char('a') | KeyCode::Char('A') => {
                        self.clear_status();
                        return Ok(Mode::PromptingSearch(SearchPrompt {
                            kind: SearchKind::Author,
                            query: String::new(),
                        }));
                    }
                    KeyCode::Char('w') | KeyCode::Char('W') => {
                        self.clear_status();
                        return Ok(Mode::PromptingSearch(SearchPrompt {
                            kind: SearchKind::Word,
                            query: String::new(),
                        }));
                    }
                    _ => {}
                }

                if let Some(position) = open_position {
                    self.clear_status();
                    self.open_view(position + 1, Origin::AllSongs);
                } else if matches!(code, KeyCode::Enter) {
                    self.set_status("Select a song to view it.", StatusKind::Error);
                }

                Ok(Mode::Normal)
            }
            Screen::Results(ref mut results) => {
                let mut open_position: Option<usize> = None;
                let mut back_to_all = false;

                match code {
                    KeyCode::Char('q') => {
                        *exit = true;
                    }
                    KeyCode::Esc => {
                        back_to_all = true;
                    }
                    KeyCode::Up => results.move_selection(-1),
                    KeyCode::Down => results.move_selection(1),
                    KeyCode::PageUp => results.move_selection(-5),
                    KeyCode::PageDown => results.move_selection(5),
                    KeyCode::Home => results.select_first(),
                    KeyCode::End => results.select_last(),
                    KeyCode::Enter => {
                        open_position = results.current_position();
                    }
                    KeyCode::Char('a') | KeyCode::Char('A') => {
                        self.clear_status();
                        return Ok(Mode::PromptingSearch(SearchPrompt {
                            kind: SearchKind::Author,
                            query: String::new(),
                        }));
                    }
                    KeyCode::Char('w') | KeyCode::Char('W') => {
                        self.clear_status();
                        return Ok(Mode::PromptingSearch(SearchPrompt {
                            kind: SearchKind::Word,
                            query: String::new(),
                        }));
                    }
                    _ => {}
                }

                if back_to_all {
                    self.clear_status();
                    self.show_all_songs();
                } else if let Some(position) = open_position {
                    let origin = Origin::Search {
                        kind: results.kind,
                        query: results.query.clone(),
                    };
                    self.clear_status();
                    self.open_view(position + 1, origin);
                } else if matches!(code, KeyCode::Enter) {
                    self.set_status("Select a song to view it.", StatusKind::Error);
                }

                Ok(Mode::Normal)
            }
            Screen::View(ref mut view) => {
                let mut back: Option<Origin> = None;
                let mut edit_index: Option<usize> = None;
                let mut clear_index: Option<usize> = None;
                let mut save_index: Option<usize> = None;

                let max_scroll = match self.library.browse(view.index) {
                    Ok(song) => song.to_string().lines().count().saturating_sub(1) as u16,
                    Err(_) => 0,
                };

                match code {
                    KeyCode::Char('q') => {
                        *exit = true;
                    }
                    KeyCode::Esc => {
                        back = Some(view.origin.clone());
                    }
                    KeyCode::Up => view.scroll_up(1),
                    KeyCode::Down => view.scroll_down(1, max_scroll),
                    KeyCode::PageUp => view.scroll_up(5),
                    KeyCode::PageDown => view.scroll_down(5, max_scroll),
                    KeyCode::Char('e') | KeyCode::Char('E') => {
                        edit_index = Some(view.index);
                    }
                    KeyCode::Char('d') | KeyCode::Char('D') => {
                        clear_index = Some(view.index);
                    }
                    KeyCode::Char('s') | KeyCode::Char('S') => {
                        save_index = Some(view.index);
                    }
                    _ => {}
                }

                if let Some(origin) = back {
                    self.clear_status();
                    self.return_to_origin(&origin);
                } else if let Some(index) = edit_index {
                    self.clear_status();
                    return Ok(Mode::ChoosingLyricsSource(SourcePrompt::new(
                        LyricsTarget::Existing { index },
                    )));
                } else if let Some(index) = clear_index {
                    match self.library.browse(index) {
                        Ok(song) => {
                            let descriptor = song.info();
                            self.clear_status();
                            return Ok(Mode::ConfirmClearLyrics(ConfirmClear {
                                index,
                                descriptor,
                            }));
                        }
                        Err(err) => self.set_status(err.to_string(), StatusKind::Error),
                    }
                } else if let Some(index) = save_index {
                    self.clear_status();
                    return Ok(Mode::SavingLyrics {
                        index,
                        form: PathForm::default(),
                    });
                }

                Ok(Mode::Normal)
            }
        }
    }

    fn handle_add_song(&mut self, code: KeyCode, mut form: SongForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Add song cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Tab | KeyCode::BackTab => {
                form.toggle_field();
                Ok(Mode::AddingSong(form))
            }
            KeyCode::Backspace => {
                form.backspace();
                Ok(Mode::AddingSong(form))
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok((name, author, year)) => Ok(Mode::ChoosingLyricsSource(SourcePrompt::new(
                    LyricsTarget::NewSong { name, author, year },
                ))),
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                    Ok(Mode::AddingSong(form))
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
                Ok(Mode::AddingSong(form))
            }
            _ => Ok(Mode::AddingSong(form)),
        }
    }

    fn handle_lyrics_source(&mut self, code: KeyCode, mut prompt: SourcePrompt) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                let message = match prompt.target {
                    LyricsTarget::NewSong { .. } => "Add song cancelled.",
                    LyricsTarget::Existing { .. } => "Edit cancelled.",
                };
                self.set_status(message, StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
                prompt.previous();
                Ok(Mode::ChoosingLyricsSource(prompt))
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
                prompt.next();
                Ok(Mode::ChoosingLyricsSource(prompt))
            }
            KeyCode::Enter => match prompt.selection {
                LyricsSource::Keyboard => {
                    let initial = match &prompt.target {
                        LyricsTarget::Existing { index } => {
                            match self.library.browse(*index) {
                                Ok(song) => song.lyrics.clone(),
                                Err(err) => {
                                    self.set_status(err.to_string(), StatusKind::Error);
                                    return Ok(Mode::Normal);
                                }
                            }
                        }
                        LyricsTarget::NewSong { .. } => String::new(),
                    };
                    Ok(Mode::EditingLyrics(LyricsEditor::new(prompt.target, initial)))
                }
                LyricsSource::File => Ok(Mode::EnteringLyricsPath {
                    target: prompt.target,
                    form: PathForm::default(),
                }),
            },
            _ => Ok(Mode::ChoosingLyricsSource(prompt)),
        }
    }

    fn handle_lyrics_editor(&mut self, code: KeyCode, mut editor: LyricsEditor) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                let message = match editor.target {
                    LyricsTarget::NewSong { .. } => "Add song cancelled.",
                    LyricsTarget::Existing { .. } => "Edit cancelled.",
                };
                self.set_status(message, StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter => {
                editor.newline();
                Ok(Mode::EditingLyrics(editor))
            }
            KeyCode::Backspace => {
                editor.backspace();
                Ok(Mode::EditingLyrics(editor))
            }
            KeyCode::Char(ch) => {
                editor.push_char(ch);
                Ok(Mode::EditingLyrics(editor))
            }
            _ => Ok(Mode::EditingLyrics(editor)),
        }
    }

    fn handle_lyrics_path(
        &mut self,
        code: KeyCode,
        target: LyricsTarget,
        mut form: PathForm,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                let message = match target {
                    LyricsTarget::NewSong { .. } => "Add song cancelled.",
                    LyricsTarget::Existing { .. } => "Edit cancelled.",
                };
                self.set_status(message, StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Backspace => {
                form.backspace();
                Ok(Mode::EnteringLyricsPath { target, form })
            }
            KeyCode::Enter => match form.parse_input() {
                Ok(path) => match read_lyrics_file(&path) {
                    Ok(text) => {
                        self.apply_lyrics(target, text);
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        let message = surface_error(&anyhow::Error::new(err));
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                        Ok(Mode::EnteringLyricsPath { target, form })
                    }
                },
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                    Ok(Mode::EnteringLyricsPath { target, form })
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
                Ok(Mode::EnteringLyricsPath { target, form })
            }
            _ => Ok(Mode::EnteringLyricsPath { target, form }),
        }
    }

    fn handle_save_path(
        &mut self,
        code: KeyCode,
        index: usize,
        mut form: PathForm,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Save cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Backspace => {
                form.backspace();
                Ok(Mode::SavingLyrics { index, form })
            }
            KeyCode::Enter => match form.parse_input() {
                Ok(path) => match self.save_lyrics(index, &path) {
                    Ok(descriptor) => {
                        self.set_status(
                            format!("Lyrics for ({descriptor}) saved into {path}."),
                            StatusKind::Info,
                        );
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        let message = surface_error(&err);
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                        Ok(Mode::SavingLyrics { index, form })
                    }
                },
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                    Ok(Mode::SavingLyrics { index, form })
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
                Ok(Mode::SavingLyrics { index, form })
            }
            _ => Ok(Mode::SavingLyrics { index, form }),
        }
    }

    fn handle_confirm_clear(&mut self, code: KeyCode, confirm: ConfirmClear) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Erase cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.library.browse_mut(confirm.index) {
                    Ok(song) => {
                        song.clear_lyrics();
                        let descriptor = song.info();
                        self.set_status(
                            format!("Lyrics for ({descriptor}) erased."),
                            StatusKind::Info,
                        );
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        self.set_status(err.to_string(), StatusKind::Error);
                        Ok(Mode::ConfirmClearLyrics(confirm))
                    }
                }
            }
            _ => Ok(Mode::ConfirmClearLyrics(confirm)),
        }
    }

    fn handle_search_prompt(&mut self, code: KeyCode, mut prompt: SearchPrompt) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                Ok(Mode::Normal)
            }
            KeyCode::Enter => {
                self.run_search(prompt.kind, prompt.query);
                Ok(Mode::Normal)
            }
            KeyCode::Backspace => {
                prompt.query.pop();
                Ok(Mode::PromptingSearch(prompt))
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    prompt.query.push(ch);
                }
                Ok(Mode::PromptingSearch(prompt))
            }
            _ => Ok(Mode::PromptingSearch(prompt)),
        }
    }

    /// Commit lyrics text to its target: append a new song to the library, or
    /// replace an existing song's lyrics wholesale.
    fn apply_lyrics(&mut self, target: LyricsTarget, text: String) {
        match target {
            LyricsTarget::NewSong { name, author, year } => {
                let song = Song::new(name, author, year).with_lyrics(text);
                let descriptor = song.info();
                self.library.add(song);
                self.refresh_listing();
                self.set_status(format!("Added {descriptor}."), StatusKind::Info);
            }
            LyricsTarget::Existing { index } => match self.library.browse_mut(index) {
                Ok(song) => {
                    song.edit_lyrics(text);
                    let descriptor = song.info();
                    self.set_status(
                        format!("Lyrics for ({descriptor}) changed."),
                        StatusKind::Info,
                    );
                }
                Err(err) => {
                    self.set_status(err.to_string(), StatusKind::Error);
                }
            },
        }
    }

    fn save_lyrics(&self, index: usize, path: &str) -> Result<String> {
        let song = self.library.browse(index)?;
        song.save(path)?;
        Ok(song.info())
    }

    fn run_search(&mut self, kind: SearchKind, query: String) {
        let ids = match kind {
            SearchKind::Author => self.library.search_by_author(&query),
            SearchKind::Word => self.library.search_by_word(&query),
        };
        self.clear_status();
        self.screen = Screen::Results(ResultsScreen::new(&self.library, kind, query, &ids));
    }

    fn return_to_origin(&mut self, origin: &Origin) {
        match origin {
            Origin::AllSongs => self.show_all_songs(),
            Origin::Search { kind, query } => self.run_search(*kind, query.clone()),
        }
    }

    fn show_all_songs(&mut self) {
        self.screen = Screen::Songs(ListingScreen::new(&self.library));
    }

    fn open_view(&mut self, index: usize, origin: Origin) {
        self.screen = Screen::View(ViewScreen::new(index, origin));
    }

    fn refresh_listing(&mut self) {
        if let Screen::Songs(ref mut listing) = self.screen {
            listing.refresh(&self.library);
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Songs(listing) => self.draw_song_listing(frame, content_area, listing),
            Screen::Results(results) => self.draw_results(frame, content_area, results),
            Screen::View(view) => self.draw_song_view(frame, content_area, view),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingSong(form) => self.draw_song_form(frame, area, form),
            Mode::ChoosingLyricsSource(prompt) => self.draw_source_prompt(frame, area, prompt),
            Mode::EditingLyrics(editor) => self.draw_lyrics_editor(frame, area, editor),
            Mode::EnteringLyricsPath { form, .. } => {
                self.draw_path_form(frame, area, "Load Lyrics", form)
            }
            Mode::SavingLyrics { form, .. } => {
                self.draw_path_form(frame, area, "Save Lyrics", form)
            }
            Mode::ConfirmClearLyrics(confirm) => self.draw_confirm_clear(frame, area, confirm),
            Mode::PromptingSearch(prompt) => self.draw_search_bar(frame, area, prompt),
            Mode::Normal => {}
        }
    }

    /// Commit the lyrics editor. Routed around the normal key dispatch so a
    /// plain 's' stays typable inside the editor.
    pub(crate) fn handle_ctrl_s(&mut self) -> Result<()> {
        if !matches!(self.mode, Mode::EditingLyrics(_)) {
            return Ok(());
        }

        if let Mode::EditingLyrics(editor) = mem::replace(&mut self.mode, Mode::Normal) {
            self.apply_lyrics(editor.target, editor.text);
        }

        Ok(())
    }

    fn draw_song_listing(&self, frame: &mut Frame, area: Rect, listing: &ListingScreen) {
        let block = Block::default().title("Songs").borders(Borders::ALL);

        if self.library.is_empty() {
            let message = Paragraph::new("No songs yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let content = listing.display_lines().join("\n");
        let paragraph = Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((listing.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect, results: &ResultsScreen) {
        let title = format!("Results • {} \"{}\"", results.kind.label(), results.query);
        let block = Block::default().title(title).borders(Borders::ALL);

        let content = results.display_lines().join("\n");
        let paragraph = Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((results.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_song_view(&self, frame: &mut Frame, area: Rect, view: &ViewScreen) {
        match self.library.browse(view.index) {
            Ok(song) => {
                let block = Block::default().title(song.info()).borders(Borders::ALL);
                let paragraph = Paragraph::new(song.to_string())
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .scroll((view.scroll, 0));
                frame.render_widget(paragraph, area);
            }
            Err(err) => {
                let message = Paragraph::new(err.to_string())
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(message, area);
            }
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::EditingLyrics(_)) => Line::from(vec![
                Span::styled("[Ctrl+S]", key_style),
                Span::raw(" Commit Lyrics   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" New Line   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::View(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit Lyrics   "),
                Span::styled("[d]", key_style),
                Span::raw(" Erase Lyrics   "),
                Span::styled("[s]", key_style),
                Span::raw(" Save to File   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Results(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" View   "),
                Span::styled("[a]", key_style),
                Span::raw(" Search Author   "),
                Span::styled("[w]", key_style),
                Span::raw(" Search Lyrics   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" All Songs   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" View   "),
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[a]", key_style),
                Span::raw(" Search Author   "),
                Span::styled("[w]", key_style),
                Span::raw(" Search Lyrics   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_song_form(&self, frame: &mut Frame, area: Rect, form: &SongForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add Song").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let name_line = form.build_line("Name", SongField::Name);
        let author_line = form.build_line("Author", SongField::Author);
        let year_line = form.build_line("Year", SongField::Year);

        let mut lines = vec![name_line, author_line, year_line, Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to continue • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (cursor_x, cursor_y) = match form.active {
            SongField::Name => {
                let prefix = "Name: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(SongField::Name) as u16,
                    inner.y,
                )
            }
            SongField::Author => {
                let prefix = "Author: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(SongField::Author) as u16,
                    inner.y + 1,
                )
            }
            SongField::Year => {
                let prefix = "Year: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(SongField::Year) as u16,
                    inner.y + 2,
                )
            }
        };
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_path_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &PathForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line(), Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to confirm • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x = inner.x + "Path: ".len() as u16 + form.value_len() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_source_prompt(&self, frame: &mut Frame, area: Rect, prompt: &SourcePrompt) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Lyrics").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut option_spans = Vec::new();
        for (idx, label) in prompt.labels().iter().enumerate() {
            if idx > 0 {
                option_spans.push(Span::raw("   "));
            }
            let style = if prompt.selected_index() == idx {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            option_spans.push(Span::styled(*label, style));
        }

        let lines = vec![
            Line::from("Where do the lyrics come from?"),
            Line::from(""),
            Line::from(option_spans),
            Line::from(""),
            Line::from(Span::styled(
                "Use ←/→ to choose • Enter to confirm • Esc to cancel",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_lyrics_editor(&self, frame: &mut Frame, area: Rect, editor: &LyricsEditor) {
        let popup_area = centered_rect(80, 70, area);
        frame.render_widget(Clear, popup_area);

        let title = match &editor.target {
            LyricsTarget::NewSong { name, .. } => format!("Lyrics for {name}"),
            LyricsTarget::Existing { index } => match self.library.browse(*index) {
                Ok(song) => format!("Lyrics for {}", song.name),
                Err(_) => "Lyrics".to_string(),
            },
        };

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let (cursor_column, cursor_row) = editor.cursor();
        let scroll = (cursor_row as u16).saturating_sub(inner.height.saturating_sub(1));

        let paragraph = Paragraph::new(editor.text.clone()).scroll((scroll, 0));
        frame.render_widget(paragraph, inner);

        let cursor_x = inner.x + (cursor_column as u16).min(inner.width.saturating_sub(1));
        let cursor_y = inner.y + (cursor_row as u16).saturating_sub(scroll);
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_clear(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmClear) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Erase Lyrics").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Erase the lyrics of {}?", confirm.descriptor)),
            Line::from("The song itself stays in the library."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, prompt: &SearchPrompt) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let title = match prompt.kind {
            SearchKind::Author => "Search by Author",
            SearchKind::Word => "Search Lyrics",
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        let paragraph = Paragraph::new(Span::raw(format!("Search: {}", prompt.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Search: ".len() as u16 + prompt.query.chars().count() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
