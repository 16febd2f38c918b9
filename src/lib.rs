//! Core library surface for the Songbook TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the test suite can reuse the same pieces. Keeping
//! the glue logic documented makes it easy to recall why each re-export
//! exists when revisiting the project.
pub mod error;
pub mod library;
pub mod models;
pub mod ui;

/// The error type shared by every fallible core operation.
pub use error::Error;

/// The in-memory collection the whole session revolves around.
pub use library::Library;

/// The song record plus the helper that reads lyrics off disk.
pub use models::{read_lyrics_file, Song};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
