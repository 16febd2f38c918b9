//! Binary entry point that glues the song library to the TUI. The library
//! starts empty every run; everything the user builds up lives only for the
//! session, with lyrics written to files on request from inside the app.
use songbook::{run_app, App, Library};

/// Build the initial app state and drive the Ratatui event loop until the
/// user exits.
///
/// Returning a `Result` bubbles up fatal terminal problems (for example a
/// failure to enter raw mode) to the shell instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let mut app = App::new(Library::new());
    run_app(&mut app)
}
