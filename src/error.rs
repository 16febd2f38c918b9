//! Typed errors for the song/library core. The interactive layer wraps these
//! in `anyhow` and surfaces the deepest cause in its status footer, so each
//! variant keeps enough context (the offending path, the underlying I/O
//! error) to produce a message a user can act on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures the core can produce. Browsing an empty library and lyrics file
/// I/O are the only fallible operations; everything else on `Song` and
/// `Library` accepts its input as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Browsing clamps out-of-range indices, but with zero songs there is
    /// nothing to clamp to.
    #[error("the library has no songs")]
    EmptyLibrary,

    /// Writing lyrics to disk failed.
    #[error("cannot save lyrics to {}", path.display())]
    SaveLyrics {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading lyrics from disk failed.
    #[error("cannot load lyrics from {}", path.display())]
    LoadLyrics {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
