//! Error types for template discovery, composition and custom template management

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Bundled template root not found: {}", .0.display())]
    BundledRootMissing(PathBuf),

    #[error("Invalid template pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to scan `{}`: {source}", path.display())]
    Scan { path: PathBuf, source: io::Error },

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Could not create the directory `{}`: {source}", path.display())]
    DirCreation { path: PathBuf, source: io::Error },

    #[error("Failed to read template `{}`: {source}", path.display())]
    ReadTemplate { path: PathBuf, source: io::Error },

    #[error("Failed to write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to delete `{}`: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },

    #[error("Custom template `{name}` already exists at {}", path.display())]
    TemplateExists { name: String, path: PathBuf },

    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("Invalid template name `{name}`: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template `{name}` is ambiguous, use one of: {}", candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },

    #[error("No catalog entry at index {index} (catalog has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Selection already finished")]
    SessionFinished,

    #[error("Selection was not completed (session is {0:?})")]
    SessionNotDone(crate::compose::SessionState),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
