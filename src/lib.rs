//! gitignore-composer - compose `.gitignore` files from templates
//!
//! Templates are discovered on disk from a bundled tree and a custom
//! directory ([`templates`]), picked through a small selection state machine
//! and joined into one document ([`compose`]).

pub mod cli;
pub mod compose;
pub mod config;
pub mod editor;
pub mod error;
pub mod templates;
pub mod tui;

pub use error::{Error, Result};
