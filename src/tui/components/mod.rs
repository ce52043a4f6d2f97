//! TUI components

mod preview;

pub use preview::Preview;
