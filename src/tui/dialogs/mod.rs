//! TUI dialog components

mod choice;
mod confirm;
mod name_prompt;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;

use crate::tui::styles::Theme;

pub use choice::ChoiceDialog;
pub use confirm::ConfirmDialog;
pub use name_prompt::NamePromptDialog;

#[derive(Debug, PartialEq, Eq)]
pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// A modal dialog driven one key at a time.
pub trait Dialog {
    type Output;

    fn handle_key(&mut self, key: KeyEvent) -> DialogResult<Self::Output>;

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// Rectangle of at most `width` x `height`, centered in `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
