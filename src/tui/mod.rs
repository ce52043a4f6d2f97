//! Terminal front end: the picker and the small modal prompts

pub mod components;
pub mod dialogs;
mod fuzzy;
pub mod styles;

use std::collections::BTreeSet;
use std::io::{self, IsTerminal};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::compose::{Choice, Picker};
use crate::templates::Catalog;
use dialogs::{ChoiceDialog, ConfirmDialog, Dialog, DialogResult, NamePromptDialog};
use styles::Theme;

/// Whether a full-screen dialog can be shown.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Raw-mode alternate screen, restored on drop.
pub struct TerminalSession {
    terminal: DefaultTerminal,
    theme: Theme,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
        })
    }

    /// Drive `dialog` until it submits (`Some`) or is cancelled (`None`).
    pub fn run<D: Dialog>(&mut self, dialog: &mut D) -> io::Result<Option<D::Output>> {
        let theme = self.theme;
        loop {
            self.terminal.draw(|frame| {
                let area = frame.area();
                dialog.render(frame, area, &theme);
            })?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => return Ok(None),
                DialogResult::Submit(value) => return Ok(Some(value)),
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// [`Picker`] backed by a [`ChoiceDialog`], previewing the highlighted
/// template. The terminal stays in the alternate screen across picks.
pub struct TuiPicker<'c> {
    session: TerminalSession,
    catalog: &'c Catalog,
    title: String,
    last: usize,
}

impl<'c> TuiPicker<'c> {
    pub fn new(catalog: &'c Catalog, title: &str) -> io::Result<Self> {
        Ok(Self {
            session: TerminalSession::enter()?,
            catalog,
            title: title.to_string(),
            last: 0,
        })
    }
}

impl Picker for TuiPicker<'_> {
    fn choose(&mut self, labels: &[String], marked: &BTreeSet<usize>) -> crate::Result<Choice> {
        let catalog = self.catalog;
        let mut dialog = ChoiceDialog::new(&self.title, labels.to_vec())
            .pin_first()
            .with_marked(marked)
            .with_preview(move |idx| {
                catalog
                    .presented(idx)
                    .and_then(|entry| entry.read_content().ok())
            })
            .highlight(self.last);

        match self.session.run(&mut dialog)? {
            Some(idx) => {
                self.last = idx;
                Ok(Choice::Index(idx))
            }
            None => Ok(Choice::Cancel),
        }
    }
}

/// Pick one of `labels`, optionally previewing the highlighted one.
pub fn pick_one<'a>(
    title: &str,
    labels: Vec<String>,
    preview: Option<Box<dyn FnMut(usize) -> Option<String> + 'a>>,
) -> io::Result<Option<usize>> {
    let mut dialog = ChoiceDialog::new(title, labels);
    if let Some(source) = preview {
        dialog = dialog.with_preview(source);
    }
    TerminalSession::enter()?.run(&mut dialog)
}

pub fn prompt_name(title: &str) -> io::Result<Option<String>> {
    TerminalSession::enter()?.run(&mut NamePromptDialog::new(title))
}

/// Ask before replacing `path`. Cancelling counts as "no".
pub fn confirm_overwrite(path: &std::path::Path) -> io::Result<bool> {
    let answer = TerminalSession::enter()?.run(&mut ConfirmDialog::overwrite(path))?;
    Ok(answer.is_some())
}
