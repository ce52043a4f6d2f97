//! Composition sessions
//!
//! A session is a small state machine driven by choices coming from a
//! [`Picker`]: every real template picked is added to the selection, the
//! `done` sentinel finishes the selection and cancelling dismisses it.
//! A finished session is turned into a [`Document`] by [`compose`].

mod output;

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::templates::Catalog;

pub use output::{Document, FileSink, OutputSink, StdoutSink};

/// Syntax marker assigned to composed documents.
pub const DEFAULT_SYNTAX: &str = "Git Ignore";

/// Name given to composed documents.
pub const DEFAULT_OUTPUT_NAME: &str = ".gitignore";

const BLOCK_SEPARATOR: &str = "\n\n";

/// What the user did with one presentation of the choice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Index(usize),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Selecting,
    Done,
    Dismissed,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Done | SessionState::Dismissed)
    }
}

/// Host side of the selection loop: show the labels, return what was chosen.
///
/// `marked` holds the presented indices already in the selection so the host
/// can flag them.
pub trait Picker {
    fn choose(&mut self, labels: &[String], marked: &BTreeSet<usize>) -> Result<Choice>;
}

/// Selection state for one invocation.
#[derive(Debug)]
pub struct CompositionSession {
    state: SessionState,
    choices: usize,
    selected: BTreeSet<usize>,
}

impl CompositionSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            choices: 0,
            selected: BTreeSet::new(),
        }
    }

    /// Begin selecting over `catalog`. Any previous selection is dropped.
    pub fn start(&mut self, catalog: &Catalog) {
        self.selected.clear();
        self.choices = catalog.presented_len();
        self.state = SessionState::Selecting;
        debug!(choices = self.choices, "selection started");
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Presented indices picked so far, in ascending (catalog) order.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn handle(&mut self, choice: Choice) -> Result<SessionState> {
        if self.state != SessionState::Selecting {
            return Err(Error::SessionFinished);
        }

        match choice {
            Choice::Cancel => {
                debug!("selection dismissed");
                self.state = SessionState::Dismissed;
            }
            Choice::Index(0) => {
                debug!(selected = self.selected.len(), "selection done");
                self.state = SessionState::Done;
            }
            Choice::Index(index) if index < self.choices => {
                if !self.selected.insert(index) {
                    debug!(index, "template already selected");
                }
            }
            Choice::Index(index) => {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: self.choices,
                });
            }
        }

        Ok(self.state)
    }
}

impl Default for CompositionSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep presenting the catalog until the picker finishes or dismisses.
pub fn run_session<P: Picker + ?Sized>(
    catalog: &Catalog,
    picker: &mut P,
) -> Result<CompositionSession> {
    let labels = catalog.labels();
    let mut session = CompositionSession::new();
    session.start(catalog);

    while !session.state().is_terminal() {
        let choice = picker.choose(&labels, session.selected())?;
        session.handle(choice)?;
    }

    Ok(session)
}

/// Select templates by display name without any interaction, then finish.
pub fn select_by_name<S: AsRef<str>>(catalog: &Catalog, names: &[S]) -> Result<CompositionSession> {
    let mut session = CompositionSession::new();
    session.start(catalog);
    for name in names {
        let index = catalog.find_by_name(name.as_ref())?;
        session.handle(Choice::Index(index))?;
    }
    session.handle(Choice::Index(0))?;
    Ok(session)
}

/// Naming and syntax applied to composed documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    pub output_name: String,
    pub syntax: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            syntax: DEFAULT_SYNTAX.to_string(),
        }
    }
}

/// Read the selected templates and join them into one document.
///
/// Only a session that reached `Done` composes. Every template is read before
/// the document is created; the first one that cannot be read aborts the whole
/// composition.
pub fn compose(
    session: &CompositionSession,
    catalog: &Catalog,
    options: &ComposeOptions,
) -> Result<Document> {
    if session.state() != SessionState::Done {
        return Err(Error::SessionNotDone(session.state()));
    }

    let mut blocks = Vec::with_capacity(session.selected().len());
    for &index in session.selected() {
        let entry = catalog.presented(index).ok_or(Error::IndexOutOfRange {
            index,
            len: catalog.presented_len(),
        })?;
        let content = entry.read_content()?;
        blocks.push(format!("### {} ### \n\n{}", entry.display_name, content));
    }

    let mut document = Document::new();
    document.set_name(&options.output_name);
    document.assign_syntax(&options.syntax);
    document.insert(0, &blocks.join(BLOCK_SEPARATOR));

    info!(templates = blocks.len(), name = %options.output_name, "composed document");
    Ok(document)
}
