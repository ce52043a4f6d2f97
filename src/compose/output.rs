//! Output documents and the sinks that receive them

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Error, Result};

/// A new, unsaved document: a name, a syntax marker and text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    name: String,
    syntax: Option<String>,
    text: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn assign_syntax(&mut self, syntax: &str) {
        self.syntax = Some(syntax.to_string());
    }

    /// Insert `text` at a byte offset, clamped to the end of the document.
    pub fn insert(&mut self, offset: usize, text: &str) {
        let mut at = offset.min(self.text.len());
        while !self.text.is_char_boundary(at) {
            at -= 1;
        }
        self.text.insert_str(at, text);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn syntax(&self) -> Option<&str> {
        self.syntax.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Where a composed document ends up.
pub trait OutputSink {
    fn publish(&mut self, document: &Document) -> Result<()>;
}

/// Writes documents as files named after the document into a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    overwrite: bool,
    written: Option<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            dir: dir.into(),
            overwrite,
            written: None,
        }
    }

    pub fn target(&self, document: &Document) -> PathBuf {
        self.dir.join(document.name())
    }

    /// Path of the last document written.
    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }
}

impl OutputSink for FileSink {
    fn publish(&mut self, document: &Document) -> Result<()> {
        let path = self.target(document);
        if path.exists() && !self.overwrite {
            return Err(Error::OutputExists(path));
        }

        fs::create_dir_all(&self.dir).map_err(|source| Error::DirCreation {
            path: self.dir.clone(),
            source,
        })?;

        // Write atomically via a uniquely named temp file in the same directory.
        // The temp file is removed if anything fails before the rename.
        let write_err = |source| Error::Write {
            path: path.clone(),
            source,
        };
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(document.text().as_bytes()).map_err(write_err)?;
        tmp.persist(&path).map_err(|err| write_err(err.error))?;

        info!(path = %path.display(), bytes = document.text().len(), "wrote document");
        self.written = Some(path);
        Ok(())
    }
}

/// Prints the document text to standard output, byte for byte.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn publish(&mut self, document: &Document) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(document.text().as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
