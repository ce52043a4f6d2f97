//! User-managed custom templates

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{catalog::discover_custom_templates, TemplateEntry, CUSTOM_PLACEHOLDER};
use crate::error::{Error, Result};

/// Handle on the custom template directory.
#[derive(Debug, Clone)]
pub struct CustomTemplates {
    dir: PathBuf,
    extension: String,
}

impl CustomTemplates {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a template with this name lives at. The name is validated first.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{}.{}", name, self.extension)))
    }

    pub fn list(&self) -> Result<Vec<TemplateEntry>> {
        discover_custom_templates(&self.dir, &self.extension)
    }

    /// Create a template holding the placeholder content.
    ///
    /// An existing template is only replaced when `overwrite` is set.
    pub fn create(&self, name: &str, overwrite: bool) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir).map_err(|source| Error::DirCreation {
            path: self.dir.clone(),
            source,
        })?;

        if path.exists() && !overwrite {
            return Err(Error::TemplateExists {
                name: name.to_string(),
                path,
            });
        }

        fs::write(&path, CUSTOM_PLACEHOLDER).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "created custom template");
        Ok(path)
    }

    /// Remove a template file. Returns `false` when it was already gone.
    pub fn delete(&self, path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => {
                info!(path = %path.display(), "deleted custom template");
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "template already removed");
                Ok(false)
            }
            Err(source) => Err(Error::Delete {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(Error::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    if name.trim().is_empty() {
        return invalid("name must not be empty");
    }
    if name.contains(['/', '\\', '\0']) {
        return invalid("name must not contain path separators");
    }
    if name.starts_with('.') {
        return invalid("name must not start with a dot");
    }
    if name != name.trim() {
        return invalid("name must not start or end with whitespace");
    }
    Ok(())
}
