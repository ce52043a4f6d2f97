//! Template discovery
//!
//! Templates come from two places: a read-only bundled tree (a checkout of a
//! curated template collection) and a writable custom directory owned by the
//! user. Both are scanned from disk every time a catalog is built, so files
//! added or removed between invocations are always picked up.

mod catalog;
mod custom;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub use catalog::{
    build_catalog, discover_bundled_templates, discover_custom_templates, Catalog,
    TemplateSources,
};
pub use custom::CustomTemplates;

/// File extension of template files, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "gitignore";

/// Label of the synthetic entry that ends a selection.
pub const DONE_LABEL: &str = "done";

/// Content written into a freshly created custom template.
pub const CUSTOM_PLACEHOLDER: &str = "# custom .gitignore template #";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Bundled,
    Custom,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Bundled => write!(f, "bundled"),
            Origin::Custom => write!(f, "custom"),
        }
    }
}

/// One selectable template. Content is read lazily from `locator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub display_name: String,
    pub locator: PathBuf,
    pub origin: Origin,
}

impl TemplateEntry {
    pub fn new(
        display_name: impl Into<String>,
        locator: impl Into<PathBuf>,
        origin: Origin,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            locator: locator.into(),
            origin,
        }
    }

    pub fn read_content(&self) -> crate::Result<String> {
        std::fs::read_to_string(&self.locator).map_err(|source| crate::Error::ReadTemplate {
            path: self.locator.clone(),
            source,
        })
    }
}
