//! Catalog building from the bundled tree and the custom directory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use tracing::{debug, warn};

use super::{Origin, TemplateEntry, DONE_LABEL};
use crate::error::{Error, Result};

/// Where templates live and how they are recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSources {
    pub bundled_root: PathBuf,
    pub custom_dir: PathBuf,
    pub extension: String,
}

/// Bundled layout: (base directory inside the root, pattern under that base).
/// Category tags are computed relative to the base, so the `Global` and
/// `community` containers never show up in display names.
const BUNDLED_PATTERNS: [(&str, &str); 4] = [
    ("", "*"),
    ("Global", "*"),
    ("community", "*"),
    ("community", "**/*"),
];

const TAG_SEPARATOR: &str = " | ";
const CUSTOM_SUFFIX: &str = " (custom)";

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// Scan the bundled template tree.
///
/// Entries are ordered by pattern, then by glob iteration order. A file hit by
/// more than one pattern is only listed at its first match.
pub fn discover_bundled_templates(root: &Path, extension: &str) -> Result<Vec<TemplateEntry>> {
    if !root.is_dir() {
        return Err(Error::BundledRootMissing(root.to_path_buf()));
    }

    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for (base, stem_pattern) in BUNDLED_PATTERNS {
        let base_dir = if base.is_empty() {
            root.to_path_buf()
        } else {
            root.join(base)
        };

        for path in glob_files(&base_dir, &format!("{stem_pattern}.{extension}"))? {
            if !seen.insert(path.clone()) {
                continue;
            }
            let name = bundled_display_name(&base_dir, &path);
            debug!(name = %name, path = %path.display(), "found bundled template");
            entries.push(TemplateEntry::new(name, path, Origin::Bundled));
        }
    }

    Ok(entries)
}

/// Scan the custom template directory, creating it when missing.
pub fn discover_custom_templates(dir: &Path, extension: &str) -> Result<Vec<TemplateEntry>> {
    fs::create_dir_all(dir).map_err(|source| Error::DirCreation {
        path: dir.to_path_buf(),
        source,
    })?;

    let entries = glob_files(dir, &format!("*.{extension}"))?
        .into_iter()
        .map(|path| {
            let name = format!("{}{}", file_stem(&path), CUSTOM_SUFFIX);
            TemplateEntry::new(name, path, Origin::Custom)
        })
        .collect();

    Ok(entries)
}

/// Build a fresh catalog: bundled entries first, then custom ones.
pub fn build_catalog(sources: &TemplateSources) -> Result<Catalog> {
    let mut entries = discover_bundled_templates(&sources.bundled_root, &sources.extension)?;
    let custom = discover_custom_templates(&sources.custom_dir, &sources.extension)?;
    debug!(
        bundled = entries.len(),
        custom = custom.len(),
        "catalog built"
    );
    entries.extend(custom);
    Ok(Catalog::new(entries))
}

fn glob_files(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let base_str = base
        .to_str()
        .ok_or_else(|| Error::NonUtf8Path(base.to_path_buf()))?;
    let full = format!(
        "{}/{}",
        glob::Pattern::escape(base_str.trim_end_matches('/')),
        pattern
    );

    let paths = glob::glob_with(&full, match_options()).map_err(|source| Error::Pattern {
        pattern: full.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| Error::Scan {
            path: err.path().to_path_buf(),
            source: err.into_error(),
        })?;
        if path.is_file() {
            files.push(path);
        } else {
            warn!(path = %path.display(), "skipping non-file template match");
        }
    }
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn bundled_display_name(base_dir: &Path, path: &Path) -> String {
    let stem = file_stem(path);
    let tag = path
        .parent()
        .and_then(|parent| parent.strip_prefix(base_dir).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join(TAG_SEPARATOR)
        })
        .unwrap_or_default();

    if tag.is_empty() {
        stem
    } else {
        format!("{} ({})", stem, tag)
    }
}

/// Ordered template list. Sessions present it with the `done` sentinel at
/// index 0, so catalog entry `i` is presented at index `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<TemplateEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<TemplateEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels as shown to the user, sentinel first.
    pub fn labels(&self) -> Vec<String> {
        std::iter::once(DONE_LABEL.to_string())
            .chain(self.entries.iter().map(|e| e.display_name.clone()))
            .collect()
    }

    /// Number of presented choices, sentinel included.
    pub fn presented_len(&self) -> usize {
        self.entries.len() + 1
    }

    /// Entry behind a presented index. Index 0 is the sentinel and never
    /// resolves to a template.
    pub fn presented(&self, index: usize) -> Option<&TemplateEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Presented index of the entry with exactly this display name.
    ///
    /// When no display name matches, `name` is tried as a path: an entry
    /// whose locator ends with it (component-wise) matches. This is how two
    /// templates sharing a display name are told apart, e.g. `Global/Vim.gitignore`.
    pub fn find_by_name(&self, name: &str) -> Result<usize> {
        let mut matches = self.positions(|e| e.display_name == name);
        if matches.is_empty() {
            let path = Path::new(name);
            matches = self.positions(|e| e.locator.ends_with(path));
        }

        match matches.as_slice() {
            [] => Err(Error::TemplateNotFound(name.to_string())),
            [index] => Ok(*index),
            many => Err(Error::Ambiguous {
                name: name.to_string(),
                candidates: many
                    .iter()
                    .filter_map(|&i| self.presented(i))
                    .map(|e| e.locator.display().to_string())
                    .collect(),
            }),
        }
    }

    fn positions(&self, pred: impl Fn(&TemplateEntry) -> bool) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| pred(e))
            .map(|(i, _)| i + 1)
            .collect()
    }
}
