//! Configuration loading and path resolution

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compose::{ComposeOptions, DEFAULT_OUTPUT_NAME, DEFAULT_SYNTAX};
use crate::templates::{TemplateSources, DEFAULT_EXTENSION};

pub const APP_DIR_NAME: &str = "gitignore-composer";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_CUSTOM_TEMPLATE_PATH: &str = "CustomGitignoreTemplates";
pub const BUNDLED_DIR_NAME: &str = "gitignore";

/// Overrides the data root (config, custom templates, bundled templates).
pub const HOME_ENV: &str = "GIC_HOME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the bundled template tree. Defaults to `<data root>/gitignore`.
    pub bundled_template_root: Option<PathBuf>,

    /// Custom template directory, relative to the data root unless absolute.
    pub custom_template_path: PathBuf,

    /// Extension identifying template files.
    pub template_extension: String,

    /// Name of the composed document.
    pub output_name: String,

    /// Syntax marker assigned to the composed document.
    pub syntax: String,

    /// Editor command for custom templates; falls back to $VISUAL / $EDITOR.
    pub editor: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bundled_template_root: None,
            custom_template_path: PathBuf::from(DEFAULT_CUSTOM_TEMPLATE_PATH),
            template_extension: DEFAULT_EXTENSION.to_string(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            syntax: DEFAULT_SYNTAX.to_string(),
            editor: None,
        }
    }
}

/// Data root: `$GIC_HOME` when set, else the platform data directory.
pub fn app_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let data = dirs::data_dir().context("Cannot find the user data directory")?;
    Ok(data.join(APP_DIR_NAME))
}

impl Config {
    /// Load from `path`, or from `<data root>/config.toml` when it exists.
    pub fn load(path: Option<&Path>, app_dir: &Path) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (app_dir.join(CONFIG_FILE_NAME), false),
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Resolve template locations against the data root.
    pub fn sources(&self, app_dir: &Path) -> TemplateSources {
        TemplateSources {
            bundled_root: self
                .bundled_template_root
                .clone()
                .unwrap_or_else(|| app_dir.join(BUNDLED_DIR_NAME)),
            custom_dir: app_dir.join(&self.custom_template_path),
            extension: self.template_extension.clone(),
        }
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            output_name: self.output_name.clone(),
            syntax: self.syntax.clone(),
        }
    }
}
