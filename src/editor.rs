//! Launching the user's editor on a template

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

const FALLBACK_EDITOR: &str = "vi";

/// Pick the editor command: configured value, then $VISUAL, then $EDITOR.
pub fn resolve_editor(configured: Option<&str>) -> String {
    configured
        .map(str::to_string)
        .or_else(|| env_non_empty("VISUAL"))
        .or_else(|| env_non_empty("EDITOR"))
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Open `path` and wait for the editor to exit.
pub fn open(path: &Path, configured: Option<&str>) -> Result<()> {
    let editor = resolve_editor(configured);
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .with_context(|| format!("Editor command is empty: {:?}", editor))?;

    tracing::debug!(editor = %editor, path = %path.display(), "opening editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("Editor '{}' exited with {}", editor, status);
    }
    Ok(())
}

fn env_non_empty(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
