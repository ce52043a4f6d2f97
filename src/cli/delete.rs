//! `gic delete` command implementation

use anyhow::Result;
use clap::Args;

use super::{bare_name, pick_custom, AppContext};

#[derive(Args)]
pub struct DeleteArgs {
    /// Custom template to delete (picked interactively when omitted)
    name: Option<String>,
}

pub fn run(ctx: &AppContext, args: DeleteArgs) -> Result<()> {
    let custom = ctx.custom_templates();

    let path = match &args.name {
        Some(name) => custom.path_for(bare_name(name))?,
        None => match pick_custom(ctx, "Delete custom template")? {
            Some(path) => path,
            None => return Ok(()),
        },
    };

    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    if custom.delete(&path)? {
        println!("✓ Deleted custom template: {}", label);
    } else {
        println!("Custom template already gone: {}", label);
    }

    Ok(())
}
