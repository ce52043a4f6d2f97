//! `gic edit` command implementation

use anyhow::Result;
use clap::Args;

use super::{existing_custom, pick_custom, AppContext};
use crate::editor;

#[derive(Args)]
pub struct EditArgs {
    /// Custom template to edit (picked interactively when omitted)
    name: Option<String>,
}

pub fn run(ctx: &AppContext, args: EditArgs) -> Result<()> {
    let path = match args.name {
        Some(name) => existing_custom(ctx, &name)?,
        None => match pick_custom(ctx, "Edit custom template")? {
            Some(path) => path,
            None => return Ok(()),
        },
    };

    editor::open(&path, ctx.editor())
}
