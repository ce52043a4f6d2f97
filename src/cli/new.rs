//! `gic new` command implementation

use anyhow::{bail, Result};
use clap::Args;

use super::{bare_name, require_terminal, AppContext};
use crate::editor;
use crate::tui;
use crate::Error;

#[derive(Args)]
pub struct NewArgs {
    /// Name of the template (prompted for when omitted)
    name: Option<String>,

    /// Replace an existing template with the same name without asking
    #[arg(short, long)]
    force: bool,

    /// Don't open the new template in the editor
    #[arg(long)]
    no_edit: bool,
}

pub fn run(ctx: &AppContext, args: NewArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => {
            require_terminal("pass the template name")?;
            match tui::prompt_name("New custom template")? {
                Some(name) => name,
                None => return Ok(()),
            }
        }
    };
    let name = bare_name(&name);

    let custom = ctx.custom_templates();
    let path = match custom.create(name, args.force) {
        Ok(path) => path,
        Err(Error::TemplateExists { path, .. }) if tui::is_interactive() => {
            if !tui::confirm_overwrite(&path)? {
                println!("Kept existing template {}", path.display());
                return Ok(());
            }
            custom.create(name, true)?
        }
        Err(err @ Error::TemplateExists { .. }) => {
            bail!("{}; pass --force to replace it", err)
        }
        Err(err) => return Err(err.into()),
    };

    println!("✓ Created custom template: {}", path.display());

    if !args.no_edit {
        editor::open(&path, ctx.editor())?;
    }
    Ok(())
}
