//! `gic config` command implementation

use anyhow::{bail, Result};
use clap::Args;

use super::AppContext;
use crate::config::Config;
use crate::editor;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write a config file with the default settings
    #[arg(long)]
    init: bool,

    /// Replace an existing config file when used with --init
    #[arg(short, long, requires = "init")]
    force: bool,
}

pub fn run(ctx: &AppContext, args: ConfigArgs) -> Result<()> {
    if args.init {
        if ctx.config_path.exists() && !args.force {
            bail!(
                "{} already exists; pass --force to replace it",
                ctx.config_path.display()
            );
        }
        Config::default().save(&ctx.config_path)?;
        println!("✓ Wrote default config to {}", ctx.config_path.display());
        return Ok(());
    }

    let state = if ctx.config_path.exists() {
        ""
    } else {
        " (not present, using defaults)"
    };
    println!("Config:        {}{}", ctx.config_path.display(), state);
    println!("Data root:     {}", ctx.app_dir.display());
    println!("Bundled root:  {}", ctx.sources.bundled_root.display());
    println!("Custom dir:    {}", ctx.sources.custom_dir.display());
    println!("Extension:     .{}", ctx.sources.extension);
    println!("Output name:   {}", ctx.config.output_name);
    println!("Editor:        {}", editor::resolve_editor(ctx.editor()));
    Ok(())
}
