//! `gic compose` command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::{require_terminal, AppContext};
use crate::compose::{
    compose, run_session, select_by_name, FileSink, OutputSink, SessionState, StdoutSink,
};
use crate::templates::build_catalog;
use crate::tui::{self, TuiPicker};

#[derive(Args, Default)]
pub struct ComposeArgs {
    /// Template to include, by display name or file path (repeatable); skips the picker
    #[arg(short = 't', long = "template", value_name = "NAME")]
    pub templates: Vec<String>,

    /// Directory to create the document in (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print the composed document instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Replace an existing file without asking
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(ctx: &AppContext, args: ComposeArgs) -> Result<()> {
    let catalog = build_catalog(&ctx.sources).context("Failed to build the template catalog")?;

    let session = if args.templates.is_empty() {
        require_terminal("pass templates with --template NAME")?;
        let mut picker = TuiPicker::new(&catalog, "Compose .gitignore")?;
        run_session(&catalog, &mut picker)?
    } else {
        select_by_name(&catalog, &args.templates)?
    };

    if session.state() == SessionState::Dismissed {
        println!("Cancelled, nothing written.");
        return Ok(());
    }

    let document = compose(&session, &catalog, &ctx.config.compose_options())?;

    if args.stdout {
        StdoutSink.publish(&document)?;
        return Ok(());
    }

    let dir = match args.output {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };
    let mut sink = FileSink::new(&dir, args.force);
    let target = sink.target(&document);

    if target.exists() && !args.force {
        if !tui::is_interactive() {
            anyhow::bail!(
                "{} already exists; pass --force to replace it",
                target.display()
            );
        }
        if !tui::confirm_overwrite(&target)? {
            println!("Left {} unchanged.", target.display());
            return Ok(());
        }
        sink = FileSink::new(&dir, true);
    }

    sink.publish(&document)?;
    println!(
        "✓ Wrote {} ({} template{})",
        target.display(),
        session.selected().len(),
        if session.selected().len() == 1 { "" } else { "s" }
    );
    Ok(())
}
