//! `gic list` command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::AppContext;
use crate::templates::{build_catalog, TemplateEntry};

#[derive(Args)]
pub struct ListArgs {
    /// Only list custom templates
    #[arg(long)]
    custom: bool,

    /// Show origin and path for each template
    #[arg(short, long)]
    long: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let entries: Vec<TemplateEntry> = if args.custom {
        ctx.custom_templates().list()?
    } else {
        build_catalog(&ctx.sources)
            .context("Failed to build the template catalog")?
            .entries()
            .to_vec()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No templates found.");
        println!("  Bundled: {}", ctx.sources.bundled_root.display());
        println!("  Custom:  {}", ctx.sources.custom_dir.display());
        return Ok(());
    }

    let width = entries
        .iter()
        .map(|e| e.display_name.chars().count())
        .max()
        .unwrap_or(0);

    for entry in &entries {
        if args.long {
            println!(
                "{:<width$}  {:<7}  {}",
                entry.display_name,
                entry.origin.to_string(),
                entry.locator.display(),
                width = width
            );
        } else {
            println!("{}", entry.display_name);
        }
    }

    Ok(())
}
