//! Command line interface

pub mod compose;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod settings;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::{self, Config};
use crate::templates::{CustomTemplates, TemplateEntry, TemplateSources};
use crate::tui;

#[derive(Parser)]
#[command(name = "gic")]
#[command(author, version, about = "Compose .gitignore files from templates", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: <data dir>/config.toml)
    #[arg(long, global = true, env = "GIC_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root of the bundled template tree
    #[arg(long, global = true, env = "GIC_TEMPLATES", value_name = "DIR")]
    pub bundled_root: Option<PathBuf>,

    /// Custom template directory
    #[arg(long, global = true, env = "GIC_CUSTOM_DIR", value_name = "DIR")]
    pub custom_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick templates and compose them into a .gitignore (default)
    Compose(compose::ComposeArgs),

    /// List available templates
    #[command(alias = "ls")]
    List(list::ListArgs),

    /// Create a custom template and open it in the editor
    New(new::NewArgs),

    /// Open a custom template in the editor
    Edit(edit::EditArgs),

    /// Delete a custom template
    #[command(alias = "rm")]
    Delete(delete::DeleteArgs),

    /// Show resolved settings, or write a default config file
    Config(settings::ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Resolved configuration shared by every subcommand.
pub struct AppContext {
    pub app_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
    pub sources: TemplateSources,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let app_dir = config::app_dir()?;
        let config = Config::load(cli.config.as_deref(), &app_dir)?;
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| app_dir.join(config::CONFIG_FILE_NAME));

        let mut sources = config.sources(&app_dir);
        if let Some(root) = &cli.bundled_root {
            sources.bundled_root = root.clone();
        }
        if let Some(dir) = &cli.custom_dir {
            sources.custom_dir = dir.clone();
        }
        tracing::debug!(?sources, "resolved template sources");

        Ok(Self {
            app_dir,
            config_path,
            config,
            sources,
        })
    }

    pub fn custom_templates(&self) -> CustomTemplates {
        CustomTemplates::new(&self.sources.custom_dir, &self.sources.extension)
    }

    pub fn editor(&self) -> Option<&str> {
        self.config.editor.as_deref()
    }
}

pub fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "gic", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = AppContext::from_cli(&cli)?;

    match cli.command {
        None => compose::run(&ctx, compose::ComposeArgs::default()),
        Some(Commands::Compose(args)) => compose::run(&ctx, args),
        Some(Commands::List(args)) => list::run(&ctx, args),
        Some(Commands::New(args)) => new::run(&ctx, args),
        Some(Commands::Edit(args)) => edit::run(&ctx, args),
        Some(Commands::Delete(args)) => delete::run(&ctx, args),
        Some(Commands::Config(args)) => settings::run(&ctx, args),
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

/// Interactive flows need a terminal; fail early with a hint otherwise.
pub(crate) fn require_terminal(hint: &str) -> Result<()> {
    if !tui::is_interactive() {
        bail!("Interactive selection needs a terminal; {}", hint);
    }
    Ok(())
}

/// Accept custom template names with or without the ` (custom)` label suffix.
pub(crate) fn bare_name(name: &str) -> &str {
    name.strip_suffix(" (custom)").unwrap_or(name).trim()
}

/// Let the user pick a custom template, previewing the highlighted one.
pub(crate) fn pick_custom(ctx: &AppContext, title: &str) -> Result<Option<PathBuf>> {
    let custom = ctx.custom_templates();
    let entries = custom.list()?;
    if entries.is_empty() {
        println!("No custom templates in {}", custom.dir().display());
        return Ok(None);
    }
    require_terminal("pass the template name")?;

    let labels = entries.iter().map(|e| e.display_name.clone()).collect();
    let preview = |idx: usize| entries.get(idx).and_then(|e| e.read_content().ok());
    let picked = tui::pick_one(title, labels, Some(Box::new(preview)))?;
    Ok(picked.and_then(|idx| entries.get(idx)).map(|e: &TemplateEntry| e.locator.clone()))
}

/// Existing custom template path for a user-supplied name.
pub(crate) fn existing_custom(ctx: &AppContext, name: &str) -> Result<PathBuf> {
    let path = ctx.custom_templates().path_for(bare_name(name))?;
    if !path.is_file() {
        return Err(crate::Error::TemplateNotFound(name.to_string()).into());
    }
    Ok(path)
}
