//! Development tasks for gitignore-composer

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gitignore_composer::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render the CLI reference to Markdown
    GenDocs {
        /// Output file
        #[arg(long, default_value = "docs/cli-reference.md")]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    match Xtask::parse().command {
        Task::GenDocs { out } => {
            let markdown = clap_markdown::help_markdown::<Cli>();
            if let Some(parent) = out.parent() {
                if let Err(err) = fs::create_dir_all(parent) {
                    eprintln!("failed to create {}: {}", parent.display(), err);
                    return ExitCode::FAILURE;
                }
            }
            if let Err(err) = fs::write(&out, markdown) {
                eprintln!("failed to write {}: {}", out.display(), err);
                return ExitCode::FAILURE;
            }
            println!("wrote {}", out.display());
            ExitCode::SUCCESS
        }
    }
}
