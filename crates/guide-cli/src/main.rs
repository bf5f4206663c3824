//! Guidebook CLI
//!
//! Generates per-editor guidance artifacts from one versioned YAML
//! document.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use error::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Validate { path, vars }) => commands::validate::run(&path, &vars),
        Some(Commands::Generate {
            path,
            editors,
            all: _,
            dry_run,
            output,
            vars,
        }) => commands::generate::run(&path, &editors, dry_run, &output, &vars),
        Some(Commands::ListEditors) => commands::list::run(),
        None => {
            println!("{} Guidebook CLI", "guide".green().bold());
            println!();
            println!("Run {} for available commands.", "guide --help".cyan());
            Ok(())
        }
    }
}
