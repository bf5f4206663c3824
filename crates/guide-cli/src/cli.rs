//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Guidebook - Generate AI assistant guidance files for your editors
#[derive(Parser, Debug)]
#[command(name = "guide")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate a guidance document
    ///
    /// Checks the schema version, required fields, document names, and
    /// variable placeholders. Exits 0 only when the document is fully
    /// valid; every finding is listed in one run.
    Validate {
        /// Path to the guidance document
        path: String,

        /// Variable override (repeatable)
        #[arg(short = 'V', long = "var", value_name = "NAME=value")]
        vars: Vec<String>,
    },

    /// Generate editor artifacts from a guidance document
    ///
    /// By default generates for every registered editor. Use --editor to
    /// select a subset.
    ///
    /// Examples:
    ///   guide generate guidebook.yml
    ///   guide generate guidebook.yml --editor cursor --editor claude
    ///   guide generate guidebook.yml --dry-run
    ///   guide generate guidebook.yml -V ORG=acme
    Generate {
        /// Path to the guidance document
        path: String,

        /// Target editor (repeatable; default all)
        #[arg(short, long = "editor")]
        editors: Vec<String>,

        /// Generate for all registered editors (the default)
        #[arg(long, conflicts_with = "editors")]
        all: bool,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Output root directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        output: String,

        /// Variable override (repeatable)
        #[arg(short = 'V', long = "var", value_name = "NAME=value")]
        vars: Vec<String>,
    },

    /// List registered editors and their capabilities
    ListEditors,
}
