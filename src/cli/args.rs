//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Publish documentation files to a static-page hosting branch
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docpub.toml, searched upward from cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "docpub.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Commit and push the documentation files after confirmation
    #[command(visible_alias = "p")]
    Publish {
        #[command(flatten)]
        args: PublishArgs,
    },

    /// Show missing files, pending changes and hosting instructions without publishing
    #[command(visible_alias = "c")]
    Check,

    /// Write a default docpub.toml into the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Print the config template instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Publish command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PublishArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would be committed and pushed, without touching git
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Override the commit message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Override target branches (repeatable, tried in order)
    #[arg(short = 'b', long = "branch", value_name = "BRANCH")]
    pub branches: Vec<String>,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
