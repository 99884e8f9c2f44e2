//! docpub - publish documentation files to a static-page hosting branch.

mod cli;
mod config;
mod core;
mod logger;
mod publish;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::PublishConfig;
use publish::PublishOutcome;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Setup global Ctrl+C handler (before the confirmation prompt can block)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = PublishConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { dry } => cli::init::init_config(&config.config_path, *dry),
        Commands::Check => cli::check::check_docs(&config).map(|_| ()),
        Commands::Publish { args } => {
            let outcome = cli::publish::publish_docs(&config, args)?;
            if let PublishOutcome::Published { commit, branch } = outcome {
                log!("publish"; "published {} to {}/{}",
                    commit.short(), config.publish.remote, branch);
            }
            Ok(())
        }
    }
}
