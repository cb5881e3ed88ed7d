//! Dismantle CLI
//!
//! Command-line interface for generating dismantling procedures.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dismantle_cli::cli::{Cli, Command};
use dismantle_cli::{DismantleConfig, commands, config_handlers};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config` subcommands must work even when the file is broken.
    let config = match &cli.command {
        Command::Config { .. } => DismantleConfig::default(),
        _ => DismantleConfig::load(cli.config.as_deref())?,
    };

    init_tracing(&config, cli.verbose);

    let output = match &cli.command {
        Command::Generate(args) => commands::cmd_generate(&config, args)?,
        Command::Classify(args) => commands::cmd_classify(&config, args)?,
        Command::Catalog(args) => commands::cmd_catalog(&config, args)?,
        Command::Config { action } => {
            config_handlers::handle_config_command(cli.config.as_deref(), action)?
        }
    };

    println!("{output}");
    Ok(())
}

/// Logs go to stderr so that stdout stays parseable.
fn init_tracing(config: &DismantleConfig, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(fallback))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
