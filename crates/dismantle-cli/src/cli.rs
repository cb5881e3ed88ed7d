//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use dismantle_core::{ManifestFormat, RepresentativePolicy};

use crate::config::OutputFormat;

/// Dismantle - teardown checklists for electronic waste
#[derive(Parser, Debug)]
#[command(name = "dismantle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging (overrides the configured level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the dismantling procedure for a manifest
    Generate(GenerateArgs),
    /// Show how each component of a manifest is classified
    Classify(InputArgs),
    /// List the rules of the standard catalog
    Catalog(OutputArgs),
    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Where the manifest comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Manifest file (.json or .toml), or `-` for stdin; omitted means the
    /// canonical laptop example
    #[arg(short, long)]
    pub input: Option<String>,

    /// Format of a manifest read from stdin
    #[arg(long, value_enum, default_value_t = StdinFormat::Json)]
    pub stdin_format: StdinFormat,

    /// Output overrides
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output overrides shared by every reporting command.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments of `generate`.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Manifest source and output overrides
    #[command(flatten)]
    pub input: InputArgs,

    /// Representative policy: first-match or aggregate-all
    #[arg(long)]
    pub policy: Option<RepresentativePolicy>,
}

/// Serialized formats accepted on stdin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StdinFormat {
    /// JSON document
    #[default]
    Json,
    /// TOML document
    Toml,
}

impl From<StdinFormat> for ManifestFormat {
    fn from(format: StdinFormat) -> Self {
        match format {
            StdinFormat::Json => ManifestFormat::Json,
            StdinFormat::Toml => ManifestFormat::Toml,
        }
    }
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Print one value by dotted key, e.g. `engine.policy`
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
