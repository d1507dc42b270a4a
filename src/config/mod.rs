pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "merchant-guide")]
#[command(about = "Answers questions about alien numerals and trade prices")]
pub struct CliConfig {
    /// File with one command per line (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML file with output settings and pre-defined aliases and prices
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}
