use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biasmap")]
#[command(about = "Demographic bias detector for tabular datasets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more datasets for demographic imbalance
    Analyze {
        /// Files to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format (defaults to the config file's choice, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .biasmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Plain output mode: ASCII-only, no colors, no emoji
        #[arg(long = "plain")]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a biasmap configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Fail when a dataset's overall risk exceeds the allowed level
    Validate {
        /// File to validate
        path: PathBuf,

        /// Configuration file (defaults to the nearest .biasmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Highest overall risk that still passes
        #[arg(long = "max-risk", value_enum)]
        max_risk: Option<RiskArg>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum RiskArg {
    Low,
    Medium,
    High,
}

impl From<RiskArg> for crate::core::RiskLevel {
    fn from(r: RiskArg) -> Self {
        match r {
            RiskArg::Low => crate::core::RiskLevel::Low,
            RiskArg::Medium => crate::core::RiskLevel::Medium,
            RiskArg::High => crate::core::RiskLevel::High,
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
            OutputFormat::Csv => crate::io::output::OutputFormat::Csv,
        }
    }
}
