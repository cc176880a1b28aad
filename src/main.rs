use anyhow::Result;
use biasmap::cli::{Cli, Commands};
use biasmap::commands::{self, AnalyzeConfig, ValidateConfig};
use biasmap::formatting::FormattingConfig;
use biasmap::observability::{init_tracing, install_panic_hook};
use clap::Parser;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            paths,
            format,
            output,
            config,
            plain,
            verbosity,
        } => {
            init_tracing(verbosity);
            let formatting_config = if plain {
                FormattingConfig::plain()
            } else {
                FormattingConfig::from_env()
            };
            commands::handle_analyze(AnalyzeConfig {
                paths,
                format,
                output,
                config,
                formatting_config,
                verbosity,
            })
        }
        Commands::Init { force } => {
            init_tracing(0);
            commands::init_config(force)
        }
        Commands::Validate {
            path,
            config,
            max_risk,
            verbosity,
        } => {
            init_tracing(verbosity);
            commands::validate_project(ValidateConfig {
                path,
                config,
                max_risk: max_risk.map(Into::into),
                verbosity,
            })
        }
    }
}
