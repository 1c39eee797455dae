use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod commands;

use trc20_calculator::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Logging settings come from the config, so load it first
    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.logging);
    info!(path = %args.config.display(), "Configuration loaded");

    match args.get_command() {
        cli::Commands::Estimate(estimate_args) => {
            commands::estimate::execute(&cfg, &estimate_args)?;
        }
        cli::Commands::Params => {
            commands::params::execute(&cfg)?;
        }
        cli::Commands::Interactive => {
            commands::interactive::execute(&cfg)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg)?,
        },
        cli::Commands::Version => {
            println!("TRC20 Calculator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
