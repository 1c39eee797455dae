use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trc20_calculator::pricing::{RawInputs, RawNetworkParams};
use trc20_calculator::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "trc20-calc", version, about = "TRON TRC20 energy, bandwidth and TRX cost calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "calculator.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate burn and staking costs for a daily volume
    Estimate(EstimateArgs),

    /// Show the effective network parameters (default)
    Params,

    /// Read `field=value` lines from stdin and re-estimate after each one
    Interactive,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

/// Values are taken verbatim and parsed leniently by the estimator boundary
#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Average daily TRC20 transfer count
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub volume: String,

    /// TRX price in the reference currency
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub price: String,

    /// TRX to stake; omit for full energy coverage
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub stake: String,

    #[arg(long, default_value = "")]
    pub energy_per_transfer: String,

    #[arg(long, default_value = "")]
    pub bandwidth_per_transfer: String,

    /// Energy burn price in sun
    #[arg(long, default_value = "")]
    pub energy_unit_price: String,

    /// Bandwidth burn price in sun
    #[arg(long, default_value = "")]
    pub bandwidth_unit_price: String,

    /// Daily energy per staked TRX
    #[arg(long, default_value = "")]
    pub energy_yield: String,

    /// Service fee used for the break-even
    #[arg(long, default_value = "")]
    pub service_fee: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl EstimateArgs {
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            daily_volume: self.volume.clone(),
            trx_price: self.price.clone(),
            trx_to_stake: self.stake.clone(),
        }
    }

    pub fn raw_params(&self) -> RawNetworkParams {
        RawNetworkParams {
            energy_per_transfer: self.energy_per_transfer.clone(),
            bandwidth_per_transfer: self.bandwidth_per_transfer.clone(),
            energy_unit_price: self.energy_unit_price.clone(),
            bandwidth_unit_price: self.bandwidth_unit_price.clone(),
            energy_yield_per_staked_unit: self.energy_yield.clone(),
            recurring_service_fee: self.service_fee.clone(),
        }
    }
}

impl Cli {
    /// Get the command to execute, defaulting to Params if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_params() {
        let cli = Cli {
            config: PathBuf::from("calculator.toml"),
            command: None,
        };

        assert!(matches!(cli.get_command(), Commands::Params));
    }

    #[test]
    fn test_cli_parsing_estimate() {
        let args = vec!["trc20-calc", "estimate", "--volume", "100", "--price", "0.36"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Estimate(args) => {
                assert_eq!(args.volume, "100");
                assert_eq!(args.price, "0.36");
                assert_eq!(args.stake, "");
                assert_eq!(args.format, OutputFormat::Table);
                assert_eq!(args.raw_inputs().parse().trx_to_stake, None);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_estimate_overrides() {
        let args = vec![
            "trc20-calc",
            "estimate",
            "-v",
            "50",
            "-p",
            "0.2",
            "--stake",
            "1000",
            "--service-fee",
            "10000",
            "--format",
            "json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Estimate(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.raw_params().parse().recurring_service_fee, 10_000);
                assert_eq!(args.raw_inputs().parse().trx_to_stake, Some(1000.0));
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_validate() {
        let args = vec!["trc20-calc", "--config", "other.toml", "config", "validate"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(
            cli.get_command(),
            Commands::Config {
                action: ConfigCommands::Validate
            }
        ));
    }
}
