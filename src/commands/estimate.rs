use crate::cli::EstimateArgs;
use anyhow::Result;
use colored::Colorize;
use trc20_calculator::config::Config;
use trc20_calculator::pricing::estimate;
use trc20_calculator::report::{self, OutputFormat};
use tracing::info;

/// Execute the estimate command
///
/// Flag values go through the same lenient parsing as form input; network
/// overrides resolve against the configured parameters.
pub fn execute(cfg: &Config, args: &EstimateArgs) -> Result<()> {
    let inputs = args.raw_inputs().parse();
    let params = args.raw_params().parse_over(&cfg.network);
    info!(
        volume = inputs.daily_volume,
        price = inputs.trx_price,
        "Estimating costs"
    );

    let result = estimate(&inputs, &params);
    let output = report::render(result.as_ref(), args.format, &params, &cfg.display.currency)?;

    if result.is_none() && args.format == OutputFormat::Table {
        println!("{}", output.yellow());
        return Ok(());
    }

    println!("{}", output);
    Ok(())
}
