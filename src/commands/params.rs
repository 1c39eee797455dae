use anyhow::Result;
use colored::Colorize;
use trc20_calculator::config::Config;
use trc20_calculator::report;

/// Execute the params command
pub fn execute(cfg: &Config) -> Result<()> {
    println!("{}", "TRON Network Parameters:".green().bold());
    println!("{}", report::render_params(&cfg.network, &cfg.display.currency));
    println!();
    println!(
        "{}",
        "Burning converts TRX to resources at the unit price; staking yields energy daily for as long as the TRX stays staked."
            .dimmed()
    );
    Ok(())
}
