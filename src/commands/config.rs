use anyhow::Result;
use colored::Colorize;
use trc20_calculator::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file, environment and defaults merged)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this prints a summary.
pub fn validate(cfg: &Config) -> Result<()> {
    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Service Fee".cyan(), cfg.network.recurring_service_fee);
    println!("  {}: {}", "Currency".cyan(), cfg.display.currency);
    println!(
        "  {}: {} ({})",
        "Logging".cyan(),
        cfg.logging.level,
        cfg.logging.format
    );
    println!(
        "  {}: {}",
        "Non-default network parameters".cyan(),
        count_overridden_params(cfg)
    );

    info!("Configuration validation successful");
    Ok(())
}

/// Count network parameters that differ from the nominal network values
fn count_overridden_params(cfg: &Config) -> usize {
    let nominal = trc20_calculator::pricing::NetworkParams::default();
    let n = &cfg.network;
    [
        n.energy_per_transfer != nominal.energy_per_transfer,
        n.bandwidth_per_transfer != nominal.bandwidth_per_transfer,
        n.energy_unit_price != nominal.energy_unit_price,
        n.bandwidth_unit_price != nominal.bandwidth_unit_price,
        n.energy_yield_per_staked_unit != nominal.energy_yield_per_staked_unit,
        n.recurring_service_fee != nominal.recurring_service_fee,
    ]
    .iter()
    .filter(|changed| **changed)
    .count()
}
