//! Presentation of estimates
//!
//! Formatting lives here and only here; the estimator hands back raw `f64`s.

use crate::error::AppError;
use crate::pricing::{CostEstimate, NetworkParams, SUN_PER_TRX};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Message shown instead of a report when inputs are incomplete
pub const NO_DATA_MESSAGE: &str =
    "Enter a daily transaction volume and TRX price to see the cost breakdown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Toml,
}

/// Render an estimate (or its absence) in the requested format
pub fn render(
    estimate: Option<&CostEstimate>,
    format: OutputFormat,
    params: &NetworkParams,
    currency: &str,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => Ok(match estimate {
            Some(e) => render_table(e, params, currency),
            None => NO_DATA_MESSAGE.to_string(),
        }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&estimate)?),
        OutputFormat::Toml => match estimate {
            Some(e) => Ok(toml::to_string_pretty(e)?),
            None => Ok(String::new()),
        },
    }
}

/// Sectioned breakdown mirroring the calculator's result panel
pub fn render_table(e: &CostEstimate, params: &NetworkParams, currency: &str) -> String {
    let money = |v: f64| format_money(v, currency);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Item"), Cell::new("Value")]);

    section(&mut table, "Resource Requirements");
    row(&mut table, "Total energy required", format!("{} units", format_units(e.total_energy_required)));
    row(&mut table, "Energy from staking", format!("{} units", format_units(e.energy_generated_from_staking)));
    row(&mut table, "Remaining energy to burn", format!("{} units", format_units(e.remaining_energy_to_burn)));
    let surplus = e.surplus_staked_energy();
    if surplus > 0.0 {
        row(&mut table, "Unused staked energy", format!("{} units", format_units(surplus)));
    }
    row(&mut table, "Bandwidth required", format!("{} units", format_units(e.total_bandwidth_required)));

    section(&mut table, "Burn Only (daily)");
    row(&mut table, "Energy", format!("{} TRX / {}", format_trx(e.energy_cost_trx), money(e.energy_cost_usd)));
    row(&mut table, "Bandwidth", format!("{} TRX / {}", format_trx(e.bandwidth_cost_trx), money(e.bandwidth_cost_usd)));
    row(&mut table, "Total", format!("{} TRX / {}", format_trx(e.total_burn_cost_trx), money(e.total_burn_cost_usd)));
    row(&mut table, "Monthly total", money(e.monthly_burn_cost_usd));

    section(&mut table, "Staking");
    row(&mut table, "TRX for full energy coverage", format!("{} TRX", format_trx(e.max_trx_to_stake_for_energy)));
    row(&mut table, "TRX staked", format!("{} TRX", format_trx(e.actual_trx_to_stake)));
    row(&mut table, "One-time staking cost", money(e.staking_cost_usd));
    row(&mut table, "Remaining energy burn (daily)", format!("{} TRX / {}", format_trx(e.remaining_energy_cost_trx), money(e.remaining_energy_cost_usd)));
    row(&mut table, "Daily cost with staking", money(e.total_cost_with_staking_usd));
    row(&mut table, "Monthly cost with staking", money(e.monthly_total_cost_with_staking_usd));

    section(&mut table, "Break-even");
    row(&mut table, "Monthly savings", money(e.monthly_savings));
    row(&mut table, "Service fee", money(params.recurring_service_fee as f64));
    row(&mut table, "Months to break even", format_months(e.months_to_break_even));

    table.to_string()
}

/// One-line summary used after every interactive update
pub fn render_summary(e: &CostEstimate, currency: &str) -> String {
    format!(
        "burn {}/mo, staking {}/mo (stake {} TRX), savings {}/mo, break-even {}",
        format_money(e.monthly_burn_cost_usd, currency),
        format_money(e.monthly_total_cost_with_staking_usd, currency),
        format_trx(e.actual_trx_to_stake),
        format_money(e.monthly_savings, currency),
        format_months(e.months_to_break_even),
    )
}

/// Network parameters and the per-transfer facts derived from them
pub fn render_params(params: &NetworkParams, currency: &str) -> String {
    let energy_per_transfer_trx =
        params.energy_per_transfer as f64 * params.energy_unit_price as f64 / SUN_PER_TRX;
    let bandwidth_per_transfer_trx =
        params.bandwidth_per_transfer as f64 * params.bandwidth_unit_price as f64 / SUN_PER_TRX;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Parameter"), Cell::new("Value")]);

    row(&mut table, "Energy per transfer", format!("{} units", format_units(params.energy_per_transfer as f64)));
    row(&mut table, "Bandwidth per transfer", format!("{} units", format_units(params.bandwidth_per_transfer as f64)));
    row(&mut table, "Energy unit price", format!("{} sun", params.energy_unit_price));
    row(&mut table, "Bandwidth unit price", format!("{} sun", params.bandwidth_unit_price));
    row(&mut table, "Energy per staked TRX (daily)", format!("{} units", params.energy_yield_per_staked_unit));
    row(&mut table, "Service fee", format_money(params.recurring_service_fee as f64, currency));
    row(&mut table, "Burn cost per transfer (energy)", format!("{} TRX", format_trx(energy_per_transfer_trx)));
    row(&mut table, "Burn cost per transfer (bandwidth)", format!("{} TRX", format_trx(bandwidth_per_transfer_trx)));

    table.to_string()
}

fn section(table: &mut Table, title: &str) {
    table.add_row(vec![Cell::new(title), Cell::new("")]);
}

fn row(table: &mut Table, label: &str, value: String) {
    table.add_row(vec![Cell::new(format!("  {}", label)), Cell::new(value)]);
}

/// Resource amounts: thousands separators, fraction only when present
pub fn format_units(value: f64) -> String {
    if value.fract() == 0.0 {
        group_thousands(&format!("{:.0}", value))
    } else {
        group_thousands(&format!("{:.2}", value))
    }
}

pub fn format_trx(value: f64) -> String {
    group_thousands(&format!("{:.2}", value))
}

pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {}", group_thousands(&format!("{:.2}", value)), currency)
}

pub fn format_months(months: Option<f64>) -> String {
    match months {
        Some(m) => format!("{:.1} months", m),
        None => "N/A".to_string(),
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{CostEstimator, EstimateInputs};

    fn scenario() -> CostEstimate {
        CostEstimator::default()
            .estimate(&EstimateInputs::new(100.0, 0.36))
            .unwrap()
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("13000000"), "13,000,000");
        assert_eq!(group_thousands("345"), "345");
        assert_eq!(group_thousands("1334.50"), "1,334.50");
        assert_eq!(group_thousands("-14040.00"), "-14,040.00");
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_units(34_500.0), "34,500");
        assert_eq!(format_units(12.5), "12.50");
        assert_eq!(format_money(372.6, "USD"), "372.60 USD");
        assert_eq!(format_months(Some(15_000.0 / 14_040.0)), "1.1 months");
        assert_eq!(format_months(None), "N/A");
    }

    #[test]
    fn test_render_table_contains_sections() {
        let output = render_table(&scenario(), &NetworkParams::default(), "USD");
        assert!(output.contains("Resource Requirements"));
        assert!(output.contains("13,000,000 units"));
        assert!(output.contains("14,040.00 USD"));
        assert!(output.contains("1.1 months"));
        assert!(!output.contains("Unused staked energy"));
    }

    #[test]
    fn test_render_none_shows_prompt() {
        let output = render(None, OutputFormat::Table, &NetworkParams::default(), "USD").unwrap();
        assert_eq!(output, NO_DATA_MESSAGE);

        let json = render(None, OutputFormat::Json, &NetworkParams::default(), "USD").unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_render_json_uses_record_field_names() {
        let estimate = scenario();
        let json = render(Some(&estimate), OutputFormat::Json, &NetworkParams::default(), "USD").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["totalEnergyRequired"], 13_000_000.0);
        assert_eq!(value["maxTrxToStakeForEnergy"], 1_300_000.0);
        assert!(value.get("monthlyTotalCostWithStakingUSD").is_some());
        assert!(value["monthsToBreakEven"].is_number());
    }

    #[test]
    fn test_render_toml() {
        let estimate = scenario();
        let output = render(Some(&estimate), OutputFormat::Toml, &NetworkParams::default(), "USD").unwrap();
        assert!(output.contains("totalBandwidthRequired = 34500.0"));
    }

    #[test]
    fn test_render_params() {
        let output = render_params(&NetworkParams::default(), "USD");
        assert!(output.contains("130,000 units"));
        assert!(output.contains("13.00 TRX"));
        assert!(output.contains("15,000.00 USD"));
    }
}
