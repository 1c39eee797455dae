use crate::pricing::input::{RawInputs, RawNetworkParams};
use crate::pricing::models::{CostEstimate, EstimateInputs, NetworkParams, DAYS_PER_MONTH, SUN_PER_TRX};
use tracing::debug;

/// Calculator for comparing burn and stake strategies at a given volume
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    params: NetworkParams,
}

impl CostEstimator {
    /// Create a new estimator for the given network parameters
    pub fn new(params: NetworkParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    /// Estimate costs for typed inputs
    pub fn estimate(&self, inputs: &EstimateInputs) -> Option<CostEstimate> {
        estimate(inputs, &self.params)
    }

    /// Estimate costs for inputs as entered
    pub fn estimate_raw(&self, raw: &RawInputs) -> Option<CostEstimate> {
        estimate(&raw.parse(), &self.params)
    }
}

/// Estimate costs from raw inputs and raw network parameters
pub fn estimate_from_raw(raw: &RawInputs, raw_params: &RawNetworkParams) -> Option<CostEstimate> {
    estimate(&raw.parse(), &raw_params.parse())
}

/// Compute the full cost breakdown
///
/// Returns `None` when `daily_volume` or `trx_price` is not positive (or NaN):
/// the caller should show an empty state, not a record of zeros.
pub fn estimate(inputs: &EstimateInputs, params: &NetworkParams) -> Option<CostEstimate> {
    let volume = inputs.daily_volume;
    let price = inputs.trx_price;

    if !(volume > 0.0 && price > 0.0) {
        debug!(volume, price, "No estimate: volume and price must be positive");
        return None;
    }

    let energy_per_transfer = params.energy_per_transfer as f64;
    let bandwidth_per_transfer = params.bandwidth_per_transfer as f64;
    let energy_unit_price = params.energy_unit_price as f64;
    let bandwidth_unit_price = params.bandwidth_unit_price as f64;
    let energy_yield = params.energy_yield_per_staked_unit as f64;
    let service_fee = params.recurring_service_fee as f64;

    let total_energy_required = volume * energy_per_transfer;
    let total_bandwidth_required = volume * bandwidth_per_transfer;

    // Burn everything (prices are in sun)
    let energy_cost_trx = total_energy_required * energy_unit_price / SUN_PER_TRX;
    let bandwidth_cost_trx = total_bandwidth_required * bandwidth_unit_price / SUN_PER_TRX;
    let total_burn_cost_trx = energy_cost_trx + bandwidth_cost_trx;

    // Stake for energy; bandwidth is always burned
    let max_trx_to_stake_for_energy = total_energy_required / energy_yield;
    let actual_trx_to_stake = match inputs.trx_to_stake {
        Some(stake) if stake > 0.0 => stake,
        _ => max_trx_to_stake_for_energy,
    };
    let energy_generated_from_staking = actual_trx_to_stake * energy_yield;
    let remaining_energy_to_burn = (total_energy_required - energy_generated_from_staking).max(0.0);
    let remaining_energy_cost_trx = remaining_energy_to_burn * energy_unit_price / SUN_PER_TRX;

    let energy_cost_usd = energy_cost_trx * price;
    let bandwidth_cost_usd = bandwidth_cost_trx * price;
    let total_burn_cost_usd = total_burn_cost_trx * price;
    let staking_cost_usd = actual_trx_to_stake * price;
    let remaining_energy_cost_usd = remaining_energy_cost_trx * price;
    let total_cost_with_staking_usd = remaining_energy_cost_usd + bandwidth_cost_usd;

    let monthly_energy_cost_usd = energy_cost_usd * DAYS_PER_MONTH;
    let monthly_bandwidth_cost_usd = bandwidth_cost_usd * DAYS_PER_MONTH;
    let monthly_burn_cost_usd = total_burn_cost_usd * DAYS_PER_MONTH;
    let monthly_staking_cost_usd = staking_cost_usd;
    let monthly_remaining_energy_cost_usd = remaining_energy_cost_usd * DAYS_PER_MONTH;
    let monthly_total_cost_with_staking_usd =
        monthly_remaining_energy_cost_usd + monthly_bandwidth_cost_usd;

    let monthly_savings = monthly_burn_cost_usd - monthly_total_cost_with_staking_usd;
    let months_to_break_even = if monthly_savings > 0.0 {
        Some(service_fee / monthly_savings)
    } else {
        None
    };

    debug!(
        volume,
        stake = actual_trx_to_stake,
        monthly_savings,
        "Estimate computed"
    );

    Some(CostEstimate {
        total_energy_required,
        total_bandwidth_required,
        energy_cost_trx,
        bandwidth_cost_trx,
        total_burn_cost_trx,
        max_trx_to_stake_for_energy,
        actual_trx_to_stake,
        energy_generated_from_staking,
        remaining_energy_to_burn,
        remaining_energy_cost_trx,
        energy_cost_usd,
        bandwidth_cost_usd,
        total_burn_cost_usd,
        staking_cost_usd,
        remaining_energy_cost_usd,
        total_cost_with_staking_usd,
        monthly_energy_cost_usd,
        monthly_bandwidth_cost_usd,
        monthly_burn_cost_usd,
        monthly_staking_cost_usd,
        monthly_remaining_energy_cost_usd,
        monthly_total_cost_with_staking_usd,
        monthly_savings,
        months_to_break_even,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_default_scenario() {
        let estimate = CostEstimator::default()
            .estimate(&EstimateInputs::new(100.0, 0.36))
            .unwrap();

        assert_eq!(estimate.total_energy_required, 13_000_000.0);
        assert_eq!(estimate.max_trx_to_stake_for_energy, 1_300_000.0);
        assert_eq!(estimate.actual_trx_to_stake, 1_300_000.0);
        assert_eq!(estimate.energy_generated_from_staking, 13_000_000.0);
        assert_eq!(estimate.remaining_energy_to_burn, 0.0);
        assert_eq!(estimate.total_bandwidth_required, 34_500.0);
        assert!(approx(estimate.bandwidth_cost_trx, 34.5));
        assert!(approx(estimate.energy_cost_trx, 1300.0));
        assert!(approx(estimate.total_burn_cost_trx, 1334.5));
        assert!(approx(estimate.monthly_total_cost_with_staking_usd, 372.6));
        assert!(approx(estimate.monthly_burn_cost_usd, 14412.6));
        assert!(approx(estimate.monthly_savings, 14040.0));

        let months = estimate.months_to_break_even.unwrap();
        assert!(approx(months, 15_000.0 / 14_040.0));
    }

    #[test]
    fn test_partial_stake_burns_remainder() {
        let estimate = CostEstimator::default()
            .estimate(&EstimateInputs::new(100.0, 0.36).with_stake(650_000.0))
            .unwrap();

        assert_eq!(estimate.actual_trx_to_stake, 650_000.0);
        assert_eq!(estimate.remaining_energy_to_burn, 6_500_000.0);
        assert!(approx(estimate.remaining_energy_cost_trx, 650.0));
        assert!(approx(estimate.staking_cost_usd, 234_000.0));
        assert_eq!(estimate.monthly_staking_cost_usd, estimate.staking_cost_usd);
        assert!(!estimate.is_fully_covered());
    }

    #[test]
    fn test_over_stake_has_no_negative_residual() {
        let estimate = CostEstimator::default()
            .estimate(&EstimateInputs::new(1.0, 0.1).with_stake(1_000_000.0))
            .unwrap();

        assert_eq!(estimate.remaining_energy_to_burn, 0.0);
        assert_eq!(estimate.remaining_energy_cost_trx, 0.0);
        assert_eq!(estimate.surplus_staked_energy(), 10_000_000.0 - 130_000.0);
    }

    #[test]
    fn test_invalid_inputs_return_none() {
        assert!(estimate(&EstimateInputs::new(0.0, 0.36), &NetworkParams::default()).is_none());
        assert!(estimate(&EstimateInputs::new(100.0, 0.0), &NetworkParams::default()).is_none());
        assert!(estimate(&EstimateInputs::new(-1.0, 0.36), &NetworkParams::default()).is_none());
        assert!(estimate(&EstimateInputs::new(f64::NAN, 0.36), &NetworkParams::default()).is_none());
    }

    #[test]
    fn test_no_savings_means_no_break_even() {
        // A stake too small to register against the demand saves nothing
        let estimate = CostEstimator::default()
            .estimate(&EstimateInputs::new(100.0, 1.0).with_stake(1e-12))
            .unwrap();

        assert_eq!(estimate.remaining_energy_to_burn, estimate.total_energy_required);
        assert_eq!(estimate.monthly_savings, 0.0);
        assert!(estimate.months_to_break_even.is_none());
    }

    #[test]
    fn test_estimate_from_raw_strings() {
        let raw = RawInputs {
            daily_volume: "100".to_string(),
            trx_price: "0.36".to_string(),
            trx_to_stake: "not a number".to_string(),
        };
        let raw_params = RawNetworkParams {
            energy_per_transfer: "?".to_string(),
            ..RawNetworkParams::default()
        };

        let from_raw = estimate_from_raw(&raw, &raw_params).unwrap();
        let typed = CostEstimator::default()
            .estimate(&EstimateInputs::new(100.0, 0.36))
            .unwrap();
        assert_eq!(from_raw, typed);
    }
}
