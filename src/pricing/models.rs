use serde::{Deserialize, Serialize};

/// Minor units (sun) per TRX
pub const SUN_PER_TRX: f64 = 1_000_000.0;

/// Days in a billing month
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const DEFAULT_ENERGY_PER_TRANSFER: u64 = 130_000;
pub const DEFAULT_BANDWIDTH_PER_TRANSFER: u64 = 345;
pub const DEFAULT_ENERGY_UNIT_PRICE: u64 = 100;
pub const DEFAULT_BANDWIDTH_UNIT_PRICE: u64 = 1_000;
pub const DEFAULT_ENERGY_YIELD_PER_STAKED_UNIT: u64 = 10;
pub const DEFAULT_RECURRING_SERVICE_FEE: u64 = 15_000;

/// Network resource constants used by the estimator
///
/// Unit prices are in sun; the service fee is in the reference currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Energy consumed by one TRC20 transfer
    #[serde(default = "default_energy_per_transfer")]
    pub energy_per_transfer: u64,

    /// Bandwidth consumed by one TRC20 transfer
    #[serde(default = "default_bandwidth_per_transfer")]
    pub bandwidth_per_transfer: u64,

    /// Burn price of one energy unit (sun)
    #[serde(default = "default_energy_unit_price")]
    pub energy_unit_price: u64,

    /// Burn price of one bandwidth unit (sun)
    #[serde(default = "default_bandwidth_unit_price")]
    pub bandwidth_unit_price: u64,

    /// Energy generated per day by one staked TRX
    #[serde(default = "default_energy_yield_per_staked_unit")]
    pub energy_yield_per_staked_unit: u64,

    /// Fixed service fee the break-even is measured against
    #[serde(default = "default_recurring_service_fee")]
    pub recurring_service_fee: u64,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            energy_per_transfer: default_energy_per_transfer(),
            bandwidth_per_transfer: default_bandwidth_per_transfer(),
            energy_unit_price: default_energy_unit_price(),
            bandwidth_unit_price: default_bandwidth_unit_price(),
            energy_yield_per_staked_unit: default_energy_yield_per_staked_unit(),
            recurring_service_fee: default_recurring_service_fee(),
        }
    }
}

fn default_energy_per_transfer() -> u64 {
    DEFAULT_ENERGY_PER_TRANSFER
}

fn default_bandwidth_per_transfer() -> u64 {
    DEFAULT_BANDWIDTH_PER_TRANSFER
}

fn default_energy_unit_price() -> u64 {
    DEFAULT_ENERGY_UNIT_PRICE
}

fn default_bandwidth_unit_price() -> u64 {
    DEFAULT_BANDWIDTH_UNIT_PRICE
}

fn default_energy_yield_per_staked_unit() -> u64 {
    DEFAULT_ENERGY_YIELD_PER_STAKED_UNIT
}

fn default_recurring_service_fee() -> u64 {
    DEFAULT_RECURRING_SERVICE_FEE
}

/// User-entered values after boundary parsing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EstimateInputs {
    /// TRC20 transfers per day
    pub daily_volume: f64,
    /// TRX price in the reference currency
    pub trx_price: f64,
    /// Explicit stake amount; `None` means full energy coverage
    pub trx_to_stake: Option<f64>,
}

impl EstimateInputs {
    pub fn new(daily_volume: f64, trx_price: f64) -> Self {
        Self {
            daily_volume,
            trx_price,
            trx_to_stake: None,
        }
    }

    pub fn with_stake(mut self, trx_to_stake: f64) -> Self {
        self.trx_to_stake = Some(trx_to_stake);
        self
    }
}

/// Result of one estimate evaluation
///
/// `*_trx` fields are in TRX, `*_usd` fields in the reference currency.
/// Daily values unless prefixed with `monthly_`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    // Resource demand
    pub total_energy_required: f64,
    pub total_bandwidth_required: f64,

    // Pure burn
    #[serde(rename = "energyCostTRX")]
    pub energy_cost_trx: f64,
    #[serde(rename = "bandwidthCostTRX")]
    pub bandwidth_cost_trx: f64,
    #[serde(rename = "totalBurnCostTRX")]
    pub total_burn_cost_trx: f64,

    // Staking
    pub max_trx_to_stake_for_energy: f64,
    pub actual_trx_to_stake: f64,
    pub energy_generated_from_staking: f64,
    pub remaining_energy_to_burn: f64,
    #[serde(rename = "remainingEnergyCostTRX")]
    pub remaining_energy_cost_trx: f64,

    // Daily, reference currency
    #[serde(rename = "energyCostUSD")]
    pub energy_cost_usd: f64,
    #[serde(rename = "bandwidthCostUSD")]
    pub bandwidth_cost_usd: f64,
    #[serde(rename = "totalBurnCostUSD")]
    pub total_burn_cost_usd: f64,
    /// One-time stake outlay
    #[serde(rename = "stakingCostUSD")]
    pub staking_cost_usd: f64,
    #[serde(rename = "remainingEnergyCostUSD")]
    pub remaining_energy_cost_usd: f64,
    #[serde(rename = "totalCostWithStakingUSD")]
    pub total_cost_with_staking_usd: f64,

    // Monthly, reference currency
    #[serde(rename = "monthlyEnergyCostUSD")]
    pub monthly_energy_cost_usd: f64,
    #[serde(rename = "monthlyBandwidthCostUSD")]
    pub monthly_bandwidth_cost_usd: f64,
    #[serde(rename = "monthlyBurnCostUSD")]
    pub monthly_burn_cost_usd: f64,
    /// Same as `staking_cost_usd`; the stake is not recurring
    #[serde(rename = "monthlyStakingCostUSD")]
    pub monthly_staking_cost_usd: f64,
    #[serde(rename = "monthlyRemainingEnergyCostUSD")]
    pub monthly_remaining_energy_cost_usd: f64,
    /// Excludes the one-time stake outlay
    #[serde(rename = "monthlyTotalCostWithStakingUSD")]
    pub monthly_total_cost_with_staking_usd: f64,

    // Comparison
    pub monthly_savings: f64,
    /// `None` when staking does not strictly reduce monthly spend
    pub months_to_break_even: Option<f64>,
}

impl CostEstimate {
    /// Staked energy beyond what the volume consumes
    ///
    /// No credit is modelled for it; it is simply unused.
    pub fn surplus_staked_energy(&self) -> f64 {
        (self.energy_generated_from_staking - self.total_energy_required).max(0.0)
    }

    /// True when the stake covers all energy demand
    pub fn is_fully_covered(&self) -> bool {
        self.remaining_energy_to_burn == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_params_defaults() {
        let params = NetworkParams::default();
        assert_eq!(params.energy_per_transfer, 130_000);
        assert_eq!(params.bandwidth_per_transfer, 345);
        assert_eq!(params.energy_unit_price, 100);
        assert_eq!(params.bandwidth_unit_price, 1_000);
        assert_eq!(params.energy_yield_per_staked_unit, 10);
        assert_eq!(params.recurring_service_fee, 15_000);
    }

    #[test]
    fn test_network_params_partial_toml() {
        let params: NetworkParams = toml::from_str("recurring_service_fee = 10000").unwrap();
        assert_eq!(params.recurring_service_fee, 10_000);
        assert_eq!(params.energy_per_transfer, DEFAULT_ENERGY_PER_TRANSFER);
    }

    #[test]
    fn test_estimate_inputs_with_stake() {
        let inputs = EstimateInputs::new(10.0, 0.2).with_stake(500.0);
        assert_eq!(inputs.trx_to_stake, Some(500.0));
        assert_eq!(EstimateInputs::new(10.0, 0.2).trx_to_stake, None);
    }
}
