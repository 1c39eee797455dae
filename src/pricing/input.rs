//! Boundary parsing for externally supplied values
//!
//! Values arrive as strings (form fields, CLI flags, session assignments).
//! Nothing here fails: unparseable values fall back to a default.

use crate::pricing::models::{
    EstimateInputs, NetworkParams, DEFAULT_BANDWIDTH_PER_TRANSFER, DEFAULT_BANDWIDTH_UNIT_PRICE,
    DEFAULT_ENERGY_PER_TRANSFER, DEFAULT_ENERGY_UNIT_PRICE, DEFAULT_ENERGY_YIELD_PER_STAKED_UNIT,
    DEFAULT_RECURRING_SERVICE_FEE,
};
use tracing::debug;

/// Parse a real amount, falling back to 0 for empty, unparseable or non-finite input
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            if !trimmed.is_empty() {
                debug!("Unparseable amount {:?}, using 0", trimmed);
            }
            0.0
        }
    }
}

/// Parse a positive integer network parameter, falling back to `default`
///
/// Zero falls back as well: every network parameter must be positive.
pub fn parse_param(raw: &str, default: u64) -> u64 {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(v) if v > 0 => v,
        _ => {
            if !trimmed.is_empty() {
                debug!("Unparseable parameter {:?}, using default {}", trimmed, default);
            }
            default
        }
    }
}

/// Parse the optional stake override; non-positive means unset
pub fn parse_stake(raw: &str) -> Option<f64> {
    let stake = parse_amount(raw);
    if stake > 0.0 {
        Some(stake)
    } else {
        None
    }
}

/// User inputs as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub daily_volume: String,
    pub trx_price: String,
    pub trx_to_stake: String,
}

impl RawInputs {
    pub fn parse(&self) -> EstimateInputs {
        EstimateInputs {
            daily_volume: parse_amount(&self.daily_volume),
            trx_price: parse_amount(&self.trx_price),
            trx_to_stake: parse_stake(&self.trx_to_stake),
        }
    }
}

/// Network parameter overrides as entered
///
/// An empty field keeps the base value it is resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawNetworkParams {
    pub energy_per_transfer: String,
    pub bandwidth_per_transfer: String,
    pub energy_unit_price: String,
    pub bandwidth_unit_price: String,
    pub energy_yield_per_staked_unit: String,
    pub recurring_service_fee: String,
}

impl RawNetworkParams {
    /// Resolve against the nominal network values
    pub fn parse(&self) -> NetworkParams {
        NetworkParams {
            energy_per_transfer: parse_param(&self.energy_per_transfer, DEFAULT_ENERGY_PER_TRANSFER),
            bandwidth_per_transfer: parse_param(
                &self.bandwidth_per_transfer,
                DEFAULT_BANDWIDTH_PER_TRANSFER,
            ),
            energy_unit_price: parse_param(&self.energy_unit_price, DEFAULT_ENERGY_UNIT_PRICE),
            bandwidth_unit_price: parse_param(
                &self.bandwidth_unit_price,
                DEFAULT_BANDWIDTH_UNIT_PRICE,
            ),
            energy_yield_per_staked_unit: parse_param(
                &self.energy_yield_per_staked_unit,
                DEFAULT_ENERGY_YIELD_PER_STAKED_UNIT,
            ),
            recurring_service_fee: parse_param(
                &self.recurring_service_fee,
                DEFAULT_RECURRING_SERVICE_FEE,
            ),
        }
    }

    /// Resolve against configured values instead of the nominal ones
    pub fn parse_over(&self, base: &NetworkParams) -> NetworkParams {
        NetworkParams {
            energy_per_transfer: parse_param(&self.energy_per_transfer, base.energy_per_transfer),
            bandwidth_per_transfer: parse_param(
                &self.bandwidth_per_transfer,
                base.bandwidth_per_transfer,
            ),
            energy_unit_price: parse_param(&self.energy_unit_price, base.energy_unit_price),
            bandwidth_unit_price: parse_param(&self.bandwidth_unit_price, base.bandwidth_unit_price),
            energy_yield_per_staked_unit: parse_param(
                &self.energy_yield_per_staked_unit,
                base.energy_yield_per_staked_unit,
            ),
            recurring_service_fee: parse_param(
                &self.recurring_service_fee,
                base.recurring_service_fee,
            ),
        }
    }
}
