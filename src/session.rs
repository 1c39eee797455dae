//! Interactive input session
//!
//! Holds the latest value entered for every watched field and re-runs the
//! estimator on the current snapshot. Each assignment replaces the previous
//! value of its field; there is no history.

use crate::error::AppError;
use crate::pricing::{estimate, CostEstimate, EstimateInputs, NetworkParams, RawInputs, RawNetworkParams};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A field the session can update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DailyVolume,
    TrxPrice,
    TrxToStake,
    EnergyPerTransfer,
    BandwidthPerTransfer,
    EnergyUnitPrice,
    BandwidthUnitPrice,
    EnergyYieldPerStakedUnit,
    RecurringServiceFee,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::DailyVolume,
        Field::TrxPrice,
        Field::TrxToStake,
        Field::EnergyPerTransfer,
        Field::BandwidthPerTransfer,
        Field::EnergyUnitPrice,
        Field::BandwidthUnitPrice,
        Field::EnergyYieldPerStakedUnit,
        Field::RecurringServiceFee,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::DailyVolume => "volume",
            Field::TrxPrice => "price",
            Field::TrxToStake => "stake",
            Field::EnergyPerTransfer => "energy_per_transfer",
            Field::BandwidthPerTransfer => "bandwidth_per_transfer",
            Field::EnergyUnitPrice => "energy_unit_price",
            Field::BandwidthUnitPrice => "bandwidth_unit_price",
            Field::EnergyYieldPerStakedUnit => "energy_yield",
            Field::RecurringServiceFee => "service_fee",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "volume" | "daily_volume" => Field::DailyVolume,
            "price" | "trx_price" => Field::TrxPrice,
            "stake" | "trx_to_stake" => Field::TrxToStake,
            "energy_per_transfer" => Field::EnergyPerTransfer,
            "bandwidth_per_transfer" => Field::BandwidthPerTransfer,
            "energy_unit_price" => Field::EnergyUnitPrice,
            "bandwidth_unit_price" => Field::BandwidthUnitPrice,
            "energy_yield" | "energy_yield_per_staked_unit" => Field::EnergyYieldPerStakedUnit,
            "service_fee" | "recurring_service_fee" => Field::RecurringServiceFee,
            other => return Err(AppError::UnknownField(other.to_string())),
        };
        Ok(field)
    }
}

/// Snapshot of everything the user has entered so far
#[derive(Debug, Clone, Default)]
pub struct InputState {
    inputs: RawInputs,
    network: RawNetworkParams,
    base: NetworkParams,
}

impl InputState {
    /// Start an empty session; cleared network fields resolve to `base`
    pub fn new(base: NetworkParams) -> Self {
        Self {
            inputs: RawInputs::default(),
            network: RawNetworkParams::default(),
            base,
        }
    }

    /// Replace the value of one field; an empty value clears it
    pub fn set(&mut self, field: Field, value: &str) {
        let value = value.trim().to_string();
        debug!(field = field.name(), value = %value, "Input updated");

        let slot = match field {
            Field::DailyVolume => &mut self.inputs.daily_volume,
            Field::TrxPrice => &mut self.inputs.trx_price,
            Field::TrxToStake => &mut self.inputs.trx_to_stake,
            Field::EnergyPerTransfer => &mut self.network.energy_per_transfer,
            Field::BandwidthPerTransfer => &mut self.network.bandwidth_per_transfer,
            Field::EnergyUnitPrice => &mut self.network.energy_unit_price,
            Field::BandwidthUnitPrice => &mut self.network.bandwidth_unit_price,
            Field::EnergyYieldPerStakedUnit => &mut self.network.energy_yield_per_staked_unit,
            Field::RecurringServiceFee => &mut self.network.recurring_service_fee,
        };
        *slot = value;
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::DailyVolume => &self.inputs.daily_volume,
            Field::TrxPrice => &self.inputs.trx_price,
            Field::TrxToStake => &self.inputs.trx_to_stake,
            Field::EnergyPerTransfer => &self.network.energy_per_transfer,
            Field::BandwidthPerTransfer => &self.network.bandwidth_per_transfer,
            Field::EnergyUnitPrice => &self.network.energy_unit_price,
            Field::BandwidthUnitPrice => &self.network.bandwidth_unit_price,
            Field::EnergyYieldPerStakedUnit => &self.network.energy_yield_per_staked_unit,
            Field::RecurringServiceFee => &self.network.recurring_service_fee,
        }
    }

    /// Apply a `field=value` line and return the field it changed
    pub fn apply(&mut self, line: &str) -> Result<Field, AppError> {
        let (name, value) = line
            .split_once('=')
            .ok_or_else(|| AppError::MalformedAssignment(line.trim().to_string()))?;
        let field: Field = name.parse()?;
        self.set(field, value);
        Ok(field)
    }

    /// Clear every entered value
    pub fn reset(&mut self) {
        self.inputs = RawInputs::default();
        self.network = RawNetworkParams::default();
    }

    pub fn inputs(&self) -> EstimateInputs {
        self.inputs.parse()
    }

    pub fn params(&self) -> NetworkParams {
        self.network.parse_over(&self.base)
    }

    /// Evaluate the estimator on the current snapshot
    pub fn evaluate(&self) -> Option<CostEstimate> {
        estimate(&self.inputs(), &self.params())
    }
}
