pub mod calculator;
pub mod input;
pub mod models;

pub use calculator::{estimate, estimate_from_raw, CostEstimator};
pub use input::{parse_amount, parse_param, parse_stake, RawInputs, RawNetworkParams};
pub use models::{CostEstimate, EstimateInputs, NetworkParams, DAYS_PER_MONTH, SUN_PER_TRX};
