//! Command implementations for the CLI
//!
//! - estimate: One-shot cost estimate from flags
//! - params: Effective network parameters
//! - interactive: Line-driven session that re-estimates on every change
//! - config: Configuration display and validation

pub mod config;
pub mod estimate;
pub mod interactive;
pub mod params;
