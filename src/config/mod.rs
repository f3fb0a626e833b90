//! Configuration for the payroll engine.
//!
//! Rates and thresholds are centralised in a [`PayrollRates`] table. The
//! defaults come from [`constants`]; [`ConfigLoader`] reads a replacement
//! table and the hazardous duty stations from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Pension rate: {}", config.rates().pension_rate);
//! ```

pub mod constants;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DangerZoneConfig, PayrollRates};
