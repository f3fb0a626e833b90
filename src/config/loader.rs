//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::danger_zone::StaticDangerZones;
use crate::error::{PayrollError, PayrollResult};

use super::types::{DangerZoneConfig, PayrollRates};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── rates.yaml          # Rates and thresholds for every rule
/// └── danger_zones.yaml   # Hazardous duty stations
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll")?;
/// println!("Spouse allowance: {}", loader.rates().spouse_allowance_amount);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: PayrollRates,
    danger_zones: StaticDangerZones,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `rates.yaml` or `danger_zones.yaml` is missing,
    /// contains invalid YAML, or the rates fail validation.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<PayrollRates>(&path.join("rates.yaml"))?;
        rates.validate()?;

        let zones = Self::load_yaml::<DangerZoneConfig>(&path.join("danger_zones.yaml"))?;

        tracing::debug!(
            path = %path.display(),
            danger_zones = zones.stations.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            rates,
            danger_zones: StaticDangerZones::new(zones.stations),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rates table.
    pub fn rates(&self) -> &PayrollRates {
        &self.rates
    }

    /// Returns the configured hazardous duty stations.
    pub fn danger_zones(&self) -> &StaticDangerZones {
        &self.danger_zones
    }

    /// Splits the loader into its rates and danger zones.
    pub fn into_parts(self) -> (PayrollRates, StaticDangerZones) {
        (self.rates, self.danger_zones)
    }
}
