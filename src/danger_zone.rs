//! Danger-zone lookup capability.
//!
//! The processor asks a [`DangerZoneService`] whether an employee's duty
//! station is hazardous. Implementations may call out to a remote service;
//! any failure they report is propagated unchanged.

use std::collections::HashSet;

use crate::error::PayrollResult;

/// Answers whether a duty station is hazardous.
///
/// Implementations must be shareable across threads. Timeouts and retries
/// are the implementation's concern.
pub trait DangerZoneService: Send + Sync {
    /// Returns true when `duty_station` is a danger zone.
    fn is_danger_zone(&self, duty_station: &str) -> PayrollResult<bool>;
}

/// An in-memory set of hazardous duty stations.
///
/// Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use payroll_engine::danger_zone::{DangerZoneService, StaticDangerZones};
///
/// let zones = StaticDangerZones::new(["Kabul"]);
/// assert_eq!(zones.is_danger_zone("Kabul"), Ok(true));
/// assert_eq!(zones.is_danger_zone("kabul"), Ok(false));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDangerZones {
    stations: HashSet<String>,
}

impl StaticDangerZones {
    /// Creates a set from the given station names.
    pub fn new<I, S>(stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of configured stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no station is configured.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl DangerZoneService for StaticDangerZones {
    fn is_danger_zone(&self, duty_station: &str) -> PayrollResult<bool> {
        Ok(self.stations.contains(duty_station))
    }
}
