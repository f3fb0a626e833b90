//! Employee model and related types.
//!
//! This module defines the Employee struct together with the health
//! insurance and work platform enums that drive individual slip lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The health insurance package an employee is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthInsurancePackage {
    /// Entry-level coverage.
    Basic,
    /// Mid-range coverage.
    Fair,
    /// Full coverage.
    Premium,
}

impl HealthInsurancePackage {
    /// Returns the snake_case name used in audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthInsurancePackage::Basic => "basic",
            HealthInsurancePackage::Fair => "fair",
            HealthInsurancePackage::Premium => "premium",
        }
    }
}

/// Where the employee performs their work.
///
/// `Office` is the default variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPlatform {
    /// Works on site every day.
    #[default]
    Office,
    /// Works from home.
    Remote,
    /// Splits time between office and home.
    Hybrid,
}

impl WorkPlatform {
    /// Returns the snake_case name used in audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkPlatform::Office => "office",
            WorkPlatform::Remote => "remote",
            WorkPlatform::Hybrid => "hybrid",
        }
    }
}

/// An employee whose salary slip is being calculated.
///
/// The record is a flat value. The engine never mutates it and performs no
/// validation on construction: out-of-range values such as a negative
/// dependant count are only rejected by the rule that consumes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    /// Identifier for the employee. Uniqueness is not enforced here.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Opaque key passed to the danger-zone lookup.
    pub duty_station: String,
    /// Daily wage.
    pub wage: Decimal,
    /// Days worked in the period.
    pub working_days: i32,
    /// Whether the employee is married.
    pub is_married: bool,
    /// Number of dependants, checked at calculation time.
    pub total_dependants: i32,
    /// Explicit hazardous-duty flag. When set, no station lookup happens.
    pub is_danger: bool,
    /// Whether the employee contributes to a pension plan.
    pub has_pension_plan: bool,
    /// Enrolled health insurance package; `None` means no coverage.
    pub health_insurance_package: Option<HealthInsurancePackage>,
    /// Where the employee works.
    pub work_platform: WorkPlatform,
}
