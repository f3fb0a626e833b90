//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::constants;

/// The table of rates and thresholds every payroll rule reads from.
///
/// `PayrollRates::default()` carries the values from [`constants`].
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollRates;
/// use rust_decimal::Decimal;
///
/// let rates = PayrollRates::default();
/// assert_eq!(rates.spouse_allowance_amount, Decimal::from(500));
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRates {
    /// Flat allowance paid to married employees.
    pub spouse_allowance_amount: Decimal,
    /// Dependant count above which the allowance is clamped.
    pub max_dependants_factor: i32,
    /// Allowance per dependant up to the factor.
    pub dependant_allowance_per_child_amount: Decimal,
    /// Flat allowance above the factor.
    pub max_dependant_allowance_amount: Decimal,
    /// Pension contribution rate on basic salary.
    pub pension_rate: Decimal,
    /// Inclusive lower bound of the medium bracket.
    pub low_salary_threshold: Decimal,
    /// Inclusive lower bound of the high bracket.
    pub medium_salary_threshold: Decimal,
    /// Tax factor of the low bracket.
    pub low_salary_tax_factor: Decimal,
    /// Tax factor of the medium bracket.
    pub medium_salary_tax_factor: Decimal,
    /// Tax factor of the high bracket.
    pub high_salary_tax_factor: Decimal,
    /// Hazardous duty compensation.
    pub danger_pay_amount: Decimal,
    /// Basic health package premium.
    pub basic_health_care_amount: Decimal,
    /// Fair health package premium.
    pub fair_health_care_amount: Decimal,
    /// Premium health package premium.
    pub premium_health_care_amount: Decimal,
    /// Transportation allowance for office workers.
    pub transportation_allowance_amount: Decimal,
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            spouse_allowance_amount: constants::SPOUSE_ALLOWANCE_AMOUNT,
            max_dependants_factor: constants::MAX_DEPENDANTS_FACTOR,
            dependant_allowance_per_child_amount: constants::DEPENDANT_ALLOWANCE_PER_CHILD_AMOUNT,
            max_dependant_allowance_amount: constants::MAX_DEPENDANT_ALLOWANCE_AMOUNT,
            pension_rate: constants::PENSION_RATE,
            low_salary_threshold: constants::LOW_SALARY_THRESHOLD,
            medium_salary_threshold: constants::MEDIUM_SALARY_THRESHOLD,
            low_salary_tax_factor: constants::LOW_SALARY_TAX_FACTOR,
            medium_salary_tax_factor: constants::MEDIUM_SALARY_TAX_FACTOR,
            high_salary_tax_factor: constants::HIGH_SALARY_TAX_FACTOR,
            danger_pay_amount: constants::DANGER_PAY_AMOUNT,
            basic_health_care_amount: constants::BASIC_HEALTH_CARE_AMOUNT,
            fair_health_care_amount: constants::FAIR_HEALTH_CARE_AMOUNT,
            premium_health_care_amount: constants::PREMIUM_HEALTH_CARE_AMOUNT,
            transportation_allowance_amount: constants::TRANSPORTATION_ALLOWANCE_AMOUNT,
        }
    }
}

impl PayrollRates {
    /// Checks that the table can drive the rules consistently.
    ///
    /// Rejects negative amounts or rates, a negative dependant factor, and
    /// thresholds out of order (the tax brackets would overlap). The flat
    /// dependant maximum must be at least the scaled amount at the factor,
    /// so the allowance never drops once the clamp applies.
    pub fn validate(&self) -> PayrollResult<()> {
        let amounts = [
            ("spouse_allowance_amount", self.spouse_allowance_amount),
            (
                "dependant_allowance_per_child_amount",
                self.dependant_allowance_per_child_amount,
            ),
            (
                "max_dependant_allowance_amount",
                self.max_dependant_allowance_amount,
            ),
            ("pension_rate", self.pension_rate),
            ("low_salary_threshold", self.low_salary_threshold),
            ("medium_salary_threshold", self.medium_salary_threshold),
            ("low_salary_tax_factor", self.low_salary_tax_factor),
            ("medium_salary_tax_factor", self.medium_salary_tax_factor),
            ("high_salary_tax_factor", self.high_salary_tax_factor),
            ("danger_pay_amount", self.danger_pay_amount),
            ("basic_health_care_amount", self.basic_health_care_amount),
            ("fair_health_care_amount", self.fair_health_care_amount),
            ("premium_health_care_amount", self.premium_health_care_amount),
            (
                "transportation_allowance_amount",
                self.transportation_allowance_amount,
            ),
        ];

        if let Some((field, _)) = amounts.iter().find(|(_, value)| *value < Decimal::ZERO) {
            return Err(PayrollError::InvalidConfig {
                field: field.to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if self.max_dependants_factor < 0 {
            return Err(PayrollError::InvalidConfig {
                field: "max_dependants_factor".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let scaled_at_factor = Decimal::from(self.max_dependants_factor)
            .checked_mul(self.dependant_allowance_per_child_amount);
        if scaled_at_factor.is_none_or(|scaled| self.max_dependant_allowance_amount < scaled) {
            return Err(PayrollError::InvalidConfig {
                field: "max_dependant_allowance_amount".to_string(),
                message: format!(
                    "{} is below {} dependants at {} per child",
                    self.max_dependant_allowance_amount,
                    self.max_dependants_factor,
                    self.dependant_allowance_per_child_amount
                ),
            });
        }

        if self.low_salary_threshold > self.medium_salary_threshold {
            return Err(PayrollError::InvalidConfig {
                field: "low_salary_threshold".to_string(),
                message: format!(
                    "{} exceeds medium_salary_threshold {}",
                    self.low_salary_threshold, self.medium_salary_threshold
                ),
            });
        }

        Ok(())
    }
}

/// Danger-zone configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DangerZoneConfig {
    /// Duty stations considered hazardous.
    #[serde(default)]
    pub stations: Vec<String>,
}
