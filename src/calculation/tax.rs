//! Tiered income tax calculation.
//!
//! Basic salary falls into exactly one bracket. Each threshold is the
//! inclusive lower bound of the bracket above it:
//!
//! | Basic salary                          | Bracket  |
//! |---------------------------------------|----------|
//! | `< low_salary_threshold`              | `Low`    |
//! | `>= low` and `< medium_salary_threshold` | `Medium` |
//! | `>= medium_salary_threshold`          | `High`   |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollRates;
use crate::models::AuditStep;

use super::RuleResult;

/// A tax bracket selected by basic salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxBracket {
    /// Below the low threshold.
    Low,
    /// From the low threshold up to, but excluding, the medium threshold.
    Medium,
    /// At or above the medium threshold.
    High,
}

impl TaxBracket {
    /// Returns the tax factor for this bracket.
    pub fn factor(&self, rates: &PayrollRates) -> Decimal {
        match self {
            TaxBracket::Low => rates.low_salary_tax_factor,
            TaxBracket::Medium => rates.medium_salary_tax_factor,
            TaxBracket::High => rates.high_salary_tax_factor,
        }
    }

    /// Returns the snake_case name used in audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxBracket::Low => "low",
            TaxBracket::Medium => "medium",
            TaxBracket::High => "high",
        }
    }
}

/// Selects the tax bracket for a basic salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{TaxBracket, tax_bracket};
/// use payroll_engine::config::PayrollRates;
///
/// let rates = PayrollRates::default();
/// assert_eq!(tax_bracket(rates.low_salary_threshold, &rates), TaxBracket::Medium);
/// assert_eq!(tax_bracket(rates.medium_salary_threshold, &rates), TaxBracket::High);
/// ```
pub fn tax_bracket(basic_salary: Decimal, rates: &PayrollRates) -> TaxBracket {
    if basic_salary >= rates.medium_salary_threshold {
        TaxBracket::High
    } else if basic_salary >= rates.low_salary_threshold {
        TaxBracket::Medium
    } else {
        TaxBracket::Low
    }
}

/// The result of a tax calculation, including the selected bracket.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// The bracket the basic salary fell into.
    pub bracket: TaxBracket,
    /// The tax amount and its audit step.
    pub rule: RuleResult,
}

/// Calculates tax as `basic_salary * factor` of the selected bracket.
///
/// # Panics
///
/// Panics if the product falls outside the range of [`Decimal`].
pub fn calculate_tax(basic_salary: Decimal, rates: &PayrollRates, step_number: u32) -> TaxResult {
    let bracket = tax_bracket(basic_salary, rates);
    let factor = bracket.factor(rates);
    let amount = basic_salary * factor;

    let audit_step = AuditStep {
        step_number,
        rule_id: "tax".to_string(),
        rule_name: "Tiered Tax".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "low_salary_threshold": rates.low_salary_threshold.normalize().to_string(),
            "medium_salary_threshold": rates.medium_salary_threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "bracket": bracket.as_str(),
            "factor": factor.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} falls in the {} bracket: ${} x {} = ${}",
            basic_salary.normalize(),
            bracket.as_str(),
            basic_salary.normalize(),
            factor.normalize(),
            amount.normalize()
        ),
    };

    TaxResult {
        bracket,
        rule: RuleResult { amount, audit_step },
    }
}
