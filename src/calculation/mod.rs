//! Calculation logic for the payroll engine.
//!
//! Each rule is a pure function over plain inputs and a [`PayrollRates`]
//! table: basic salary, spouse allowance, dependant allowance with its cap,
//! pension, tiered tax, danger pay, health insurance, and transportation
//! allowance. Every rule returns its amount alongside an audit step.
//!
//! [`PayrollRates`]: crate::config::PayrollRates

mod basic_salary;
mod danger_pay;
mod dependant_allowance;
mod health_insurance;
mod pension;
mod spouse_allowance;
mod tax;
mod transportation_allowance;

use rust_decimal::Decimal;

use crate::models::AuditStep;

pub use basic_salary::calculate_basic_salary;
pub use danger_pay::calculate_danger_pay;
pub use dependant_allowance::calculate_dependant_allowance;
pub use health_insurance::{calculate_health_insurance, health_insurance_amount};
pub use pension::calculate_pension;
pub use spouse_allowance::calculate_spouse_allowance;
pub use tax::{TaxBracket, TaxResult, calculate_tax, tax_bracket};
pub use transportation_allowance::{calculate_transportation_allowance, transportation_amount};

/// The outcome of applying a single rule.
#[derive(Debug, Clone)]
pub struct RuleResult {
    /// The line amount.
    pub amount: Decimal,
    /// The audit step recording this rule application.
    pub audit_step: AuditStep,
}
