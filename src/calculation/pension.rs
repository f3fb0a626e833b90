//! Pension contribution calculation.

use rust_decimal::Decimal;

use crate::config::PayrollRates;
use crate::models::AuditStep;

use super::RuleResult;

/// Calculates the pension deduction as `pension_rate * basic_salary`.
///
/// Employees without a pension plan contribute nothing.
///
/// # Panics
///
/// Panics if the product falls outside the range of [`Decimal`].
pub fn calculate_pension(
    has_pension_plan: bool,
    basic_salary: Decimal,
    rates: &PayrollRates,
    step_number: u32,
) -> RuleResult {
    let amount = if has_pension_plan {
        rates.pension_rate * basic_salary
    } else {
        Decimal::ZERO
    };

    let reasoning = if has_pension_plan {
        format!(
            "{} x ${} = ${}",
            rates.pension_rate.normalize(),
            basic_salary.normalize(),
            amount.normalize()
        )
    } else {
        "Employee has no pension plan - no contribution".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pension".to_string(),
        rule_name: "Pension".to_string(),
        input: serde_json::json!({
            "has_pension_plan": has_pension_plan,
            "basic_salary": basic_salary.normalize().to_string(),
            "pension_rate": rates.pension_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    RuleResult { amount, audit_step }
}
