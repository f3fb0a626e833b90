//! Basic salary calculation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::RuleResult;

/// Calculates basic salary as `wage * working_days`.
///
/// The product is exact. Negative inputs are not rejected and flow through
/// the multiplication.
///
/// # Panics
///
/// Panics if the product falls outside the range of [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_basic_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_basic_salary(Decimal::from(500), 20, 1);
/// assert_eq!(result.amount, Decimal::from(10000));
/// ```
pub fn calculate_basic_salary(wage: Decimal, working_days: i32, step_number: u32) -> RuleResult {
    let amount = wage * Decimal::from(working_days);

    let audit_step = AuditStep {
        step_number,
        rule_id: "basic_salary".to_string(),
        rule_name: "Basic Salary".to_string(),
        input: serde_json::json!({
            "wage": wage.normalize().to_string(),
            "working_days": working_days
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} days = ${}",
            wage.normalize(),
            working_days,
            amount.normalize()
        ),
    };

    RuleResult { amount, audit_step }
}
