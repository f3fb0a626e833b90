//! Spouse allowance calculation.

use rust_decimal::Decimal;

use crate::config::PayrollRates;
use crate::models::AuditStep;

use super::RuleResult;

/// Calculates the spouse allowance.
///
/// Married employees receive the flat `spouse_allowance_amount`; everyone
/// else receives nothing.
pub fn calculate_spouse_allowance(
    is_married: bool,
    rates: &PayrollRates,
    step_number: u32,
) -> RuleResult {
    let amount = if is_married {
        rates.spouse_allowance_amount
    } else {
        Decimal::ZERO
    };

    let reasoning = if is_married {
        format!(
            "Employee is married - flat allowance ${}",
            amount.normalize()
        )
    } else {
        "Employee is not married - no spouse allowance".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "spouse_allowance".to_string(),
        rule_name: "Spouse Allowance".to_string(),
        input: serde_json::json!({
            "is_married": is_married
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    RuleResult { amount, audit_step }
}
