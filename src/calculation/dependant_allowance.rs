//! Dependant allowance calculation.
//!
//! The allowance scales with the dependant count up to
//! `max_dependants_factor`. Above the factor a flat maximum is paid instead
//! of the scaled amount. A negative count is rejected, never clamped.

use rust_decimal::Decimal;

use crate::config::PayrollRates;
use crate::error::{PayrollError, PayrollResult};
use crate::models::AuditStep;

use super::RuleResult;

/// Calculates the dependant allowance for `total_dependants`.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidDependantCount`] when `total_dependants`
/// is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_dependant_allowance;
/// use payroll_engine::config::PayrollRates;
///
/// let rates = PayrollRates::default();
/// let capped = calculate_dependant_allowance(rates.max_dependants_factor + 10, &rates, 1)?;
/// assert_eq!(capped.amount, rates.max_dependant_allowance_amount);
/// assert!(calculate_dependant_allowance(-1, &rates, 1).is_err());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn calculate_dependant_allowance(
    total_dependants: i32,
    rates: &PayrollRates,
    step_number: u32,
) -> PayrollResult<RuleResult> {
    if total_dependants < 0 {
        return Err(PayrollError::InvalidDependantCount {
            count: total_dependants,
        });
    }

    let per_child = rates.dependant_allowance_per_child_amount;
    let (amount, cap_applied) = if total_dependants == 0 {
        (Decimal::ZERO, false)
    } else if total_dependants > rates.max_dependants_factor {
        (rates.max_dependant_allowance_amount, true)
    } else {
        (Decimal::from(total_dependants) * per_child, false)
    };

    let reasoning = if total_dependants == 0 {
        "No dependants - no dependant allowance".to_string()
    } else if cap_applied {
        format!(
            "{} dependants exceeds factor {} - flat maximum ${}",
            total_dependants,
            rates.max_dependants_factor,
            amount.normalize()
        )
    } else {
        format!(
            "{} dependants x ${} = ${}",
            total_dependants,
            per_child.normalize(),
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "dependant_allowance".to_string(),
        rule_name: "Dependant Allowance".to_string(),
        input: serde_json::json!({
            "total_dependants": total_dependants,
            "max_dependants_factor": rates.max_dependants_factor,
            "per_child_amount": per_child.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
            "cap_applied": cap_applied
        }),
        reasoning,
    };

    Ok(RuleResult { amount, audit_step })
}
