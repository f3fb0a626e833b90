//! Transportation allowance calculation.

use rust_decimal::Decimal;

use crate::config::PayrollRates;
use crate::models::{AuditStep, WorkPlatform};

use super::RuleResult;

/// Maps a work platform to its transportation allowance.
///
/// Office workers receive the full amount, hybrid workers half, and remote
/// workers nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::transportation_amount;
/// use payroll_engine::config::PayrollRates;
/// use payroll_engine::models::WorkPlatform;
///
/// let rates = PayrollRates::default();
/// assert_eq!(
///     transportation_amount(WorkPlatform::Office, &rates),
///     transportation_amount(WorkPlatform::Hybrid, &rates) * rust_decimal::Decimal::TWO
/// );
/// ```
pub fn transportation_amount(platform: WorkPlatform, rates: &PayrollRates) -> Decimal {
    match platform {
        WorkPlatform::Office => rates.transportation_allowance_amount,
        WorkPlatform::Hybrid => rates.transportation_allowance_amount / Decimal::TWO,
        WorkPlatform::Remote => Decimal::ZERO,
    }
}

/// Calculates the transportation allowance.
pub fn calculate_transportation_allowance(
    platform: WorkPlatform,
    rates: &PayrollRates,
    step_number: u32,
) -> RuleResult {
    let amount = transportation_amount(platform, rates);

    let reasoning = match platform {
        WorkPlatform::Office => format!("Office worker - full allowance ${}", amount.normalize()),
        WorkPlatform::Hybrid => format!(
            "Hybrid worker - half of ${} = ${}",
            rates.transportation_allowance_amount.normalize(),
            amount.normalize()
        ),
        WorkPlatform::Remote => "Remote worker - no transportation allowance".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "transportation_allowance".to_string(),
        rule_name: "Transportation Allowance".to_string(),
        input: serde_json::json!({
            "work_platform": platform.as_str()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    RuleResult { amount, audit_step }
}
