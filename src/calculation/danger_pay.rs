//! Danger pay calculation.
//!
//! Danger pay is granted either by the employee's explicit hazardous-duty
//! flag or by a danger-zone lookup on their duty station. The flag is
//! checked first and, when set, no lookup is made.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::PayrollRates;
use crate::danger_zone::DangerZoneService;
use crate::error::PayrollResult;
use crate::models::AuditStep;

use super::RuleResult;

/// How the danger pay decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DangerSource {
    Flag,
    Lookup,
    None,
}

impl DangerSource {
    fn as_str(&self) -> &'static str {
        match self {
            DangerSource::Flag => "flag",
            DangerSource::Lookup => "lookup",
            DangerSource::None => "none",
        }
    }
}

/// Calculates danger pay.
///
/// Returns `danger_pay_amount` when `is_danger` is set or the lookup reports
/// `duty_station` as a danger zone, otherwise zero. Without a lookup service
/// an unflagged employee receives nothing.
///
/// # Errors
///
/// Propagates any error returned by the danger-zone service unchanged.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_danger_pay;
/// use payroll_engine::config::PayrollRates;
/// use payroll_engine::danger_zone::StaticDangerZones;
///
/// let rates = PayrollRates::default();
/// let zones = StaticDangerZones::new(["Juba"]);
///
/// let result = calculate_danger_pay(false, "Juba", Some(&zones), &rates, 1)?;
/// assert_eq!(result.amount, rates.danger_pay_amount);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn calculate_danger_pay(
    is_danger: bool,
    duty_station: &str,
    danger_zones: Option<&dyn DangerZoneService>,
    rates: &PayrollRates,
    step_number: u32,
) -> PayrollResult<RuleResult> {
    let source = if is_danger {
        DangerSource::Flag
    } else {
        match danger_zones {
            Some(service) => {
                let in_zone = service.is_danger_zone(duty_station)?;
                debug!(duty_station, in_zone, "Danger zone lookup");
                if in_zone {
                    DangerSource::Lookup
                } else {
                    DangerSource::None
                }
            }
            None => {
                warn!(
                    duty_station,
                    "No danger zone service configured - assuming station is safe"
                );
                DangerSource::None
            }
        }
    };

    let amount = match source {
        DangerSource::Flag | DangerSource::Lookup => rates.danger_pay_amount,
        DangerSource::None => Decimal::ZERO,
    };

    let reasoning = match source {
        DangerSource::Flag => format!(
            "Employee is flagged for hazardous duty - ${}",
            amount.normalize()
        ),
        DangerSource::Lookup => format!(
            "Duty station '{}' is a danger zone - ${}",
            duty_station,
            amount.normalize()
        ),
        DangerSource::None => format!(
            "Duty station '{}' is not a danger zone - no danger pay",
            duty_station
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "danger_pay".to_string(),
        rule_name: "Danger Pay".to_string(),
        input: serde_json::json!({
            "is_danger": is_danger,
            "duty_station": duty_station,
            "lookup_available": danger_zones.is_some()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
            "source": source.as_str()
        }),
        reasoning,
    };

    Ok(RuleResult { amount, audit_step })
}
