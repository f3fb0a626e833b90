//! Health insurance premium calculation.

use rust_decimal::Decimal;

use crate::config::PayrollRates;
use crate::models::{AuditStep, HealthInsurancePackage};

use super::RuleResult;

/// Maps a health insurance package to its premium.
///
/// No package means no coverage and a zero premium.
pub fn health_insurance_amount(
    package: Option<HealthInsurancePackage>,
    rates: &PayrollRates,
) -> Decimal {
    match package {
        None => Decimal::ZERO,
        Some(HealthInsurancePackage::Basic) => rates.basic_health_care_amount,
        Some(HealthInsurancePackage::Fair) => rates.fair_health_care_amount,
        Some(HealthInsurancePackage::Premium) => rates.premium_health_care_amount,
    }
}

/// Calculates the health insurance deduction.
pub fn calculate_health_insurance(
    package: Option<HealthInsurancePackage>,
    rates: &PayrollRates,
    step_number: u32,
) -> RuleResult {
    let amount = health_insurance_amount(package, rates);
    let package_name = package.map(|p| p.as_str());

    let reasoning = match package_name {
        Some(name) => format!("{} package premium ${}", name, amount.normalize()),
        None => "No health insurance package - no premium".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "health_insurance".to_string(),
        rule_name: "Health Insurance".to_string(),
        input: serde_json::json!({
            "package": package_name
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    RuleResult { amount, audit_step }
}
