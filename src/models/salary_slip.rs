//! Salary slip models for the payroll engine.
//!
//! This module contains the [`SalarySlip`] type and its associated structures
//! that capture all outputs of a slip calculation: earnings and deduction
//! lines, totals, and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of line on a salary slip.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SlipCategory;
///
/// assert!(SlipCategory::Tax.is_deduction());
/// assert!(!SlipCategory::DangerPay.is_deduction());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlipCategory {
    /// Wage multiplied by working days.
    BasicSalary,
    /// Commuting allowance by work platform.
    TransportationAllowance,
    /// Allowance for married employees.
    SpouseAllowance,
    /// Hazardous duty compensation.
    DangerPay,
    /// Allowance per dependant, capped.
    DependantAllowance,
    /// Pension contribution.
    Pension,
    /// Health insurance premium.
    HealthInsurance,
    /// Income tax.
    Tax,
}

impl SlipCategory {
    /// Returns true for lines subtracted from earnings.
    pub fn is_deduction(&self) -> bool {
        matches!(
            self,
            SlipCategory::Pension | SlipCategory::HealthInsurance | SlipCategory::Tax
        )
    }

    /// Returns the human-readable label for this line.
    pub fn description(&self) -> &'static str {
        match self {
            SlipCategory::BasicSalary => "Basic Salary",
            SlipCategory::TransportationAllowance => "Transportation Allowance",
            SlipCategory::SpouseAllowance => "Spouse Allowance",
            SlipCategory::DangerPay => "Danger Pay",
            SlipCategory::DependantAllowance => "Dependant Allowance",
            SlipCategory::Pension => "Pension",
            SlipCategory::HealthInsurance => "Health Insurance",
            SlipCategory::Tax => "Tax",
        }
    }
}

/// A single earnings or deduction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipLine {
    /// What this line pays or deducts.
    pub category: SlipCategory,
    /// Human-readable label.
    pub description: String,
    /// The line amount. Deductions are stored as positive values.
    pub amount: Decimal,
}

impl SlipLine {
    /// Creates a line labelled with the category description.
    pub fn new(category: SlipCategory, amount: Decimal) -> Self {
        Self {
            category,
            description: category.description().to_string(),
            amount,
        }
    }
}

/// Aggregated totals for a salary slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipTotals {
    /// Sum of all earnings lines.
    pub total_earnings: Decimal,
    /// Sum of all deduction lines.
    pub total_deductions: Decimal,
    /// Total earnings minus total deductions.
    pub net_salary: Decimal,
}

impl SlipTotals {
    /// Sums the given lines into totals.
    pub fn from_lines(earnings: &[SlipLine], deductions: &[SlipLine]) -> Self {
        let total_earnings: Decimal = earnings.iter().map(|l| l.amount).sum();
        let total_deductions: Decimal = deductions.iter().map(|l| l.amount).sum();
        Self {
            total_earnings,
            total_deductions,
            net_salary: total_earnings - total_deductions,
        }
    }
}

/// A single step in the audit trace recording a rule application.
///
/// Each step captures the input, output, and reasoning for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a slip calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a salary slip calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AuditTrace, SalarySlip, SlipCategory, SlipLine, SlipTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let earnings = vec![SlipLine::new(SlipCategory::BasicSalary, Decimal::from(10000))];
/// let deductions = vec![SlipLine::new(SlipCategory::Tax, Decimal::from(1000))];
/// let totals = SlipTotals::from_lines(&earnings, &deductions);
///
/// let slip = SalarySlip {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_id: 1,
///     employee_name: "Amina".to_string(),
///     earnings,
///     deductions,
///     totals,
///     audit_trace: AuditTrace { steps: vec![], duration_us: 0 },
/// };
/// assert_eq!(slip.totals.net_salary, Decimal::from(9000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySlip {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the slip is for.
    pub employee_id: i32,
    /// The name of the employee the slip is for.
    pub employee_name: String,
    /// Earnings lines in slip order.
    pub earnings: Vec<SlipLine>,
    /// Deduction lines in slip order.
    pub deductions: Vec<SlipLine>,
    /// Aggregated totals.
    pub totals: SlipTotals,
    /// Complete audit trace of rule decisions.
    pub audit_trace: AuditTrace,
}

impl SalarySlip {
    /// Returns the amount of the line with the given category, if present.
    pub fn line_amount(&self, category: SlipCategory) -> Option<Decimal> {
        self.earnings
            .iter()
            .chain(self.deductions.iter())
            .find(|l| l.category == category)
            .map(|l| l.amount)
    }
}
