//! Salary slip processor.
//!
//! [`SalarySlipProcessor`] is the entry point of the engine. It exposes one
//! method per slip line plus [`net_salary`](SalarySlipProcessor::net_salary)
//! and the full [`salary_slip`](SalarySlipProcessor::salary_slip) breakdown.
//!
//! Every method takes an `Option<&Employee>` and fails with
//! [`PayrollError::MissingEmployee`] before reading any field when it is
//! `None`.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    RuleResult, calculate_basic_salary, calculate_danger_pay, calculate_dependant_allowance,
    calculate_health_insurance, calculate_pension, calculate_spouse_allowance, calculate_tax,
    calculate_transportation_allowance,
};
use crate::config::{ConfigLoader, PayrollRates};
use crate::danger_zone::DangerZoneService;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AuditStep, AuditTrace, Employee, SalarySlip, SlipCategory, SlipLine, SlipTotals,
};

/// Step number used when a single line is calculated on its own.
const STANDALONE_STEP: u32 = 1;

/// Calculates salary slip lines for employees.
///
/// The processor is stateless apart from its read-only rates table and the
/// optional danger-zone service, so one instance can serve many threads.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EmployeeBuilder, WorkPlatform};
/// use payroll_engine::processor::SalarySlipProcessor;
/// use rust_decimal::Decimal;
///
/// let processor = SalarySlipProcessor::new(None);
/// let employee = EmployeeBuilder::new()
///     .wage(Decimal::from(500))
///     .working_days(20)
///     .work_platform(WorkPlatform::Remote)
///     .build();
///
/// assert_eq!(processor.basic_salary(Some(&employee))?, Decimal::from(10000));
/// assert!(processor.basic_salary(None).is_err());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Clone)]
pub struct SalarySlipProcessor {
    rates: PayrollRates,
    danger_zones: Option<Arc<dyn DangerZoneService>>,
}

impl fmt::Debug for SalarySlipProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SalarySlipProcessor")
            .field("rates", &self.rates)
            .field("danger_zones", &self.danger_zones.is_some())
            .finish()
    }
}

impl SalarySlipProcessor {
    /// Creates a processor using the default rates table.
    ///
    /// `danger_zones` may be `None` when every employee's danger flag is
    /// sufficient; unflagged employees then receive no danger pay.
    pub fn new(danger_zones: Option<Arc<dyn DangerZoneService>>) -> Self {
        Self::with_rates(PayrollRates::default(), danger_zones)
    }

    /// Creates a processor using the given rates table.
    pub fn with_rates(
        rates: PayrollRates,
        danger_zones: Option<Arc<dyn DangerZoneService>>,
    ) -> Self {
        Self {
            rates,
            danger_zones,
        }
    }

    /// Creates a processor from loaded configuration, using its configured
    /// danger zones as the lookup service.
    pub fn from_config(config: ConfigLoader) -> Self {
        let (rates, zones) = config.into_parts();
        Self::with_rates(rates, Some(Arc::new(zones)))
    }

    /// Returns the rates table this processor reads from.
    pub fn rates(&self) -> &PayrollRates {
        &self.rates
    }

    fn require(employee: Option<&Employee>) -> PayrollResult<&Employee> {
        employee.ok_or(PayrollError::MissingEmployee)
    }

    /// Returns `wage * working_days`.
    ///
    /// # Panics
    ///
    /// Panics if `wage * working_days` falls outside the range of [`Decimal`].
    pub fn basic_salary(&self, employee: Option<&Employee>) -> PayrollResult<Decimal> {
        let employee = Self::require(employee)?;
        Ok(calculate_basic_salary(employee.wage, employee.working_days, STANDALONE_STEP).amount)
    }

    /// Returns the spouse allowance, paid only to married employees.
    pub fn spouse_allowance(&self, employee: Option<&Employee>) -> PayrollResult<Decimal> {
        let employee = Self::require(employee)?;
        Ok(calculate_spouse_allowance(employee.is_married, &self.rates, STANDALONE_STEP).amount)
    }

    /// Returns the dependant allowance.
    ///
    /// # Errors
    ///
    /// Fails with [`PayrollError::InvalidDependantCount`] for a negative
    /// dependant count.
    pub fn dependant_allowance(&self, employee: Option<&Employee>) -> PayrollResult<Decimal> {
        let employee = Self::require(employee)?;
        calculate_dependant_allowance(employee.total_dependants, &self.rates, STANDALONE_STEP)
            .map(|r| r.amount)
    }

    /// Returns the pension deduction.
    ///
    /// # Panics
    ///
    /// Panics if basic salary or the deduction falls outside the range of [`Decimal`].
    pub fn pension(&self, employee: Option<&Employee>) -> PayrollResult<Decimal> {
        let employee = Self::require(employee)?;
        let basic = self.basic_salary(Some(employee))?;
        Ok(calculate_pension(employee.has_pension_plan, basic, &self.rates, STANDALONE_STEP).amount)
    }

    /// Returns the tiered tax on basic salary.
    ///
    /// # Panics
    ///
    /// Panics if basic salary or the deduction falls outside the range of [`Decimal`].
    pub fn tax(&self, employee: Option<&Employee>) -> PayrollResult<Decimal> {
        let basic = self.basic_salary(employee)?;
        Ok(calculate_tax(basic, &self.rates, STANDALONE_STEP).rule.amount)
    }

    /// Returns danger pay.
    ///
    /// The danger-zone service is only consulted when the employee's
    /// explicit flag is not set. Its errors are returned unchanged.
    pub fn danger_pay(&self, employee: Option<&Employee>) -> PayrollResult<Decimal> {
        let employee = Self::require(employee)?;
        calculate_danger_pay(
            employee.is_danger,
            &employee.duty_station,
            self.danger_zones.as_deref(),
            &self.rates,
            STANDALONE_STEP,
        )
        .map(|r| r.amount)
    }

    /// Returns the health insurance premium.
    pub fn health_insurance(&self, employee: Option<&Employee>) -> PayrollResult<Decimal> {
        let employee = Self::require(employee)?;
        Ok(calculate_health_insurance(
            employee.health_insurance_package,
            &self.rates,
            STANDALONE_STEP,
        )
        .amount)
    }

    /// Returns the transportation allowance for the employee's platform.
    pub fn transportation_allowance(&self, employee: Option<&Employee>) -> PayrollResult<Decimal> {
        let employee = Self::require(employee)?;
        Ok(
            calculate_transportation_allowance(employee.work_platform, &self.rates, STANDALONE_STEP)
                .amount,
        )
    }

    /// Returns total earnings minus total deductions.
    ///
    /// Equivalent to `salary_slip(employee)?.totals.net_salary`: each rule is
    /// applied once and the danger-zone service is consulted at most once.
    ///
    /// # Panics
    ///
    /// Panics if an amount or the net total falls outside the range of
    /// [`Decimal`].
    pub fn net_salary(&self, employee: Option<&Employee>) -> PayrollResult<Decimal> {
        Ok(self.salary_slip(employee)?.totals.net_salary)
    }

    /// Calculates the full salary slip with an audit trace.
    ///
    /// Earnings are basic salary, transportation allowance, spouse allowance,
    /// danger pay and dependant allowance. Deductions are pension, health
    /// insurance and tax. Basic salary is computed once and shared by the
    /// pension and tax rules.
    ///
    /// # Panics
    ///
    /// Panics if an amount or a total falls outside the range of [`Decimal`].
    pub fn salary_slip(&self, employee: Option<&Employee>) -> PayrollResult<SalarySlip> {
        let employee = Self::require(employee)?;
        let calculation_id = Uuid::new_v4();
        let start_time = Instant::now();

        let (earnings, deductions, steps) = match self.apply_rules(employee) {
            Ok(parts) => parts,
            Err(err) => {
                warn!(
                    calculation_id = %calculation_id,
                    employee_id = employee.id,
                    error = %err,
                    "Salary slip calculation failed"
                );
                return Err(err);
            }
        };

        let totals = SlipTotals::from_lines(&earnings, &deductions);
        let duration = start_time.elapsed();

        info!(
            calculation_id = %calculation_id,
            employee_id = employee.id,
            net_salary = %totals.net_salary,
            duration_us = duration.as_micros(),
            "Salary slip calculated"
        );

        Ok(SalarySlip {
            calculation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            earnings,
            deductions,
            totals,
            audit_trace: AuditTrace {
                steps,
                duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            },
        })
    }

    /// Applies every rule once, in slip order.
    fn apply_rules(
        &self,
        employee: &Employee,
    ) -> PayrollResult<(Vec<SlipLine>, Vec<SlipLine>, Vec<AuditStep>)> {
        let rates = &self.rates;
        let mut trail = RuleTrail::default();

        let basic = calculate_basic_salary(employee.wage, employee.working_days, trail.next_step());
        let basic_amount = basic.amount;
        let mut earnings = vec![trail.record(SlipCategory::BasicSalary, basic)];

        let transportation =
            calculate_transportation_allowance(employee.work_platform, rates, trail.next_step());
        earnings.push(trail.record(SlipCategory::TransportationAllowance, transportation));

        let spouse = calculate_spouse_allowance(employee.is_married, rates, trail.next_step());
        earnings.push(trail.record(SlipCategory::SpouseAllowance, spouse));

        let danger = calculate_danger_pay(
            employee.is_danger,
            &employee.duty_station,
            self.danger_zones.as_deref(),
            rates,
            trail.next_step(),
        )?;
        earnings.push(trail.record(SlipCategory::DangerPay, danger));

        let dependants =
            calculate_dependant_allowance(employee.total_dependants, rates, trail.next_step())?;
        earnings.push(trail.record(SlipCategory::DependantAllowance, dependants));

        let pension = calculate_pension(
            employee.has_pension_plan,
            basic_amount,
            rates,
            trail.next_step(),
        );
        let mut deductions = vec![trail.record(SlipCategory::Pension, pension)];

        let health = calculate_health_insurance(
            employee.health_insurance_package,
            rates,
            trail.next_step(),
        );
        deductions.push(trail.record(SlipCategory::HealthInsurance, health));

        let tax = calculate_tax(basic_amount, rates, trail.next_step());
        deductions.push(trail.record(SlipCategory::Tax, tax.rule));

        Ok((earnings, deductions, trail.steps))
    }
}

/// Collects audit steps while slip lines are produced.
#[derive(Default)]
struct RuleTrail {
    steps: Vec<AuditStep>,
}

impl RuleTrail {
    // A slip has eight rules, so the count always fits in u32.
    fn next_step(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    fn record(&mut self, category: SlipCategory, result: RuleResult) -> SlipLine {
        self.steps.push(result.audit_step);
        SlipLine::new(category, result.amount)
    }
}
