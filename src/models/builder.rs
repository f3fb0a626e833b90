//! Fluent assembler for [`Employee`] values.

use rust_decimal::Decimal;

use super::employee::{Employee, HealthInsurancePackage, WorkPlatform};

/// Builds an [`Employee`] one field at a time.
///
/// Unset fields keep their defaults: zero for numbers, `false` for flags,
/// no health insurance package and [`WorkPlatform::Office`]. The builder
/// performs no validation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EmployeeBuilder, WorkPlatform};
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeBuilder::new()
///     .wage(Decimal::from(500))
///     .working_days(20)
///     .work_platform(WorkPlatform::Hybrid)
///     .build();
///
/// assert_eq!(employee.working_days, 20);
/// assert!(!employee.is_married);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeBuilder {
    employee: Employee,
}

impl EmployeeBuilder {
    /// Creates a builder with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the employee identifier.
    pub fn id(mut self, id: i32) -> Self {
        self.employee.id = id;
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.employee.name = name.into();
        self
    }

    /// Sets the duty station used for the danger-zone lookup.
    pub fn duty_station(mut self, duty_station: impl Into<String>) -> Self {
        self.employee.duty_station = duty_station.into();
        self
    }

    /// Sets the daily wage.
    pub fn wage(mut self, wage: Decimal) -> Self {
        self.employee.wage = wage;
        self
    }

    /// Sets the number of days worked in the period.
    pub fn working_days(mut self, days: i32) -> Self {
        self.employee.working_days = days;
        self
    }

    /// Sets the marital status.
    pub fn married(mut self, is_married: bool) -> Self {
        self.employee.is_married = is_married;
        self
    }

    /// Sets the dependant count.
    pub fn total_dependants(mut self, count: i32) -> Self {
        self.employee.total_dependants = count;
        self
    }

    /// Sets the explicit hazardous-duty flag.
    pub fn danger(mut self, is_danger: bool) -> Self {
        self.employee.is_danger = is_danger;
        self
    }

    /// Sets pension plan membership.
    pub fn pension_plan(mut self, has_pension_plan: bool) -> Self {
        self.employee.has_pension_plan = has_pension_plan;
        self
    }

    /// Sets the health insurance package. `None` removes coverage.
    pub fn health_insurance(mut self, package: Option<HealthInsurancePackage>) -> Self {
        self.employee.health_insurance_package = package;
        self
    }

    /// Sets the work platform.
    pub fn work_platform(mut self, platform: WorkPlatform) -> Self {
        self.employee.work_platform = platform;
        self
    }

    /// Returns the assembled employee.
    pub fn build(self) -> Employee {
        self.employee
    }
}
