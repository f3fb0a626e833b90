//! Core data models for the payroll engine.
//!
//! This module contains the employee record, its fluent builder, and the
//! salary slip produced by the processor.

mod builder;
mod employee;
mod salary_slip;

pub use builder::EmployeeBuilder;
pub use employee::{Employee, HealthInsurancePackage, WorkPlatform};
pub use salary_slip::{AuditStep, AuditTrace, SalarySlip, SlipCategory, SlipLine, SlipTotals};
