//! Payroll Engine
//!
//! This crate derives an employee's net salary from tiered payroll rules:
//! basic pay, allowances, deductions, and tax brackets. The
//! [`processor::SalarySlipProcessor`] exposes each slip line individually
//! and as a complete salary slip with an audit trace.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod danger_zone;
pub mod error;
pub mod models;
pub mod processor;
