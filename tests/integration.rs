//! Integration tests for the payroll engine.
//!
//! This test suite covers the observed salary slip scenarios:
//! - Basic salary
//! - Spouse and dependant allowances (including the cap)
//! - Danger pay by flag and by duty-station lookup
//! - Health insurance and transportation allowance
//! - Net salary of a fully populated employee
//! - Shipped configuration and JSON output
//! - Error cases

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use rust_decimal::Decimal;
use serde_json::Value;

use payroll_engine::config::{ConfigLoader, PayrollRates};
use payroll_engine::danger_zone::{DangerZoneService, StaticDangerZones};
use payroll_engine::error::{PayrollError, PayrollResult};
use payroll_engine::models::{
    Employee, EmployeeBuilder, HealthInsurancePackage, SlipCategory, WorkPlatform,
};
use payroll_engine::processor::SalarySlipProcessor;

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn rates() -> PayrollRates {
    PayrollRates::default()
}

fn processor_with_zones(stations: &[&str]) -> SalarySlipProcessor {
    let zones = StaticDangerZones::new(stations.iter().copied());
    SalarySlipProcessor::new(Some(Arc::new(zones)))
}

/// Lookup that fails for every station and counts how often it was asked.
struct UnavailableDangerZones {
    calls: AtomicUsize,
}

impl DangerZoneService for UnavailableDangerZones {
    fn is_danger_zone(&self, duty_station: &str) -> PayrollResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(PayrollError::DangerZoneLookup {
            duty_station: duty_station.to_string(),
            message: "connection refused".to_string(),
        })
    }
}

fn fully_populated_employee() -> Employee {
    EmployeeBuilder::new()
        .id(100)
        .name("Lindiwe")
        .duty_station("New York")
        .wage(decimal("5000"))
        .working_days(30)
        .married(true)
        .danger(true)
        .pension_plan(true)
        .health_insurance(Some(HealthInsurancePackage::Basic))
        .work_platform(WorkPlatform::Hybrid)
        .build()
}

// =============================================================================
// Line items
// =============================================================================

#[test]
fn test_basic_salary_from_wage_and_working_days() {
    let processor = SalarySlipProcessor::new(None);
    let employee = EmployeeBuilder::new()
        .wage(decimal("500"))
        .working_days(20)
        .build();

    assert_eq!(processor.basic_salary(Some(&employee)), Ok(decimal("10000")));
}

#[test]
fn test_spouse_allowance_depends_on_marital_status() {
    let processor = SalarySlipProcessor::new(None);
    let single = EmployeeBuilder::new().married(false).build();
    let married = EmployeeBuilder::new().married(true).build();

    assert_eq!(processor.spouse_allowance(Some(&single)), Ok(Decimal::ZERO));
    assert_eq!(
        processor.spouse_allowance(Some(&married)),
        Ok(rates().spouse_allowance_amount)
    );
}

#[test]
fn test_dependant_allowance_zero_scaled_and_capped() {
    let processor = SalarySlipProcessor::new(None);
    let rates = rates();

    let none = EmployeeBuilder::new().total_dependants(0).build();
    let some = EmployeeBuilder::new()
        .total_dependants(rates.max_dependants_factor - 2)
        .build();
    let many = EmployeeBuilder::new()
        .total_dependants(rates.max_dependants_factor + 10)
        .build();

    assert_eq!(processor.dependant_allowance(Some(&none)), Ok(Decimal::ZERO));
    assert_eq!(
        processor.dependant_allowance(Some(&some)),
        Ok(Decimal::from(rates.max_dependants_factor - 2)
            * rates.dependant_allowance_per_child_amount)
    );
    assert_eq!(
        processor.dependant_allowance(Some(&many)),
        Ok(rates.max_dependant_allowance_amount)
    );
}

#[test]
fn test_negative_dependants_rejected_while_negative_wage_accepted() {
    let processor = SalarySlipProcessor::new(None);

    let negative_dependants = EmployeeBuilder::new().total_dependants(-1).build();
    assert_eq!(
        processor.dependant_allowance(Some(&negative_dependants)),
        Err(PayrollError::InvalidDependantCount { count: -1 })
    );

    let negative_wage = EmployeeBuilder::new()
        .wage(decimal("-100"))
        .working_days(5)
        .build();
    assert_eq!(processor.basic_salary(Some(&negative_wage)), Ok(decimal("-500")));
    assert!(processor.net_salary(Some(&negative_wage)).is_ok());
}

#[test]
fn test_danger_pay_from_station_lookup() {
    let processor = processor_with_zones(&["Mogadishu"]);

    let in_zone = EmployeeBuilder::new().duty_station("Mogadishu").build();
    let safe = EmployeeBuilder::new().duty_station("Geneva").build();

    assert_eq!(
        processor.danger_pay(Some(&in_zone)),
        Ok(rates().danger_pay_amount)
    );
    assert_eq!(processor.danger_pay(Some(&safe)), Ok(Decimal::ZERO));
}

#[test]
fn test_danger_flag_wins_over_failing_lookup() {
    let zones = Arc::new(UnavailableDangerZones {
        calls: AtomicUsize::new(0),
    });
    let processor = SalarySlipProcessor::new(Some(zones.clone()));
    let employee = EmployeeBuilder::new()
        .duty_station("Geneva")
        .danger(true)
        .build();

    assert_eq!(
        processor.danger_pay(Some(&employee)),
        Ok(rates().danger_pay_amount)
    );
    assert_eq!(zones.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_lookup_failure_propagates_through_net_salary() {
    let zones = Arc::new(UnavailableDangerZones {
        calls: AtomicUsize::new(0),
    });
    let processor = SalarySlipProcessor::new(Some(zones.clone()));
    let employee = EmployeeBuilder::new().duty_station("Juba").build();

    assert_eq!(
        processor.net_salary(Some(&employee)),
        Err(PayrollError::DangerZoneLookup {
            duty_station: "Juba".to_string(),
            message: "connection refused".to_string(),
        })
    );
    assert_eq!(zones.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_health_insurance_by_package() {
    let processor = SalarySlipProcessor::new(None);
    let rates = rates();

    let cases = [
        (None, Decimal::ZERO),
        (Some(HealthInsurancePackage::Basic), rates.basic_health_care_amount),
        (Some(HealthInsurancePackage::Fair), rates.fair_health_care_amount),
        (Some(HealthInsurancePackage::Premium), rates.premium_health_care_amount),
    ];

    for (package, expected) in cases {
        let employee = EmployeeBuilder::new().health_insurance(package).build();
        assert_eq!(
            processor.health_insurance(Some(&employee)),
            Ok(expected),
            "package {:?}",
            package
        );
    }
}

#[test]
fn test_transportation_allowance_by_platform() {
    let processor = SalarySlipProcessor::new(None);
    let rates = rates();

    let office = EmployeeBuilder::new().work_platform(WorkPlatform::Office).build();
    let remote = EmployeeBuilder::new().work_platform(WorkPlatform::Remote).build();
    let hybrid = EmployeeBuilder::new().work_platform(WorkPlatform::Hybrid).build();

    assert_eq!(
        processor.transportation_allowance(Some(&office)),
        Ok(rates.transportation_allowance_amount)
    );
    assert_eq!(processor.transportation_allowance(Some(&remote)), Ok(Decimal::ZERO));
    assert_eq!(
        processor.transportation_allowance(Some(&hybrid)),
        Ok(rates.transportation_allowance_amount / decimal("2"))
    );
}

// =============================================================================
// Net salary and slip
// =============================================================================

#[test]
fn test_net_salary_equals_earnings_minus_deductions() {
    let processor = SalarySlipProcessor::new(None);
    let employee = fully_populated_employee();
    let e = Some(&employee);

    let total_earnings = processor.basic_salary(e).unwrap()
        + processor.transportation_allowance(e).unwrap()
        + processor.spouse_allowance(e).unwrap()
        + processor.danger_pay(e).unwrap()
        + processor.dependant_allowance(e).unwrap();
    let total_deductions = processor.pension(e).unwrap()
        + processor.health_insurance(e).unwrap()
        + processor.tax(e).unwrap();

    assert_eq!(processor.net_salary(e), Ok(total_earnings - total_deductions));
}

#[test]
fn test_salary_slip_lines_match_individual_methods() {
    let processor = processor_with_zones(&["Kabul"]);
    let employee = EmployeeBuilder::new()
        .id(5)
        .duty_station("Kabul")
        .wage(decimal("87.25"))
        .working_days(21)
        .total_dependants(3)
        .pension_plan(true)
        .health_insurance(Some(HealthInsurancePackage::Premium))
        .work_platform(WorkPlatform::Office)
        .build();
    let e = Some(&employee);

    let slip = processor.salary_slip(e).unwrap();

    assert_eq!(slip.line_amount(SlipCategory::BasicSalary), processor.basic_salary(e).ok());
    assert_eq!(slip.line_amount(SlipCategory::DangerPay), processor.danger_pay(e).ok());
    assert_eq!(
        slip.line_amount(SlipCategory::DependantAllowance),
        processor.dependant_allowance(e).ok()
    );
    assert_eq!(slip.line_amount(SlipCategory::Pension), processor.pension(e).ok());
    assert_eq!(slip.line_amount(SlipCategory::Tax), processor.tax(e).ok());
    assert_eq!(
        slip.totals.net_salary,
        slip.totals.total_earnings - slip.totals.total_deductions
    );
}

#[test]
fn test_salary_slip_serializes_to_json() {
    let processor = SalarySlipProcessor::new(None);
    let slip = processor.salary_slip(Some(&fully_populated_employee())).unwrap();

    let json: Value = serde_json::to_value(&slip).unwrap();

    assert_eq!(json["employee_id"], 100);
    assert_eq!(json["employee_name"], "Lindiwe");
    assert_eq!(json["earnings"][0]["category"], "basic_salary");
    assert_eq!(json["deductions"][2]["category"], "tax");
    assert_eq!(
        Decimal::from_str(json["totals"]["net_salary"].as_str().unwrap()).unwrap(),
        decimal("106400")
    );
    assert_eq!(json["audit_trace"]["steps"].as_array().unwrap().len(), 8);
    assert_eq!(json["audit_trace"]["steps"][3]["output"]["source"], "flag");
}

#[test]
fn test_employee_from_json_request_body() {
    let body = r#"{
        "id": 9,
        "name": "Oskar",
        "duty_station": "Juba",
        "wage": "250",
        "working_days": 10,
        "total_dependants": 1,
        "work_platform": "remote"
    }"#;
    let employee: Employee = serde_json::from_str(body).unwrap();
    let processor = processor_with_zones(&["Juba"]);

    // 2500 + 0 + 0 + 1000 + 100 - (0 + 0 + 2500 * 0.10)
    assert_eq!(processor.net_salary(Some(&employee)), Ok(decimal("3350")));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_processor_from_shipped_configuration() {
    let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
    let processor = SalarySlipProcessor::from_config(config);
    let employee = EmployeeBuilder::new().duty_station("Mogadishu").build();

    assert_eq!(processor.rates(), &PayrollRates::default());
    assert_eq!(
        processor.danger_pay(Some(&employee)),
        Ok(decimal("1000"))
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_processor_shared_across_threads() {
    let processor = Arc::new(processor_with_zones(&["Juba"]));

    let handles: Vec<_> = (1..=8)
        .map(|days| {
            let processor = Arc::clone(&processor);
            thread::spawn(move || {
                let employee = EmployeeBuilder::new()
                    .duty_station("Juba")
                    .wage(decimal("100"))
                    .working_days(days)
                    .build();
                processor.net_salary(Some(&employee)).unwrap()
            })
        })
        .collect();

    for (days, handle) in (1..=8).zip(handles) {
        let basic = decimal("100") * Decimal::from(days);
        // transport 400 + danger 1000, tax in the low bracket below 2000
        let expected = basic + decimal("1400") - basic * decimal("0.02");
        assert_eq!(handle.join().unwrap(), expected, "days {}", days);
    }
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_missing_employee_for_every_operation() {
    let processor = processor_with_zones(&["Juba"]);

    assert_eq!(processor.basic_salary(None), Err(PayrollError::MissingEmployee));
    assert_eq!(processor.spouse_allowance(None), Err(PayrollError::MissingEmployee));
    assert_eq!(processor.dependant_allowance(None), Err(PayrollError::MissingEmployee));
    assert_eq!(processor.pension(None), Err(PayrollError::MissingEmployee));
    assert_eq!(processor.tax(None), Err(PayrollError::MissingEmployee));
    assert_eq!(processor.danger_pay(None), Err(PayrollError::MissingEmployee));
    assert_eq!(processor.health_insurance(None), Err(PayrollError::MissingEmployee));
    assert_eq!(
        processor.transportation_allowance(None),
        Err(PayrollError::MissingEmployee)
    );
    assert_eq!(processor.net_salary(None), Err(PayrollError::MissingEmployee));
}
