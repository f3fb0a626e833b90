//! Default payroll rates and thresholds.
//!
//! These values seed [`PayrollRates::default`](super::PayrollRates). Every
//! rule reads its amounts from a rates table, never from these constants
//! directly, so a loaded configuration can replace any of them.

use rust_decimal::Decimal;

const fn amount(units: u32, scale: u32) -> Decimal {
    Decimal::from_parts(units, 0, 0, false, scale)
}

/// Flat allowance paid to married employees.
pub const SPOUSE_ALLOWANCE_AMOUNT: Decimal = amount(500, 0);

/// Dependant count above which the allowance stops scaling.
pub const MAX_DEPENDANTS_FACTOR: i32 = 5;

/// Allowance paid per dependant up to the factor.
pub const DEPENDANT_ALLOWANCE_PER_CHILD_AMOUNT: Decimal = amount(100, 0);

/// Flat allowance paid once the dependant count exceeds the factor.
pub const MAX_DEPENDANT_ALLOWANCE_AMOUNT: Decimal = amount(500, 0);

/// Share of basic salary contributed to the pension plan.
pub const PENSION_RATE: Decimal = amount(10, 2);

/// Inclusive lower bound of the medium tax bracket.
pub const LOW_SALARY_THRESHOLD: Decimal = amount(2000, 0);

/// Inclusive lower bound of the high tax bracket.
pub const MEDIUM_SALARY_THRESHOLD: Decimal = amount(10000, 0);

/// Tax factor below the low threshold.
pub const LOW_SALARY_TAX_FACTOR: Decimal = amount(2, 2);

/// Tax factor between the low and medium thresholds.
pub const MEDIUM_SALARY_TAX_FACTOR: Decimal = amount(10, 2);

/// Tax factor at or above the medium threshold.
pub const HIGH_SALARY_TAX_FACTOR: Decimal = amount(20, 2);

/// Hazardous duty compensation.
pub const DANGER_PAY_AMOUNT: Decimal = amount(1000, 0);

/// Premium for the basic health package.
pub const BASIC_HEALTH_CARE_AMOUNT: Decimal = amount(300, 0);

/// Premium for the fair health package.
pub const FAIR_HEALTH_CARE_AMOUNT: Decimal = amount(500, 0);

/// Premium for the premium health package.
pub const PREMIUM_HEALTH_CARE_AMOUNT: Decimal = amount(700, 0);

/// Full transportation allowance for office workers.
pub const TRANSPORTATION_ALLOWANCE_AMOUNT: Decimal = amount(400, 0);
