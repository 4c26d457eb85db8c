//! Compensation profile and variable monthly pay models.
//!
//! This module defines the fixed salary structure of an employee and the
//! per-month variable pay items that are merged in at calculation time.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// The fixed monthly compensation structure of an employee.
///
/// All six components are monetary amounts at minor-unit granularity. The
/// profile is mutated only by administrative edits; the calculators treat
/// it as read-only input.
///
/// # Example
///
/// ```
/// use comp_engine::models::CompensationProfile;
/// use comp_engine::money::Money;
///
/// let profile = CompensationProfile {
///     basic_salary: Money::from_minor(300_000),
///     housing: Money::from_minor(50_000),
///     work_nature: Money::from_minor(30_000),
///     transport: Money::from_minor(20_000),
///     phone: Money::from_minor(10_000),
///     food: Money::from_minor(15_000),
/// };
/// assert_eq!(profile.allowances_total(), Money::from_minor(125_000));
/// assert_eq!(profile.salary_basis(), Money::from_minor(425_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// The basic monthly salary. Overtime is computed on this alone.
    pub basic_salary: Money,
    /// Housing allowance.
    pub housing: Money,
    /// Work-nature allowance.
    pub work_nature: Money,
    /// Transport allowance.
    pub transport: Money,
    /// Phone allowance.
    pub phone: Money,
    /// Food allowance.
    pub food: Money,
}

impl CompensationProfile {
    /// Sums the five fixed allowances (housing, work nature, transport,
    /// phone, food). Commission is variable pay and is not part of the
    /// profile.
    pub fn allowances_total(&self) -> Money {
        self.housing + self.work_nature + self.transport + self.phone + self.food
    }

    /// The monthly salary basis used by leave valuation and end-of-service
    /// gratuity: basic salary plus the five fixed allowances.
    pub fn salary_basis(&self) -> Money {
        self.basic_salary + self.allowances_total()
    }
}

/// Variable pay items for one employee-month.
///
/// Scoped to `(employee_id, year, month)` and independent of the
/// compensation profile; the payroll calculator merges the amounts in at
/// calculation time. Missing amounts default to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyVariablePay {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The payroll year.
    pub year: i32,
    /// The payroll month (1-12).
    pub month: u32,
    /// Commission earned this month; added to the allowance total.
    #[serde(default)]
    pub commission: Money,
    /// Salary advances to recover this month; deducted.
    #[serde(default)]
    pub advances: Money,
    /// Penalties imposed this month; deducted.
    #[serde(default)]
    pub penalties: Money,
}

impl MonthlyVariablePay {
    /// A record with no variable pay for the given employee-month.
    pub fn zero(employee_id: impl Into<String>, year: i32, month: u32) -> Self {
        Self {
            employee_id: employee_id.into(),
            year,
            month,
            commission: Money::ZERO,
            advances: Money::ZERO,
            penalties: Money::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> CompensationProfile {
        CompensationProfile {
            basic_salary: Money::from_minor(300_000),
            housing: Money::from_minor(50_000),
            work_nature: Money::from_minor(30_000),
            transport: Money::from_minor(20_000),
            phone: Money::from_minor(10_000),
            food: Money::from_minor(15_000),
        }
    }

    #[test]
    fn test_allowances_total_excludes_basic_salary() {
        assert_eq!(sample_profile().allowances_total(), Money::from_minor(125_000));
    }

    #[test]
    fn test_salary_basis_is_basic_plus_allowances() {
        assert_eq!(sample_profile().salary_basis(), Money::from_minor(425_000));
    }

    #[test]
    fn test_variable_pay_zero_record() {
        let pay = MonthlyVariablePay::zero("emp_001", 2024, 6);
        assert_eq!(pay.employee_id, "emp_001");
        assert!(pay.commission.is_zero());
        assert!(pay.advances.is_zero());
        assert!(pay.penalties.is_zero());
    }

    #[test]
    fn test_variable_pay_missing_fields_deserialize_to_zero() {
        let json = r#"{
            "employee_id": "emp_002",
            "year": 2024,
            "month": 3,
            "commission": "150.00"
        }"#;

        let pay: MonthlyVariablePay = serde_json::from_str(json).unwrap();
        assert_eq!(pay.commission, Money::from_minor(15_000));
        assert!(pay.advances.is_zero());
        assert!(pay.penalties.is_zero());
    }

    #[test]
    fn test_profile_serialization_round_trip() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"basic_salary\":\"3000.00\""));

        let back: CompensationProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
