//! Employee model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ExcludedPeriod;

/// Employment status as tracked by the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed; settlements may be finalized.
    Active,
    /// Service ended; the terminal state.
    Terminated,
}

/// The caller-supplied snapshot of an employee.
///
/// The engine performs no I/O; the surrounding application reads this view
/// from its store and passes it in. The hire date is optional because
/// legacy records may lack one; every service-based calculation validates
/// it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee was hired, if on record.
    pub hire_date: Option<NaiveDate>,
    /// Current employment status.
    pub status: EmployeeStatus,
    /// The date of the employee's most recent leave settlement, if any.
    /// Accrual restarts from this date.
    #[serde(default)]
    pub last_settlement_date: Option<NaiveDate>,
    /// Date ranges excluded from leave accrual (e.g. unpaid leave).
    #[serde(default)]
    pub excluded_periods: Vec<ExcludedPeriod>,
}

impl Employee {
    /// Returns the hire date or the validation error for a record
    /// without one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingHireDate`] when no hire date is on
    /// record.
    pub fn require_hire_date(&self) -> EngineResult<NaiveDate> {
        self.hire_date.ok_or_else(|| EngineError::MissingHireDate {
            employee_id: self.id.clone(),
        })
    }

    /// Returns true if the employee is currently active.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            hire_date: Some(NaiveDate::from_ymd_opt(2019, 3, 1).unwrap()),
            status: EmployeeStatus::Active,
            last_settlement_date: None,
            excluded_periods: vec![],
        }
    }

    #[test]
    fn test_require_hire_date_returns_date() {
        let employee = sample_employee();
        assert_eq!(
            employee.require_hire_date().unwrap(),
            NaiveDate::from_ymd_opt(2019, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_require_hire_date_fails_without_one() {
        let mut employee = sample_employee();
        employee.hire_date = None;

        match employee.require_hire_date() {
            Err(EngineError::MissingHireDate { employee_id }) => {
                assert_eq!(employee_id, "emp_001");
            }
            other => panic!("Expected MissingHireDate, got {other:?}"),
        }
    }

    #[test]
    fn test_is_active() {
        let mut employee = sample_employee();
        assert!(employee.is_active());

        employee.status = EmployeeStatus::Terminated;
        assert!(!employee.is_active());
    }

    #[test]
    fn test_deserialization_defaults_optional_fields() {
        let json = r#"{
            "id": "emp_003",
            "hire_date": "2021-07-15",
            "status": "active"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.last_settlement_date.is_none());
        assert!(employee.excluded_periods.is_empty());
    }
}
