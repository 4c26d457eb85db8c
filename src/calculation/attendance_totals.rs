//! Monthly attendance aggregation.
//!
//! Reduces a month's per-day attendance records into the totals the
//! payroll calculator consumes.

use rust_decimal::Decimal;

use crate::models::{AttendanceDay, AttendanceStatus, MonthlyAttendanceAggregate};

/// Aggregates one month of attendance records into per-month totals.
///
/// Regular and overtime hours accumulate only on `present` days; each
/// leave status increments its own day counter. The input may be sparse:
/// days without a record simply contribute nothing. This is a pure, total
/// function with no error cases.
///
/// # Arguments
///
/// * `days` - The month's attendance records for one employee
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use comp_engine::calculation::aggregate_month;
/// use comp_engine::models::{AttendanceDay, AttendanceStatus};
/// use rust_decimal::Decimal;
///
/// let days = vec![AttendanceDay {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     status: AttendanceStatus::Present,
///     regular_hours: Some(Decimal::new(8, 0)),
///     overtime_hours: Some(Decimal::new(2, 0)),
/// }];
///
/// let aggregate = aggregate_month(&days);
/// assert_eq!(aggregate.total_regular_hours, Decimal::new(8, 0));
/// assert_eq!(aggregate.total_overtime_hours, Decimal::new(2, 0));
/// assert_eq!(aggregate.absence_days_total(), 0);
/// ```
pub fn aggregate_month(days: &[AttendanceDay]) -> MonthlyAttendanceAggregate {
    let mut aggregate = MonthlyAttendanceAggregate::default();

    for day in days {
        match day.status {
            AttendanceStatus::Present => {
                aggregate.total_regular_hours += day.regular_hours.unwrap_or(Decimal::ZERO);
                aggregate.total_overtime_hours += day.overtime_hours.unwrap_or(Decimal::ZERO);
            }
            AttendanceStatus::Absent => aggregate.absent_days += 1,
            AttendanceStatus::AnnualLeave => aggregate.annual_leave_days += 1,
            AttendanceStatus::SickLeave => aggregate.sick_leave_days += 1,
        }
    }

    aggregate
}
