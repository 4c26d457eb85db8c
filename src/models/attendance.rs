//! Attendance models.
//!
//! This module defines the per-day attendance record supplied by the
//! surrounding application and the per-month aggregate derived from it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recorded status of one attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked; hour fields are meaningful.
    Present,
    /// Unexcused absence.
    Absent,
    /// Sick leave.
    SickLeave,
    /// Annual (vacation) leave.
    AnnualLeave,
}

/// One employee's attendance record for a single calendar day.
///
/// A month's records may be sparse: a day with no record means "no data",
/// not absence, and contributes nothing to the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// The recorded status for the day.
    pub status: AttendanceStatus,
    /// Regular hours worked; only meaningful on present days.
    #[serde(default)]
    pub regular_hours: Option<Decimal>,
    /// Overtime hours worked; only meaningful on present days.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
}

/// Per-month attendance totals.
///
/// Derived data: always recomputed from the month's [`AttendanceDay`]
/// records, never persisted as a source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyAttendanceAggregate {
    /// Total regular hours over the month's present days.
    pub total_regular_hours: Decimal,
    /// Total overtime hours over the month's present days.
    pub total_overtime_hours: Decimal,
    /// Number of days recorded as absent.
    pub absent_days: u32,
    /// Number of days recorded as annual leave.
    pub annual_leave_days: u32,
    /// Number of days recorded as sick leave.
    pub sick_leave_days: u32,
}

impl MonthlyAttendanceAggregate {
    /// Total days away from work: absence plus both leave kinds. This is
    /// the day count the payroll calculator deducts at the daily rate.
    pub fn absence_days_total(&self) -> u32 {
        self.absent_days + self.annual_leave_days + self.sick_leave_days
    }
}
