//! Payroll result model.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// The outcome of one monthly payroll calculation.
///
/// A transient snapshot: recomputed on every request from the profile, the
/// month's attendance aggregate, and the month's variable pay, and never
/// cached as authoritative. All amounts are fixed-point money, rounded to
/// two decimal places at the calculation boundary, and satisfy
/// `net_salary == gross_salary - total_deductions` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Overtime pay at the statutory premium, computed on basic salary only.
    pub overtime_pay: Money,
    /// Deduction for absence and leave days at the daily rate.
    pub absence_deduction: Money,
    /// Fixed allowances plus this month's commission.
    pub total_allowances: Money,
    /// Basic salary plus total allowances plus overtime pay.
    pub gross_salary: Money,
    /// Absence deduction plus advances plus penalties.
    pub total_deductions: Money,
    /// Gross salary minus total deductions.
    pub net_salary: Money,
}
