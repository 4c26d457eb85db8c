//! Calculation logic for the compensation engine.
//!
//! This module contains the calculators: monthly attendance aggregation,
//! the fixed 30-day-month payroll calculation, pro-rata first-month
//! salary, leave accrual under a policy, and the end-of-service gratuity
//! with its termination-reason schedule.

mod attendance_totals;
mod end_of_service;
mod leave_accrual;
mod payroll;
mod pro_rata;

pub use attendance_totals::aggregate_month;
pub use end_of_service::{base_gratuity, calculate_end_of_service, termination_award};
pub use leave_accrual::{DAYS_PER_YEAR, calculate_leave_accrual, calendar_months_between};
pub use payroll::{DAYS_PER_MONTH, HOURS_PER_DAY, OVERTIME_MULTIPLIER, calculate_payroll};
pub use pro_rata::pro_rata_salary;
