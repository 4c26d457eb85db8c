//! Monthly payroll calculation.
//!
//! Combines a compensation profile, a month's attendance aggregate, and
//! the month's variable pay into a [`PayrollResult`], following the fixed
//! 30-day-month payroll convention: every day rate divides by 30
//! regardless of the calendar month's actual length.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{CompensationProfile, MonthlyAttendanceAggregate, MonthlyVariablePay,
    PayrollResult};

/// The fixed month length used for every day-rate computation.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Contracted working hours per day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Statutory overtime premium multiplier (150%).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates one month of payroll.
///
/// The algorithm:
/// 1. `total_allowances` = the five fixed allowances + commission.
/// 2. `deductible_gross` = basic salary + total allowances.
/// 3. Overtime pay = overtime hours x hourly rate x 1.5, where the hourly
///    rate is the basic salary over 30 days of 8 hours. Overtime is
///    computed on basic salary only, never on allowances.
/// 4. Absence deduction = the daily rate of the deductible gross times the
///    total of absent, annual-leave, and sick-leave days.
/// 5. `gross_salary` = deductible gross + overtime pay.
/// 6. `total_deductions` = absence deduction + advances + penalties.
/// 7. `net_salary` = gross salary - total deductions, exactly.
///
/// Each derived amount is rounded half-up to the minor unit exactly once;
/// the additive identities hold exactly on the fixed-point representation,
/// so `net_salary == gross_salary - total_deductions` always.
///
/// This is a pure function over its inputs with no error cases: missing
/// variable-pay amounts are zero, and an empty attendance aggregate simply
/// yields no overtime and no absence deduction.
///
/// # Arguments
///
/// * `profile` - The employee's fixed compensation structure
/// * `attendance` - The month's attendance totals
/// * `variable` - The month's commission, advances, and penalties
pub fn calculate_payroll(
    profile: &CompensationProfile,
    attendance: &MonthlyAttendanceAggregate,
    variable: &MonthlyVariablePay,
) -> PayrollResult {
    let total_allowances = profile.allowances_total() + variable.commission;
    let deductible_gross = profile.basic_salary + total_allowances;

    // Overtime on basic salary only: hours x 1.5 / (30 x 8), one rounding.
    let overtime_factor =
        attendance.total_overtime_hours * OVERTIME_MULTIPLIER / (DAYS_PER_MONTH * HOURS_PER_DAY);
    let overtime_pay = profile.basic_salary.multiply(overtime_factor);

    let absence_days = Decimal::from(attendance.absence_days_total());
    let absence_deduction = deductible_gross.multiply(absence_days / DAYS_PER_MONTH);

    let gross_salary = deductible_gross + overtime_pay;
    let total_deductions = absence_deduction + variable.advances + variable.penalties;
    let net_salary = gross_salary - total_deductions;

    debug!(
        employee_id = %variable.employee_id,
        year = variable.year,
        month = variable.month,
        gross = %gross_salary,
        net = %net_salary,
        "calculated monthly payroll"
    );

    PayrollResult {
        overtime_pay,
        absence_deduction,
        total_allowances,
        gross_salary,
        total_deductions,
        net_salary,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::money::Money;
    use proptest::prelude::*;

    fn arbitrary_profile() -> impl Strategy<Value = CompensationProfile> {
        (
            0i64..5_000_000,
            0i64..1_000_000,
            0i64..1_000_000,
            0i64..500_000,
            0i64..200_000,
            0i64..200_000,
        )
            .prop_map(|(basic, housing, work_nature, transport, phone, food)| {
                CompensationProfile {
                    basic_salary: Money::from_minor(basic),
                    housing: Money::from_minor(housing),
                    work_nature: Money::from_minor(work_nature),
                    transport: Money::from_minor(transport),
                    phone: Money::from_minor(phone),
                    food: Money::from_minor(food),
                }
            })
    }

    fn arbitrary_variable_pay() -> impl Strategy<Value = MonthlyVariablePay> {
        (0i64..1_000_000, 0i64..1_000_000, 0i64..1_000_000).prop_map(
            |(commission, advances, penalties)| MonthlyVariablePay {
                commission: Money::from_minor(commission),
                advances: Money::from_minor(advances),
                penalties: Money::from_minor(penalties),
                ..MonthlyVariablePay::zero("emp_prop", 2024, 1)
            },
        )
    }

    proptest! {
        #[test]
        fn net_salary_identity_holds_exactly(
            profile in arbitrary_profile(),
            variable in arbitrary_variable_pay(),
            absent_days in 0u32..31,
            overtime_minutes in 0u32..6000,
        ) {
            let attendance = MonthlyAttendanceAggregate {
                total_overtime_hours: Decimal::new(i64::from(overtime_minutes), 2),
                absent_days,
                ..Default::default()
            };

            let result = calculate_payroll(&profile, &attendance, &variable);
            prop_assert_eq!(
                result.net_salary,
                result.gross_salary - result.total_deductions
            );
        }

        #[test]
        fn more_absence_never_raises_net_salary(
            profile in arbitrary_profile(),
            absent_days in 0u32..60,
        ) {
            let variable = MonthlyVariablePay::zero("emp_prop", 2024, 1);
            let base = MonthlyAttendanceAggregate {
                absent_days,
                ..Default::default()
            };
            let more = MonthlyAttendanceAggregate {
                absent_days: absent_days + 1,
                ..Default::default()
            };

            let net_base = calculate_payroll(&profile, &base, &variable).net_salary;
            let net_more = calculate_payroll(&profile, &more, &variable).net_salary;
            prop_assert!(net_more <= net_base);
        }

        #[test]
        fn repeated_calculation_is_deterministic(
            profile in arbitrary_profile(),
            variable in arbitrary_variable_pay(),
            absent_days in 0u32..31,
        ) {
            let attendance = MonthlyAttendanceAggregate {
                absent_days,
                ..Default::default()
            };

            let first = calculate_payroll(&profile, &attendance, &variable);
            let second = calculate_payroll(&profile, &attendance, &variable);
            prop_assert_eq!(first, second);
        }
    }
}
