//! Leave accrual calculation.
//!
//! Computes the leave days an employee has accrued since hire (or since
//! the last leave settlement) under a [`LeavePolicy`], and the cash value
//! of that balance at the 30-day day rate.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AccrualBasis, AccrualBreakdown, Employee, LeaveAccrualResult, LeavePolicy};
use crate::money::Money;

use super::payroll::DAYS_PER_MONTH;

/// Length of an average year in days, leap years included.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(36525, 0, 0, false, 2);

/// Months in a year, for the monthly accrual basis.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Working days per week over days per week, approximating working days
/// when weekends are excluded from accrual.
const WORKDAY_NUMERATOR: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const WORKDAY_DENOMINATOR: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Scale at which fractional day counts are reported, so identical inputs
/// always produce byte-identical snapshots.
const DAY_SCALE: u32 = 4;

/// Whole calendar months elapsed between two dates.
///
/// Counts month boundaries crossed, minus one when the end day-of-month
/// has not yet reached the start day-of-month; never negative.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use comp_engine::calculation::calendar_months_between;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(calendar_months_between(start, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()), 1);
/// assert_eq!(calendar_months_between(start, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()), 2);
/// assert_eq!(calendar_months_between(start, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()), 12);
/// ```
pub fn calendar_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let months = i64::from(end.year() - start.year()) * 12
        + i64::from(end.month() as i32 - start.month() as i32);
    let adjusted = if end.day() < start.day() {
        months - 1
    } else {
        months
    };
    adjusted.max(0)
}

/// Calculates the employee's accrued leave balance and its cash value.
///
/// The accrual window runs from the hire date (or the last settlement
/// date, whichever is later) to `as_of`, which defaults to today. The day
/// count inside the window is shaped by the policy:
///
/// * weekends excluded: elapsed days are scaled by 5/7,
/// * unpaid leave excluded: days covered by the employee's exclusion
///   periods, clipped to the window, are subtracted (floored at zero).
///
/// The annual entitlement switches from the before-five-years figure to
/// the after-five-years figure once the employee has five whole years of
/// service at the window end, measured from hire. Under the daily basis
/// the counted days accrue against a 365.25-day year; under the monthly
/// basis whole calendar months accrue against a twelve-month year.
///
/// The result carries the full calculation basis for audit alongside the
/// numbers.
///
/// # Arguments
///
/// * `employee` - The employee snapshot, including exclusion periods
/// * `policy` - The accrual policy to apply
/// * `salary_basis` - Monthly salary basis for valuation (basic salary
///   plus fixed allowances; commission is excluded)
/// * `as_of` - The accrual cut-off date; `None` means today
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingHireDate`] when the
/// employee record has no hire date.
pub fn calculate_leave_accrual(
    employee: &Employee,
    policy: &LeavePolicy,
    salary_basis: Money,
    as_of: Option<NaiveDate>,
) -> EngineResult<LeaveAccrualResult> {
    let hire_date = employee.require_hire_date()?;
    let period_end = as_of.unwrap_or_else(|| Utc::now().date_naive());

    let period_start = match employee.last_settlement_date {
        Some(settled) if settled > hire_date => settled,
        _ => hire_date,
    };

    let raw_days = (period_end - period_start).num_days().max(0);
    let mut days_counted = Decimal::from(raw_days);

    if !policy.include_weekends_in_accrual {
        days_counted = days_counted * WORKDAY_NUMERATOR / WORKDAY_DENOMINATOR;
    }

    if policy.exclude_unpaid_leave_from_accrual {
        let excluded_days: i64 = employee
            .excluded_periods
            .iter()
            .map(|period| period.overlap_days(period_start, period_end))
            .sum();
        days_counted = (days_counted - Decimal::from(excluded_days)).max(Decimal::ZERO);
    }

    let service_days = (period_end - hire_date).num_days().max(0);
    let service_years = (Decimal::from(service_days) / DAYS_PER_YEAR)
        .floor()
        .to_u32()
        .unwrap_or_default();

    let annual_entitlement = if service_years >= 5 {
        policy.annual_entitlement_after_5y
    } else {
        policy.annual_entitlement_before_5y
    };

    let accrued_days = match policy.accrual_basis {
        AccrualBasis::Daily => {
            days_counted / DAYS_PER_YEAR * Decimal::from(annual_entitlement)
        }
        AccrualBasis::Monthly => {
            Decimal::from(calendar_months_between(period_start, period_end))
                / MONTHS_PER_YEAR
                * Decimal::from(annual_entitlement)
        }
    }
    .round_dp_with_strategy(DAY_SCALE, RoundingStrategy::MidpointAwayFromZero);

    let monetary_value = salary_basis.multiply(accrued_days / DAYS_PER_MONTH);

    debug!(
        employee_id = %employee.id,
        %period_start,
        %period_end,
        %accrued_days,
        value = %monetary_value,
        "calculated leave accrual"
    );

    Ok(LeaveAccrualResult {
        accrued_days,
        monetary_value,
        breakdown: AccrualBreakdown {
            service_years,
            annual_entitlement,
            period_start,
            period_end,
            days_counted: days_counted
                .round_dp_with_strategy(DAY_SCALE, RoundingStrategy::MidpointAwayFromZero),
            policy: *policy,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{EmployeeStatus, ExcludedPeriod, ExclusionReason};
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sar(s: &str) -> Money {
        Money::from_decimal(dec(s)).unwrap()
    }

    fn employee_hired(hire: NaiveDate) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            hire_date: Some(hire),
            status: EmployeeStatus::Active,
            last_settlement_date: None,
            excluded_periods: vec![],
        }
    }

    /// LA-001: thirty days of service accrues 30/365.25 of the entitlement
    #[test]
    fn test_daily_accrual_over_thirty_days() {
        let employee = employee_hired(date(2024, 1, 1));
        let result = calculate_leave_accrual(
            &employee,
            &LeavePolicy::default(),
            sar("3000"),
            Some(date(2024, 1, 31)),
        )
        .unwrap();

        // 30 / 365.25 x 21 = 1.7248 days; at a 100.00 day rate -> 172.48.
        assert_eq!(result.accrued_days, dec("1.7248"));
        assert_eq!(result.monetary_value, sar("172.48"));
        assert_eq!(result.breakdown.days_counted, dec("30.0000"));
        assert_eq!(result.breakdown.annual_entitlement, 21);
        assert_eq!(result.breakdown.service_years, 0);
    }

    /// LA-002: missing hire date is a validation error
    #[test]
    fn test_missing_hire_date_fails() {
        let mut employee = employee_hired(date(2024, 1, 1));
        employee.hire_date = None;

        let result = calculate_leave_accrual(
            &employee,
            &LeavePolicy::default(),
            sar("3000"),
            Some(date(2024, 6, 1)),
        );
        assert!(matches!(result, Err(EngineError::MissingHireDate { .. })));
    }

    /// LA-003: the window restarts at the last settlement date
    #[test]
    fn test_period_starts_at_last_settlement() {
        let mut employee = employee_hired(date(2017, 1, 1));
        employee.last_settlement_date = Some(date(2023, 12, 31));

        let result = calculate_leave_accrual(
            &employee,
            &LeavePolicy::default(),
            sar("3000"),
            Some(date(2024, 1, 31)),
        )
        .unwrap();

        assert_eq!(result.breakdown.period_start, date(2023, 12, 31));
        // Seven years of service: the 30-day entitlement applies.
        assert_eq!(result.breakdown.service_years, 7);
        assert_eq!(result.breakdown.annual_entitlement, 30);
        // 31 / 365.25 x 30 = 2.5462 days.
        assert_eq!(result.accrued_days, dec("2.5462"));
        assert_eq!(result.monetary_value, sar("254.62"));
    }

    /// LA-004: a settlement predating hire is ignored
    #[test]
    fn test_settlement_before_hire_is_ignored() {
        let mut employee = employee_hired(date(2024, 1, 1));
        employee.last_settlement_date = Some(date(2020, 1, 1));

        let result = calculate_leave_accrual(
            &employee,
            &LeavePolicy::default(),
            sar("3000"),
            Some(date(2024, 1, 31)),
        )
        .unwrap();

        assert_eq!(result.breakdown.period_start, date(2024, 1, 1));
    }

    /// LA-005: excluding weekends scales the day count by 5/7
    #[test]
    fn test_weekend_exclusion_scales_days() {
        let employee = employee_hired(date(2024, 1, 1));
        let policy = LeavePolicy {
            include_weekends_in_accrual: false,
            ..LeavePolicy::default()
        };

        let result =
            calculate_leave_accrual(&employee, &policy, sar("3000"), Some(date(2024, 1, 31)))
                .unwrap();

        // 30 x 5/7 = 21.4286 counted days; 21.4286 / 365.25 x 21 = 1.2320.
        assert_eq!(result.breakdown.days_counted, dec("21.4286"));
        assert_eq!(result.accrued_days, dec("1.2320"));
        assert_eq!(result.monetary_value, sar("123.20"));
    }

    /// LA-006: excluded periods are clipped and subtracted
    #[test]
    fn test_unpaid_leave_is_subtracted() {
        let mut employee = employee_hired(date(2024, 1, 1));
        employee.excluded_periods = vec![
            ExcludedPeriod::new(date(2024, 1, 10), date(2024, 1, 20), ExclusionReason::UnpaidLeave)
                .unwrap(),
        ];

        let result = calculate_leave_accrual(
            &employee,
            &LeavePolicy::default(),
            sar("3000"),
            Some(date(2024, 1, 31)),
        )
        .unwrap();

        // 30 - 10 = 20 counted days; 20 / 365.25 x 21 = 1.1499.
        assert_eq!(result.breakdown.days_counted, dec("20.0000"));
        assert_eq!(result.accrued_days, dec("1.1499"));
        assert_eq!(result.monetary_value, sar("114.99"));
    }

    /// LA-007: exclusions never push the day count below zero
    #[test]
    fn test_exclusions_floor_at_zero() {
        let mut employee = employee_hired(date(2024, 1, 1));
        employee.excluded_periods = vec![
            ExcludedPeriod::new(date(2023, 12, 1), date(2024, 6, 1), ExclusionReason::UnpaidLeave)
                .unwrap(),
        ];

        let result = calculate_leave_accrual(
            &employee,
            &LeavePolicy::default(),
            sar("3000"),
            Some(date(2024, 1, 31)),
        )
        .unwrap();

        assert_eq!(result.breakdown.days_counted, Decimal::ZERO);
        assert_eq!(result.accrued_days, Decimal::ZERO);
        assert_eq!(result.monetary_value, Money::ZERO);
    }

    /// LA-008: policy can disable the unpaid-leave exclusion
    #[test]
    fn test_exclusion_disabled_by_policy() {
        let mut employee = employee_hired(date(2024, 1, 1));
        employee.excluded_periods = vec![
            ExcludedPeriod::new(date(2024, 1, 10), date(2024, 1, 20), ExclusionReason::UnpaidLeave)
                .unwrap(),
        ];
        let policy = LeavePolicy {
            exclude_unpaid_leave_from_accrual: false,
            ..LeavePolicy::default()
        };

        let result =
            calculate_leave_accrual(&employee, &policy, sar("3000"), Some(date(2024, 1, 31)))
                .unwrap();

        assert_eq!(result.breakdown.days_counted, dec("30.0000"));
    }

    /// LA-009: monthly basis accrues by whole calendar months
    #[test]
    fn test_monthly_accrual_basis() {
        let employee = employee_hired(date(2023, 1, 15));
        let policy = LeavePolicy {
            accrual_basis: AccrualBasis::Monthly,
            ..LeavePolicy::default()
        };

        let result =
            calculate_leave_accrual(&employee, &policy, sar("3000"), Some(date(2024, 1, 15)))
                .unwrap();

        // Twelve whole months accrue the full 21-day entitlement.
        assert_eq!(result.accrued_days, dec("21.0000"));
        assert_eq!(result.monetary_value, sar("2100.00"));
    }

    /// LA-010: an as-of date before hire accrues nothing
    #[test]
    fn test_as_of_before_hire_accrues_nothing() {
        let employee = employee_hired(date(2024, 6, 1));

        let result = calculate_leave_accrual(
            &employee,
            &LeavePolicy::default(),
            sar("3000"),
            Some(date(2024, 1, 1)),
        )
        .unwrap();

        assert_eq!(result.accrued_days, Decimal::ZERO);
        assert_eq!(result.monetary_value, Money::ZERO);
    }

    /// LA-011: the breakdown snapshot retains the policy verbatim
    #[test]
    fn test_breakdown_retains_policy() {
        let employee = employee_hired(date(2024, 1, 1));
        let policy = LeavePolicy {
            annual_entitlement_before_5y: 15,
            ..LeavePolicy::default()
        };

        let result =
            calculate_leave_accrual(&employee, &policy, sar("3000"), Some(date(2024, 1, 31)))
                .unwrap();

        assert_eq!(result.breakdown.policy, policy);
        assert_eq!(result.breakdown.annual_entitlement, 15);
        assert_eq!(result.breakdown.period_end, date(2024, 1, 31));
    }

    #[test]
    fn test_calendar_months_between_same_day_of_month() {
        assert_eq!(
            calendar_months_between(date(2024, 1, 15), date(2024, 2, 15)),
            1
        );
    }

    #[test]
    fn test_calendar_months_between_day_not_reached() {
        assert_eq!(
            calendar_months_between(date(2024, 1, 15), date(2024, 3, 14)),
            1
        );
    }

    #[test]
    fn test_calendar_months_between_reversed_is_zero() {
        assert_eq!(
            calendar_months_between(date(2024, 6, 1), date(2024, 1, 1)),
            0
        );
    }
}
