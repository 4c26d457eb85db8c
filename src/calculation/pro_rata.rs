//! Pro-rata salary for a partial first month.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::money::Money;

/// Calculates the salary owed for a month worked from `start_day` to the
/// end of the month.
///
/// Unlike the monthly payroll day rates, pro-rata pay divides by the
/// calendar month's actual length, so a mid-month hire is paid exactly the
/// fraction of the month worked.
///
/// # Arguments
///
/// * `monthly_salary` - The full salary for the month
/// * `start_day` - First worked day of the month (1-based)
/// * `days_in_month` - The calendar month's length
///
/// # Errors
///
/// * [`EngineError::InvalidMonthLength`] when `days_in_month` is not a
///   possible calendar month length (28-31).
/// * [`EngineError::DayOutOfRange`] when `start_day` falls outside
///   `1..=days_in_month`. A start day past the end of the month is a
///   caller bug and fails before any arithmetic runs.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::pro_rata_salary;
/// use comp_engine::money::Money;
///
/// let salary = Money::from_minor(300_000); // 3000.00
/// let pay = pro_rata_salary(salary, 16, 30).unwrap();
/// assert_eq!(pay, Money::from_minor(150_000)); // 1500.00
/// ```
pub fn pro_rata_salary(
    monthly_salary: Money,
    start_day: u32,
    days_in_month: u32,
) -> EngineResult<Money> {
    if !(28..=31).contains(&days_in_month) {
        return Err(EngineError::InvalidMonthLength { days_in_month });
    }
    if start_day < 1 || start_day > days_in_month {
        return Err(EngineError::DayOutOfRange {
            day: start_day,
            days_in_month,
        });
    }

    let worked_days = days_in_month - start_day + 1;
    Ok(monthly_salary.multiply(Decimal::from(worked_days) / Decimal::from(days_in_month)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// PRO-001: mid-month start pays exactly half
    #[test]
    fn test_mid_month_start() {
        let pay = pro_rata_salary(Money::from_minor(300_000), 16, 30).unwrap();
        assert_eq!(pay, Money::from_minor(150_000));
    }

    /// PRO-002: first-day start pays the full month
    #[test]
    fn test_first_day_pays_full_month() {
        let pay = pro_rata_salary(Money::from_minor(300_000), 1, 30).unwrap();
        assert_eq!(pay, Money::from_minor(300_000));
    }

    /// PRO-003: last-day start pays one day
    #[test]
    fn test_last_day_pays_one_day() {
        let pay = pro_rata_salary(Money::from_minor(300_000), 30, 30).unwrap();
        assert_eq!(pay, Money::from_minor(10_000));
    }

    /// PRO-004: start day past the end of the month is rejected
    #[test]
    fn test_start_day_past_month_end_is_rejected() {
        let result = pro_rata_salary(Money::from_minor(300_000), 31, 30);
        assert!(matches!(
            result,
            Err(EngineError::DayOutOfRange {
                day: 31,
                days_in_month: 30
            })
        ));
    }

    /// PRO-005: day zero is rejected
    #[test]
    fn test_day_zero_is_rejected() {
        let result = pro_rata_salary(Money::from_minor(300_000), 0, 30);
        assert!(matches!(result, Err(EngineError::DayOutOfRange { .. })));
    }

    /// PRO-006: impossible month lengths are rejected
    #[test]
    fn test_invalid_month_length_is_rejected() {
        assert!(matches!(
            pro_rata_salary(Money::from_minor(300_000), 1, 0),
            Err(EngineError::InvalidMonthLength { days_in_month: 0 })
        ));
        assert!(matches!(
            pro_rata_salary(Money::from_minor(300_000), 1, 32),
            Err(EngineError::InvalidMonthLength { days_in_month: 32 })
        ));
    }

    /// PRO-007: uneven fractions round half-up
    #[test]
    fn test_uneven_fraction_rounds_half_up() {
        // 3000 x 16/31 = 1548.387... -> 1548.39
        let pay = pro_rata_salary(Money::from_minor(300_000), 16, 31).unwrap();
        assert_eq!(pay, Money::from_minor(154_839));
    }
}
