//! End-of-service gratuity calculation.
//!
//! Computes the statutory end-of-service award from the service duration
//! and the termination reason, and settles the accrued leave balance on
//! top of it.
//!
//! ## Award structure
//!
//! The base gratuity earns half a month's salary per year for the first
//! five years and a full month's salary per year beyond them. The
//! termination reason then scales the award:
//!
//! * resignation: nothing under two years, one third from two years,
//!   two thirds from five, the full gratuity from ten,
//! * employer termination (Art. 77), employee termination (Art. 81), and
//!   force majeure: the full gratuity,
//! * termination for cause (Art. 80): nothing.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EndOfServiceResult, LeaveAccrualResult, TerminationReason};
use crate::money::Money;

use super::leave_accrual::DAYS_PER_YEAR;

const TWO_YEARS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
const FIVE_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const TEN_YEARS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Scale at which the service duration is reported.
const YEAR_SCALE: u32 = 4;

/// The gratuity earned over the full service period, before the
/// termination-reason schedule is applied.
///
/// Half a month's salary per year for the first five years, a full month
/// per year after them. Exactly five years of service earns the
/// proportional five half-months and nothing at the full-month rate; only
/// strictly more than five years reaches the second tier.
///
/// # Arguments
///
/// * `salary_basis` - The monthly salary basis (basic plus fixed allowances)
/// * `service_years` - Service duration in fractional years
///
/// # Errors
///
/// Propagates the division error from an impossible salary split; this
/// cannot occur for the fixed divisor used here.
pub fn base_gratuity(salary_basis: Money, service_years: Decimal) -> EngineResult<Money> {
    let half_month = salary_basis.divide_by(2)?;

    let base = if service_years > FIVE_YEARS {
        half_month.multiply(FIVE_YEARS) + salary_basis.multiply(service_years - FIVE_YEARS)
    } else {
        half_month.multiply(service_years)
    };

    Ok(base)
}

/// Applies the termination-reason schedule to a base gratuity.
///
/// The returned award never exceeds the base gratuity.
///
/// # Arguments
///
/// * `base` - The base gratuity earned over the service period
/// * `service_years` - Service duration in fractional years
/// * `reason` - Why the employment ended
///
/// # Errors
///
/// Propagates the division error from the tier fractions; this cannot
/// occur for the fixed divisors used here.
pub fn termination_award(
    base: Money,
    service_years: Decimal,
    reason: TerminationReason,
) -> EngineResult<Money> {
    let award = match reason {
        TerminationReason::Resignation => {
            if service_years < TWO_YEARS {
                // A resigning employee earns nothing under two years of
                // service.
                Money::ZERO
            } else if service_years < FIVE_YEARS {
                base.divide_by(3)?
            } else if service_years < TEN_YEARS {
                base.multiply(Decimal::TWO).divide_by(3)?
            } else {
                base
            }
        }
        TerminationReason::EmployerTerminationArt77
        | TerminationReason::EmployeeTerminationArt81
        | TerminationReason::ForceMajeure => base,
        TerminationReason::TerminationArt80 => Money::ZERO,
    };

    Ok(award)
}

/// Calculates the full end-of-service settlement.
///
/// Measures the service duration from hire to the last day of work in
/// 365.25-day years, derives the base gratuity and the reason-scaled
/// award, and adds the cash value of the supplied leave balance.
///
/// The leave balance is computed by the caller via
/// [`super::calculate_leave_accrual`]; which accrual cut-off date feeds it
/// (the current date or the last day of work) is the caller's decision.
///
/// # Arguments
///
/// * `employee` - The employee snapshot
/// * `last_day_of_work` - The final day of service
/// * `reason` - Why the employment ended
/// * `salary_basis` - Monthly salary basis (basic plus fixed allowances;
///   commission is excluded)
/// * `leave_balance` - The accrued leave balance to settle alongside
///
/// # Errors
///
/// * [`EngineError::MissingHireDate`] when the employee has no hire date.
/// * [`EngineError::InvalidPeriod`] when the last day of work predates the
///   hire date.
pub fn calculate_end_of_service(
    employee: &Employee,
    last_day_of_work: NaiveDate,
    reason: TerminationReason,
    salary_basis: Money,
    leave_balance: &LeaveAccrualResult,
) -> EngineResult<EndOfServiceResult> {
    let hire_date = employee.require_hire_date()?;
    if last_day_of_work < hire_date {
        return Err(EngineError::InvalidPeriod {
            start: hire_date,
            end: last_day_of_work,
        });
    }

    let service_days = (last_day_of_work - hire_date).num_days();
    let service_years = Decimal::from(service_days) / DAYS_PER_YEAR;

    let base = base_gratuity(salary_basis, service_years)?;
    let final_gratuity = termination_award(base, service_years, reason)?;

    let leave_balance_value = leave_balance.monetary_value;
    let total_amount = final_gratuity + leave_balance_value;

    debug!(
        employee_id = %employee.id,
        ?reason,
        %service_years,
        base = %base,
        award = %final_gratuity,
        total = %total_amount,
        "calculated end-of-service settlement"
    );

    Ok(EndOfServiceResult {
        service_duration_years: service_years
            .round_dp_with_strategy(YEAR_SCALE, RoundingStrategy::MidpointAwayFromZero),
        base_gratuity: base,
        final_gratuity,
        leave_balance_value,
        total_amount,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_reason() -> impl Strategy<Value = TerminationReason> {
        prop_oneof![
            Just(TerminationReason::Resignation),
            Just(TerminationReason::EmployerTerminationArt77),
            Just(TerminationReason::EmployeeTerminationArt81),
            Just(TerminationReason::ForceMajeure),
            Just(TerminationReason::TerminationArt80),
        ]
    }

    proptest! {
        #[test]
        fn final_gratuity_never_exceeds_base(
            salary_minor in 1i64..5_000_000,
            service_days in 0i64..15_000,
            reason in any_reason(),
        ) {
            let salary = Money::from_minor(salary_minor);
            let years = Decimal::from(service_days) / DAYS_PER_YEAR;

            let base = base_gratuity(salary, years).unwrap();
            let award = termination_award(base, years, reason).unwrap();
            prop_assert!(award <= base);
        }

        #[test]
        fn base_gratuity_grows_with_service(
            salary_minor in 1i64..5_000_000,
            service_days in 0i64..15_000,
        ) {
            let salary = Money::from_minor(salary_minor);
            let shorter = Decimal::from(service_days) / DAYS_PER_YEAR;
            let longer = Decimal::from(service_days + 30) / DAYS_PER_YEAR;

            let base_shorter = base_gratuity(salary, shorter).unwrap();
            let base_longer = base_gratuity(salary, longer).unwrap();
            prop_assert!(base_shorter <= base_longer);
        }
    }
}
