//! Leave policy, exclusion periods, and the leave accrual result.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::money::Money;

/// The basis on which leave entitlement accrues over a service period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualBasis {
    /// Accrue per elapsed day: `counted_days / 365.25 x entitlement`.
    Daily,
    /// Accrue per whole calendar month: `months / 12 x entitlement`.
    Monthly,
}

/// Configuration for leave accrual.
///
/// An immutable value passed explicitly into every accrual calculation,
/// never ambient state. The [`Default`] implementation carries the
/// documented defaults: daily basis, weekends included, unpaid leave
/// excluded, 21 days/year before five years of service and 30 after.
///
/// # Example
///
/// ```
/// use comp_engine::models::{AccrualBasis, LeavePolicy};
///
/// let policy = LeavePolicy::default();
/// assert_eq!(policy.accrual_basis, AccrualBasis::Daily);
/// assert_eq!(policy.annual_entitlement_before_5y, 21);
/// assert_eq!(policy.annual_entitlement_after_5y, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Whether entitlement accrues daily or per calendar month.
    #[serde(default = "default_accrual_basis")]
    pub accrual_basis: AccrualBasis,
    /// When false, elapsed days are scaled by 5/7 to approximate working
    /// days.
    #[serde(default = "default_include_weekends")]
    pub include_weekends_in_accrual: bool,
    /// When true, days covered by exclusion periods are removed from the
    /// accrual window.
    #[serde(default = "default_exclude_unpaid_leave")]
    pub exclude_unpaid_leave_from_accrual: bool,
    /// Annual entitlement in days before five years of service.
    #[serde(default = "default_entitlement_before_5y")]
    pub annual_entitlement_before_5y: u32,
    /// Annual entitlement in days from five years of service onward.
    #[serde(default = "default_entitlement_after_5y")]
    pub annual_entitlement_after_5y: u32,
}

fn default_accrual_basis() -> AccrualBasis {
    AccrualBasis::Daily
}

fn default_include_weekends() -> bool {
    true
}

fn default_exclude_unpaid_leave() -> bool {
    true
}

fn default_entitlement_before_5y() -> u32 {
    21
}

fn default_entitlement_after_5y() -> u32 {
    30
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            accrual_basis: default_accrual_basis(),
            include_weekends_in_accrual: default_include_weekends(),
            exclude_unpaid_leave_from_accrual: default_exclude_unpaid_leave(),
            annual_entitlement_before_5y: default_entitlement_before_5y(),
            annual_entitlement_after_5y: default_entitlement_after_5y(),
        }
    }
}

/// Why a period is excluded from leave accrual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Unpaid leave.
    UnpaidLeave,
    /// Any other administratively excluded period.
    Other,
}

/// A date range removed from an employee's accrual window.
///
/// Day counts over the range follow the same convention as the accrual
/// window itself: the difference between the two dates, so the end date is
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedPeriod {
    /// First day of the excluded range.
    pub start: NaiveDate,
    /// End of the excluded range (exclusive).
    pub end: NaiveDate,
    /// Why the range is excluded.
    pub reason: ExclusionReason,
}

impl ExcludedPeriod {
    /// Creates an exclusion period, rejecting ranges whose start postdates
    /// their end.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] for a malformed range.
    pub fn new(start: NaiveDate, end: NaiveDate, reason: ExclusionReason) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end, reason })
    }

    /// Number of days this period overlaps the window
    /// `[window_start, window_end)`, clipped to the window.
    pub fn overlap_days(&self, window_start: NaiveDate, window_end: NaiveDate) -> i64 {
        let start = self.start.max(window_start);
        let end = self.end.min(window_end);
        if end > start {
            (end - start).num_days()
        } else {
            0
        }
    }
}

/// The inputs a leave accrual was computed from, retained verbatim for
/// audit even though the policy is a parameter rather than state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualBreakdown {
    /// Whole years of service at the period end, measured from hire.
    pub service_years: u32,
    /// The annual entitlement in days that applied.
    pub annual_entitlement: u32,
    /// Start of the accrual window.
    pub period_start: NaiveDate,
    /// End of the accrual window.
    pub period_end: NaiveDate,
    /// Days counted toward accrual after weekend scaling and exclusions.
    pub days_counted: Decimal,
    /// The policy the calculation ran under.
    pub policy: LeavePolicy,
}

/// The outcome of a leave accrual calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAccrualResult {
    /// Accrued leave days; fractional, never negative, stable at four
    /// decimal places.
    pub accrued_days: Decimal,
    /// Cash value of the accrued days at the 30-day day rate.
    pub monetary_value: Money,
    /// The calculation basis, kept for audit.
    pub breakdown: AccrualBreakdown,
}
