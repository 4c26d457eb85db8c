//! Error types for the compensation calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during compensation calculation
//! and settlement finalization.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the compensation calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Business
/// input errors (missing hire dates, malformed periods) are reported through
/// `Result`; only programmer-error preconditions fail fast.
///
/// # Example
///
/// ```
/// use comp_engine::error::EngineError;
///
/// let error = EngineError::MissingHireDate {
///     employee_id: "emp_001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee 'emp_001' has no hire date on record");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An employee record has no hire date, so no service-based
    /// calculation can be performed for it.
    #[error("Employee '{employee_id}' has no hire date on record")]
    MissingHireDate {
        /// The employee the calculation was requested for.
        employee_id: String,
    },

    /// A day-of-month fell outside the valid range for the month.
    #[error("Day {day} is outside the valid range 1..={days_in_month}")]
    DayOutOfRange {
        /// The offending day-of-month.
        day: u32,
        /// The number of days in the month being calculated.
        days_in_month: u32,
    },

    /// A month length that no calendar month can have.
    #[error("Invalid month length: {days_in_month} days")]
    InvalidMonthLength {
        /// The claimed number of days in the month.
        days_in_month: u32,
    },

    /// A date period whose start postdates its end.
    #[error("Invalid period: {start} is after {end}")]
    InvalidPeriod {
        /// The start of the malformed period.
        start: NaiveDate,
        /// The end of the malformed period.
        end: NaiveDate,
    },

    /// A decimal amount that cannot be represented as fixed-point money.
    #[error("Invalid monetary amount: {message}")]
    InvalidAmount {
        /// A description of what made the amount invalid.
        message: String,
    },

    /// Division of a monetary amount by zero.
    #[error("Division of a monetary amount by zero")]
    DivisionByZero,

    /// Leave policy file was not found at the specified path.
    #[error("Leave policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Leave policy file could not be parsed.
    #[error("Failed to parse leave policy file '{path}': {message}")]
    PolicyParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A settlement would move an employee through a state transition
    /// that is not allowed (e.g. terminating an already-terminated
    /// employee, or replaying an already-settled period).
    #[error("Invalid settlement transition for employee '{employee_id}': {message}")]
    InvalidTransition {
        /// The employee the settlement was for.
        employee_id: String,
        /// A description of why the transition was rejected.
        message: String,
    },

    /// An error raised by the settlement store while applying an intent.
    /// Store errors are propagated unchanged.
    #[error("Settlement store error: {message}")]
    Persistence {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
