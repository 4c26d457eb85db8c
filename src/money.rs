//! Fixed-point money arithmetic.
//!
//! This module provides the [`Money`] type: a currency amount stored as an
//! integer count of minor units (hundredths, i.e. halalas). All monetary
//! arithmetic after entry happens on the integer representation; decimal
//! values appear only at the input/output boundary. Floating point never
//! touches a monetary quantity.
//!
//! Every operation that can produce a fractional minor-unit result rounds
//! **half-up** to the nearest minor unit, matching the rounding rule of the
//! payroll regulations this engine implements.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// A monetary amount stored as an integer count of minor units.
///
/// Two minor-unit digits are assumed (hundredths), so `Money::from_minor(100)`
/// is one whole currency unit. Addition and subtraction are exact integer
/// arithmetic; scalar multiplication and division round half-up once per
/// operation, so callers control precision by fusing factors into a single
/// call (e.g. `gross.multiply(days / dec!(30))` rounds exactly once).
///
/// # Example
///
/// ```
/// use comp_engine::money::Money;
///
/// let salary = Money::from_minor(425_000); // 4250.00
/// assert_eq!(salary.to_decimal().to_string(), "4250.00");
/// assert_eq!(salary + Money::from_minor(50), Money::from_minor(425_050));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates a Money value from an integer count of minor units.
    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Converts a decimal currency amount into fixed-point money,
    /// rounding half-up to the nearest minor unit.
    ///
    /// This is the only sanctioned entry point for decimal amounts; all
    /// further arithmetic stays on the integer representation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmount`] when the amount does not fit
    /// in the minor-unit range.
    pub fn from_decimal(amount: Decimal) -> EngineResult<Self> {
        let minor = (amount * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        minor
            .to_i64()
            .map(Money)
            .ok_or_else(|| EngineError::InvalidAmount {
                message: format!("{amount} does not fit in the minor-unit range"),
            })
    }

    /// Returns the amount as a decimal with exactly two decimal places.
    ///
    /// The scale is fixed, so repeated conversions of equal amounts are
    /// byte-identical when formatted.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the raw count of minor units.
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is negative.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition on minor units.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmount`] on overflow.
    pub fn checked_add(self, other: Money) -> EngineResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| EngineError::InvalidAmount {
                message: "overflow in monetary addition".to_string(),
            })
    }

    /// Checked subtraction on minor units.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmount`] on overflow.
    pub fn checked_sub(self, other: Money) -> EngineResult<Money> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or_else(|| EngineError::InvalidAmount {
                message: "overflow in monetary subtraction".to_string(),
            })
    }

    /// Multiplies the amount by a decimal scalar, rounding half-up to the
    /// nearest minor unit.
    ///
    /// The factor carries full decimal precision, so rate arithmetic like
    /// `hours × 1.5 ÷ 240` should be folded into the factor and applied in
    /// a single call; each call rounds exactly once.
    ///
    /// # Panics
    ///
    /// Panics if the product leaves the representable minor-unit range.
    /// Amounts that large are far outside any payroll input and indicate a
    /// caller bug.
    pub fn multiply(&self, factor: Decimal) -> Money {
        let product = Decimal::from(self.0) * factor;
        let rounded = product.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Money(
            rounded
                .to_i64()
                .expect("monetary product exceeds the minor-unit range"),
        )
    }

    /// Divides the amount by an integer, rounding half-up to the nearest
    /// minor unit.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] when `divisor` is zero.
    pub fn divide_by(&self, divisor: i64) -> EngineResult<Money> {
        if divisor == 0 {
            return Err(EngineError::DivisionByZero);
        }
        let quotient = Decimal::from(self.0) / Decimal::from(divisor);
        let rounded = quotient.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // |divisor| >= 1, so the quotient always fits back into i64.
        Ok(Money(rounded.to_i64().unwrap_or(self.0)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(other)
            .expect("overflow in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(other)
            .expect("overflow in Money::sub")
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_decimal().to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let amount = Decimal::from_str(&text).map_err(|e| {
            serde::de::Error::custom(format!("invalid monetary amount '{text}': {e}"))
        })?;
        Money::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}
