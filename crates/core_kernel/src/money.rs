//! Money types with exact minor-unit arithmetic
//!
//! External amounts are two-fraction-digit decimals ([`Money`]), backed by
//! rust_decimal. Every split and running total is done on integer
//! minor units ([`Cents`]) so results are exact and reproducible; the
//! conversion back to [`Money`] only happens at the output boundary.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// Number of fraction digits carried by every external amount
pub const DECIMAL_PLACES: u32 = 2;

/// Minor units per major unit (cents per dollar)
pub const MINOR_PER_MAJOR: i64 = 100;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

/// An integer amount of minor units (cents)
///
/// Arithmetic saturates at the `i64` bounds instead of wrapping or panicking.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Returns the raw minor-unit count
    pub const fn value(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Converts back to a two-fraction-digit decimal amount
    pub fn to_money(self) -> Money {
        Money::from_cents(self)
    }

    /// Splits the amount into `parts` shares that sum exactly to the original.
    ///
    /// Each share is `floor(total / parts)`; the leftover `total mod parts`
    /// cents go one each to the leading shares, so the result depends only on
    /// position.
    pub fn allocate(self, parts: usize) -> Result<Vec<Cents>, MoneyError> {
        if parts == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        let n = i64::try_from(parts).map_err(|_| MoneyError::Overflow)?;

        let base = self.0.div_euclid(n);
        let remainder = self.0.rem_euclid(n);

        Ok((0..n)
            .map(|i| if i < remainder { Cents(base + 1) } else { Cents(base) })
            .collect())
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_money())
    }
}

impl From<i64> for Cents {
    fn from(minor_units: i64) -> Self {
        Self(minor_units)
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Cents {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Cents {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Cents {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, Add::add)
    }
}

/// A decimal monetary amount with exactly two fraction digits
///
/// Deserialisation goes through [`Money::new`], so values read from JSON are
/// rounded the same way as values built in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value, rounded half away from zero to two places
    pub fn new(amount: Decimal) -> Self {
        let mut amount =
            amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(DECIMAL_PLACES);
        Self { amount }
    }

    /// Creates Money from an integer amount of minor units
    pub fn from_cents(cents: Cents) -> Self {
        Self {
            amount: Decimal::new(cents.value(), DECIMAL_PLACES),
        }
    }

    /// Creates a strictly positive amount, as required for recorded events
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAmount`] if the rounded amount is zero or negative,
    /// and [`MoneyError::Overflow`] if it cannot be held as `i64` cents
    pub fn positive(amount: Decimal) -> Result<Self, MoneyError> {
        let money = Self::new(amount);
        if !money.is_positive() {
            return Err(MoneyError::InvalidAmount(format!(
                "amount must be greater than zero, got {}",
                money.amount
            )));
        }
        money.to_cents()?;
        Ok(money)
    }

    pub fn zero() -> Self {
        Self::from_cents(Cents::ZERO)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Converts to integer minor units
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the amount does not fit in `i64` cents
    pub fn to_cents(&self) -> Result<Cents, MoneyError> {
        self.amount
            .checked_mul(Decimal::from(MINOR_PER_MAJOR))
            .and_then(|minor| minor.round().to_i64())
            .map(Cents::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Converts to minor units, clamping to the `i64` range
    pub fn to_cents_saturating(&self) -> Cents {
        self.to_cents().unwrap_or(if self.is_negative() {
            Cents::new(i64::MIN)
        } else {
            Cents::new(i64::MAX)
        })
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.amount
    }
}

impl From<Cents> for Money {
    fn from(cents: Cents) -> Self {
        Self::from_cents(cents)
    }
}

/// Formats as en-US currency, e.g. `$1,234.56` or `-$7.50`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = format!("{:.2}", self.amount.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}${grouped}.{fraction}")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            amount: -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_rounds_to_two_places() {
        let m = Money::new(dec!(10.005));
        assert_eq!(m.amount(), dec!(10.01));
        assert_eq!(m.amount().scale(), 2);
    }

    #[test]
    fn test_positive_rejects_amounts_that_round_to_zero() {
        assert!(Money::positive(dec!(0.004)).is_err());
        assert!(Money::positive(dec!(-1)).is_err());
        assert_eq!(Money::positive(dec!(0.005)).unwrap().to_cents().unwrap(), Cents::new(1));
    }

    #[test]
    fn test_positive_rejects_amounts_beyond_cent_range() {
        assert_eq!(Money::positive(dec!(1000000000000000000)), Err(MoneyError::Overflow));
        assert!(Money::positive(dec!(92233720368547758.07)).is_ok());
        assert_eq!(Money::positive(dec!(92233720368547758.08)), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_money_to_cents() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.to_cents().unwrap(), Cents::new(10050));
    }

    #[test]
    fn test_cents_to_money_keeps_two_places() {
        let m = Cents::new(2000).to_money();
        assert_eq!(m.amount().to_string(), "20.00");
    }

    #[test]
    fn test_cents_allocation() {
        let parts = Cents::new(10000).allocate(3).unwrap();
        assert_eq!(parts, vec![Cents::new(3334), Cents::new(3333), Cents::new(3333)]);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::new(dec!(1234567.8)).to_string(), "$1,234,567.80");
        assert_eq!(Money::new(dec!(-7.5)).to_string(), "-$7.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn allocation_sum_equals_original(
            amount in -1_000_000_000i64..1_000_000_000i64,
            parts in 1usize..100usize
        ) {
            let total = Cents::new(amount);
            let shares = total.allocate(parts).unwrap();

            prop_assert_eq!(shares.len(), parts);
            prop_assert_eq!(shares.iter().copied().sum::<Cents>(), total);
        }

        #[test]
        fn cents_round_trip_through_money(amount in -1_000_000_000i64..1_000_000_000i64) {
            let cents = Cents::new(amount);
            prop_assert_eq!(cents.to_money().to_cents().unwrap(), cents);
        }
    }
}
