use serde::{Deserialize, Serialize};
use std::fmt;

/// Money amount in cents (avoids floating point drift in order totals).
///
/// Signed so that a negative price can be represented and rejected by validation
/// instead of wrapping. There are no arithmetic operators: every sum goes through the
/// `checked_*` methods, and callers decide what an overflow means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new money amount from cents
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a money amount from whole dollars, `None` if it does not fit in cents
    #[must_use]
    pub const fn checked_from_dollars(dollars: i64) -> Option<Self> {
        match dollars.checked_mul(100) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Returns the value in cents
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Subtracts two money amounts with overflow checking
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Sums `amounts`, `None` as soon as the running total overflows.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, Money::checked_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Money::from_cents(1250).to_string(), "$12.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::checked_from_dollars(3).unwrap().to_string(), "$3.00");
        assert_eq!(Money::from_cents(-199).to_string(), "-$1.99");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_sum_is_exact() {
        // 0.10 ten times is exactly 1.00 in cents, unlike f64.
        let total = Money::checked_sum(std::iter::repeat(Money::from_cents(10)).take(10));
        assert_eq!(total, Money::checked_from_dollars(1));
        assert_eq!(
            Money::from_cents(750).checked_sub(Money::from_cents(500)),
            Some(Money::from_cents(250))
        );
    }

    #[test]
    fn test_overflow_is_reported_not_wrapped() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::checked_sum([Money::from_cents(1), max]), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(Money::checked_from_dollars(i64::MAX / 10), None);
        assert_eq!(Money::checked_sum(std::iter::empty()), Some(Money::ZERO));
    }
}
