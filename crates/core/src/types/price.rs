//! Whole-unit KRW price type.
//!
//! The CODI-IT backend quotes all prices in whole won. KRW has no minor
//! unit, so amounts are plain integers and sums never need rounding.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A price in whole Korean won.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-won amount.
    #[must_use]
    pub const fn won(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole won.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Multiply a unit price by a quantity.
    ///
    /// Saturates at `i64::MAX` rather than overflowing.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }

    /// Format for display with thousands separators (e.g., "12,500원").
    #[must_use]
    pub fn display(self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i).is_multiple_of(3) {
                grouped.push(',');
            }
            grouped.push(c);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{sign}{grouped}원")
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::won(1000).times(2), Price::won(500).times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::won(2500));
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::won(0).display(), "0원");
        assert_eq!(Price::won(999).display(), "999원");
        assert_eq!(Price::won(2500).display(), "2,500원");
        assert_eq!(Price::won(1_234_567).display(), "1,234,567원");
        assert_eq!(Price::won(-12_000).display(), "-12,000원");
    }

    #[test]
    fn test_times_saturates() {
        assert_eq!(Price::won(i64::MAX).times(2), Price::won(i64::MAX));
    }
}
