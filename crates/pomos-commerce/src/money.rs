//! Money type for representing Colombian peso amounts.
//!
//! Amounts are stored as integer pesos. The peso has no fractional
//! subdivision in this domain, so there are no decimal places to track
//! and no floating-point involved anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// An integer peso amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in pesos.
    pub amount: i64,
}

impl Money {
    /// Create a new amount.
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Zero pesos.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Multiply by a quantity. Saturates at the i64 bounds: quantities
    /// are unbounded above, so totals must stay total functions too.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor))
    }

    /// Sum an iterator of amounts. Saturates at the i64 bounds.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }

    /// Format the amount with thousands grouping (e.g., `108.000`).
    ///
    /// Groups of three digits separated by `.`, the es-CO convention.
    pub fn grouped(&self) -> String {
        let negative = self.amount < 0;
        let digits = self.amount.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - offset) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        if negative {
            format!("-{}", out)
        } else {
            out
        }
    }

    /// Format as a display string with the peso sign (e.g., `$108.000`).
    pub fn display(&self) -> String {
        format!("${}", self.grouped())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
