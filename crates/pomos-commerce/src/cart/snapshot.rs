//! Read-only cart views.

use super::cart::CartLine;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Derived cart totals, recomputed from the lines on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub total_items: i64,
    /// Sum of line subtotals.
    pub total_price: Money,
}

impl CartTotals {
    /// Fold the totals from a set of lines.
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            total_items: lines
                .iter()
                .fold(0i64, |acc, l| acc.saturating_add(l.quantity)),
            total_price: lines
                .iter()
                .fold(Money::zero(), |acc, l| acc + l.subtotal()),
        }
    }
}

/// An immutable view of the cart at one instant.
///
/// This is what the cart engine hands back after every operation; the
/// presentation layer renders from snapshots and never touches the
/// engine's own state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Totals at the time of the snapshot.
    pub totals: CartTotals,
}

impl CartSnapshot {
    /// Check if the snapshot holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
