//! Cart engine and line item types.

use super::snapshot::{CartSnapshot, CartTotals};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line item in the cart: one catalog product plus its requested
/// quantity.
///
/// Product fields are denormalized at add time so the line renders
/// without a catalog lookup. Invariants: at most one line per product id,
/// and `quantity >= 1` always — a line whose quantity would reach zero is
/// left unchanged instead (removal goes through `remove_item`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Unit label (e.g., "Libra").
    pub unit: String,
    /// Image URL for display.
    pub image: String,
    /// Requested quantity, always >= 1.
    pub quantity: i64,
}

impl CartLine {
    fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            unit: product.unit.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Line subtotal (unit price × quantity).
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// The cart engine.
///
/// Owns the basket state exclusively; all mutation goes through the
/// operations below, each of which returns a fresh [`CartSnapshot`] for
/// the presentation layer. Every operation is a total function over the
/// current state — unknown product ids are silent no-ops, never errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented by 1; otherwise a new line with quantity 1 is appended,
    /// keeping the insertion-order position of the first add.
    pub fn add_item(&mut self, product: &Product) -> CartSnapshot {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::for_product(product));
        }
        self.snapshot()
    }

    /// Adjust a line's quantity by a signed delta.
    ///
    /// No-op if no line matches. A delta that would take the quantity to
    /// zero or below is rejected and the line left unchanged; quantity is
    /// unbounded above.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> CartSnapshot {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            let next = line.quantity.saturating_add(delta);
            if next >= 1 {
                line.quantity = next;
            }
        }
        self.snapshot()
    }

    /// Delete the matching line, if present.
    pub fn remove_item(&mut self, product_id: ProductId) -> CartSnapshot {
        self.lines.retain(|l| l.product_id != product_id);
        self.snapshot()
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartSnapshot {
        self.lines.clear();
        self.snapshot()
    }

    /// Derived totals, recomputed from the current lines on every call.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_lines(&self.lines)
    }

    /// An immutable view of the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            totals: self.totals(),
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by product id.
    pub fn get_line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
