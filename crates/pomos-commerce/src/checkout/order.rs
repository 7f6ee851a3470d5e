//! Order snapshot and confirmation types.

use super::details::{CustomerDetails, PaymentMethod};
use crate::cart::Cart;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The Nequi account orders are paid to. Fixed business configuration,
/// shown on the confirmation screen for wallet payments.
pub const NEQUI_ACCOUNT: &str = "300 766 47 29";

/// A line item frozen into an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product ordered.
    pub product_id: ProductId,
    /// Product name at order time.
    pub name: String,
    /// Unit price at order time.
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: i64,
    /// Line subtotal (unit price × quantity).
    pub subtotal: Money,
}

/// An immutable order snapshot, produced exactly once per successful
/// submission.
///
/// Captures the cart contents, customer details, and total at the instant
/// of submission. The total is taken here, before the cart is cleared, so
/// the confirmation screen can keep showing it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// 4-digit reference number.
    pub id: OrderId,
    /// Submission timestamp.
    pub placed_at: NaiveDateTime,
    /// Cart contents at submission.
    pub lines: Vec<OrderLine>,
    /// Customer details at submission.
    pub details: CustomerDetails,
    /// Total captured from the pre-clear cart.
    pub total: Money,
}

impl Order {
    /// Freeze the given cart and details into an order.
    pub fn place(
        cart: &Cart,
        details: CustomerDetails,
        id: OrderId,
        placed_at: NaiveDateTime,
    ) -> Self {
        let lines: Vec<OrderLine> = cart
            .lines()
            .iter()
            .map(|l| OrderLine {
                product_id: l.product_id,
                name: l.name.clone(),
                unit_price: l.unit_price,
                quantity: l.quantity,
                subtotal: l.subtotal(),
            })
            .collect();
        let total = cart.totals().total_price;
        Self {
            id,
            placed_at,
            lines,
            details,
            total,
        }
    }

    /// Total item count across all lines. Saturates at the i64 bound.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Build the confirmation-screen view of this order.
    pub fn confirmation(&self) -> Confirmation {
        Confirmation {
            order_id: self.id.clone(),
            total: self.total,
            customer_name: self.details.name.clone(),
            payment_method: self.details.payment_method,
            payment_instructions: self.payment_instructions(),
        }
    }

    /// Wallet payment instructions, present only for Nequi orders.
    fn payment_instructions(&self) -> Option<PaymentInstructions> {
        if self.details.payment_method.requires_receipt() {
            Some(PaymentInstructions {
                account: NEQUI_ACCOUNT.to_string(),
                amount: self.total,
            })
        } else {
            None
        }
    }
}

/// Fixed payment-destination text shown alongside the total when the
/// customer pays by mobile wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentInstructions {
    /// Destination Nequi account.
    pub account: String,
    /// Amount to transfer (the order total, again).
    pub amount: Money,
}

/// What the confirmation screen must display after submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Confirmation {
    /// Order reference number.
    pub order_id: OrderId,
    /// Order total, captured before the cart was cleared.
    pub total: Money,
    /// Customer name.
    pub customer_name: String,
    /// How the order is paid.
    pub payment_method: PaymentMethod,
    /// Extra instructions for wallet payments.
    pub payment_instructions: Option<PaymentInstructions>,
}
