//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in the basket-to-order pipeline.
///
/// Cart operations never appear here: they are total functions and treat
/// unknown product ids as silent no-ops. Only the checkout state machine
/// has failure modes worth surfacing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Checkout requested with an empty cart.
    #[error("Cannot start checkout with an empty cart")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Required customer details are missing.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),
}
