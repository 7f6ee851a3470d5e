//! Checkout module.
//!
//! Contains the customer details form state, the three-stage checkout
//! state machine, and the immutable order snapshot produced at
//! submission.

mod details;
mod flow;
mod order;

pub use details::{CustomerDetails, DetailField, PaymentMethod};
pub use flow::{CheckoutFlow, CheckoutStage};
pub use order::{Confirmation, Order, OrderLine, PaymentInstructions, NEQUI_ACCOUNT};
