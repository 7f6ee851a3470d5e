//! Shopping cart module.
//!
//! Contains the cart engine, its line items, and the read-only snapshots
//! handed to the presentation layer.

mod cart;
mod snapshot;

pub use cart::{Cart, CartLine};
pub use snapshot::{CartSnapshot, CartTotals};
