//! Storefront domain types and order pipeline for Granja Los Pomos.
//!
//! This crate is the basket-to-order core of a small farm storefront:
//!
//! - **Catalog**: the static product list
//! - **Cart**: the cart engine, its line items, and read snapshots
//! - **Checkout**: the three-stage flow, customer details, orders
//! - **Outbound**: the WhatsApp order message and transport URI
//! - **Session**: single-visitor state tying the pieces together
//!
//! There is no backend, no persistence, and no payment processing: a
//! finished order is handed to the external messaging channel as a
//! pre-formatted message, and the crate's contract ends there. The
//! presentation layer is an external collaborator that calls in and
//! renders from the snapshots it gets back.
//!
//! # Example
//!
//! ```rust
//! use pomos_commerce::prelude::*;
//!
//! let mut session = Session::new(default_catalog());
//! session.add_to_cart(ProductId::new(6));
//! session.add_to_cart(ProductId::new(6));
//!
//! session.begin_checkout().unwrap();
//! let details = session.details_mut();
//! details.name = "Ana".to_string();
//! details.phone = "3001234567".to_string();
//! details.neighborhood = "Belén".to_string();
//! details.address = "Cra 1 #2-3".to_string();
//!
//! let submission = session.submit_order().unwrap();
//! assert!(submission.message.url.starts_with("https://wa.me/"));
//! session.run_deferred_clear();
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod outbound;
pub mod session;

pub use error::StoreError;
pub use ids::{OrderId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{default_catalog, Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSnapshot, CartTotals};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStage, Confirmation, CustomerDetails, DetailField, Order,
        OrderLine, PaymentInstructions, PaymentMethod,
    };

    // Outbound
    pub use crate::outbound::{chat_url, OrderMessage, DESTINATION_PHONE};

    // Session
    pub use crate::session::{OrderSubmission, Session, StoreView};
}
