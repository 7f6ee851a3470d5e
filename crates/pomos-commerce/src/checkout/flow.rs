//! Checkout flow state machine.

use super::details::{CustomerDetails, DetailField};
use crate::cart::Cart;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Stages of the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStage {
    /// Viewing and editing the cart.
    #[default]
    Browsing,
    /// Filling in delivery and payment details; the cart is read-only.
    CollectingDetails,
    /// Terminal confirmation display for the placed order.
    Completed,
}

impl CheckoutStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStage::Browsing => "browsing",
            CheckoutStage::CollectingDetails => "collecting_details",
            CheckoutStage::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStage::Browsing => "Tu Canasta",
            CheckoutStage::CollectingDetails => "Finalizar Pedido",
            CheckoutStage::Completed => "¡Pedido Generado!",
        }
    }
}

/// The three-stage workflow gating when an order may be finalized.
///
/// Browsing → CollectingDetails → Completed. Going back keeps the details
/// the customer already typed, so re-entering checkout resumes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutFlow {
    stage: CheckoutStage,
    details: CustomerDetails,
}

impl CheckoutFlow {
    /// A fresh flow in the Browsing stage with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The details entered so far.
    pub fn details(&self) -> &CustomerDetails {
        &self.details
    }

    /// Mutable access for field-by-field form input.
    pub fn details_mut(&mut self) -> &mut CustomerDetails {
        &mut self.details
    }

    /// Browsing → CollectingDetails. Requires a non-empty cart.
    pub fn begin(&mut self, cart: &Cart) -> Result<(), StoreError> {
        if self.stage != CheckoutStage::Browsing {
            return Err(self.invalid_transition(CheckoutStage::CollectingDetails));
        }
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        self.stage = CheckoutStage::CollectingDetails;
        Ok(())
    }

    /// CollectingDetails → Browsing. Entered details are retained.
    pub fn back(&mut self) -> Result<(), StoreError> {
        if self.stage != CheckoutStage::CollectingDetails {
            return Err(self.invalid_transition(CheckoutStage::Browsing));
        }
        self.stage = CheckoutStage::Browsing;
        Ok(())
    }

    /// CollectingDetails → Completed, only when every required field is
    /// non-empty.
    ///
    /// On validation failure the flow stays in CollectingDetails and the
    /// error names the missing fields; [`Self::missing_fields`] gives the
    /// same list for per-field form feedback. Never transitions silently.
    pub fn submit(&mut self) -> Result<(), StoreError> {
        if self.stage != CheckoutStage::CollectingDetails {
            return Err(self.invalid_transition(CheckoutStage::Completed));
        }
        let missing = self.details.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            return Err(StoreError::CheckoutIncomplete(names.join(", ")));
        }
        self.stage = CheckoutStage::Completed;
        Ok(())
    }

    /// Unconditional return to Browsing.
    ///
    /// Used when the basket view is reopened: a half-finished checkout is
    /// never resumed across a close/open cycle. Details are kept.
    pub fn reset(&mut self) {
        self.stage = CheckoutStage::Browsing;
    }

    /// Required fields still empty (for field-level error display).
    pub fn missing_fields(&self) -> Vec<DetailField> {
        self.details.missing_fields()
    }

    fn invalid_transition(&self, to: CheckoutStage) -> StoreError {
        StoreError::InvalidTransition {
            from: self.stage.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use crate::money::Money;

    fn cart_with_item() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&Product {
            id: ProductId::new(6),
            name: "Pollo Criollo (6 Libras)".to_string(),
            description: String::new(),
            price: Money::new(54_000),
            unit: "Unidad".to_string(),
            image: String::new(),
            category: "Entero".to_string(),
            is_criollo: true,
        });
        cart
    }

    fn fill_details(flow: &mut CheckoutFlow) {
        let d = flow.details_mut();
        d.name = "Ana".to_string();
        d.phone = "3001234567".to_string();
        d.neighborhood = "Belén".to_string();
        d.address = "Cra 1 #2-3".to_string();
    }

    #[test]
    fn test_begin_requires_non_empty_cart() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.begin(&Cart::new()), Err(StoreError::EmptyCart));
        assert_eq!(flow.stage(), CheckoutStage::Browsing);

        assert!(flow.begin(&cart_with_item()).is_ok());
        assert_eq!(flow.stage(), CheckoutStage::CollectingDetails);
    }

    #[test]
    fn test_submit_blocked_until_complete() {
        let mut flow = CheckoutFlow::new();
        flow.begin(&cart_with_item()).unwrap();

        let err = flow.submit().unwrap_err();
        assert!(matches!(err, StoreError::CheckoutIncomplete(_)));
        assert_eq!(flow.stage(), CheckoutStage::CollectingDetails);
        assert_eq!(flow.missing_fields().len(), 4);

        fill_details(&mut flow);
        assert!(flow.submit().is_ok());
        assert_eq!(flow.stage(), CheckoutStage::Completed);
    }

    #[test]
    fn test_missing_fields_named_in_error() {
        let mut flow = CheckoutFlow::new();
        flow.begin(&cart_with_item()).unwrap();
        fill_details(&mut flow);
        flow.details_mut().phone.clear();

        match flow.submit() {
            Err(StoreError::CheckoutIncomplete(missing)) => {
                assert_eq!(missing, "phone");
            }
            other => panic!("expected CheckoutIncomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_back_retains_details() {
        let mut flow = CheckoutFlow::new();
        flow.begin(&cart_with_item()).unwrap();
        fill_details(&mut flow);

        flow.back().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::Browsing);
        assert_eq!(flow.details().name, "Ana");

        // Re-entering resumes the typed details.
        flow.begin(&cart_with_item()).unwrap();
        assert!(flow.details().is_complete());
    }

    #[test]
    fn test_reset_is_unconditional() {
        let mut flow = CheckoutFlow::new();
        flow.begin(&cart_with_item()).unwrap();
        fill_details(&mut flow);
        flow.submit().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::Completed);

        flow.reset();
        assert_eq!(flow.stage(), CheckoutStage::Browsing);
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut flow = CheckoutFlow::new();
        assert!(matches!(
            flow.back(),
            Err(StoreError::InvalidTransition { .. })
        ));
        assert!(matches!(
            flow.submit(),
            Err(StoreError::InvalidTransition { .. })
        ));

        flow.begin(&cart_with_item()).unwrap();
        assert!(matches!(
            flow.begin(&cart_with_item()),
            Err(StoreError::InvalidTransition { .. })
        ));
    }
}
