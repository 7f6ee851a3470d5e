//! Single-session storefront state.
//!
//! One [`Session`] per visitor, single-threaded and event-driven: every
//! operation runs to completion on a user-triggered event, there are no
//! background tasks and no locks. The session owns the cart engine and
//! the checkout flow; the presentation layer calls in and renders from
//! the snapshots it gets back.

use crate::cart::{Cart, CartSnapshot};
use crate::catalog::Catalog;
use crate::checkout::{CheckoutFlow, CheckoutStage, Confirmation, CustomerDetails, Order};
use crate::error::StoreError;
use crate::ids::{OrderId, ProductId};
use crate::outbound::OrderMessage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Top-level pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StoreView {
    #[default]
    Home,
    Products,
    About,
}

/// The deferred cart clear armed at submission.
///
/// The confirmation screen must keep showing the order total after the
/// cart empties, so the clear is detached from the submit event and fired
/// by whichever session event comes first. Firing consumes the token and
/// the session holds it in an `Option`, so running twice is
/// unrepresentable.
#[derive(Debug, PartialEq)]
struct DeferredClear;

impl DeferredClear {
    fn fire(self, cart: &mut Cart) {
        debug!("deferred cart clear fired");
        cart.clear();
    }
}

/// Everything returned from a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    /// The immutable order snapshot.
    pub order: Order,
    /// Message text and transport URI for the hand-off.
    pub message: OrderMessage,
    /// Confirmation-screen contents.
    pub confirmation: Confirmation,
}

/// A visitor's storefront session.
///
/// Created empty at session start, destroyed at session end; nothing is
/// persisted. All cart and checkout mutation is routed through these
/// methods — the presentation layer never writes fields directly.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    view: StoreView,
    basket_open: bool,
    cart: Cart,
    flow: CheckoutFlow,
    confirmation: Option<Confirmation>,
    deferred_clear: Option<DeferredClear>,
}

impl Session {
    /// Start a session over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            view: StoreView::Home,
            basket_open: false,
            cart: Cart::new(),
            flow: CheckoutFlow::new(),
            confirmation: None,
            deferred_clear: None,
        }
    }

    /// The catalog this session sells from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current page.
    pub fn view(&self) -> StoreView {
        self.view
    }

    /// Navigate to a page.
    pub fn navigate(&mut self, view: StoreView) {
        self.view = view;
    }

    /// Whether the basket panel is open.
    pub fn basket_open(&self) -> bool {
        self.basket_open
    }

    /// Current checkout stage.
    pub fn checkout_stage(&self) -> CheckoutStage {
        self.flow.stage()
    }

    /// Read access to the cart engine.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The confirmation for the last placed order, while it is on screen.
    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    // ---- Cart operations ------------------------------------------------

    /// Add one unit of a catalog product to the cart.
    ///
    /// Unknown ids are silently ignored. On success the basket panel
    /// opens — the declared side effect of the cart becoming non-empty.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> CartSnapshot {
        if let Some(product) = self.catalog.get(product_id) {
            let snapshot = self.cart.add_item(product);
            self.basket_open = true;
            snapshot
        } else {
            self.cart.snapshot()
        }
    }

    /// Adjust a line quantity; see [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> CartSnapshot {
        self.cart.update_quantity(product_id, delta)
    }

    /// Remove a line; see [`Cart::remove_item`].
    pub fn remove_item(&mut self, product_id: ProductId) -> CartSnapshot {
        self.cart.remove_item(product_id)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> CartSnapshot {
        // An explicit clear supersedes any pending deferred clear.
        self.deferred_clear = None;
        self.cart.clear()
    }

    // ---- Basket panel ---------------------------------------------------

    /// Open the basket panel.
    ///
    /// Always lands on Browsing: a half-finished checkout from a previous
    /// open is never resumed, and a still-pending deferred clear from a
    /// completed order runs now.
    pub fn open_basket(&mut self) {
        self.settle_deferred_clear();
        self.confirmation = None;
        self.flow.reset();
        self.basket_open = true;
    }

    /// Close the basket panel.
    pub fn close_basket(&mut self) {
        self.basket_open = false;
    }

    // ---- Checkout -------------------------------------------------------

    /// Move from Browsing into the details form.
    pub fn begin_checkout(&mut self) -> Result<(), StoreError> {
        self.flow.begin(&self.cart)
    }

    /// Return from the details form to Browsing, keeping typed details.
    pub fn checkout_back(&mut self) -> Result<(), StoreError> {
        self.flow.back()
    }

    /// The details entered so far.
    pub fn details(&self) -> &CustomerDetails {
        self.flow.details()
    }

    /// Form input goes through here, field by field.
    pub fn details_mut(&mut self) -> &mut CustomerDetails {
        self.flow.details_mut()
    }

    /// Validate and finalize the order.
    ///
    /// On success the checkout reaches Completed, the order snapshot and
    /// outbound message are built from the pre-clear cart, and a deferred
    /// clear is armed so the confirmation keeps showing the final total.
    /// On validation failure the flow stays in CollectingDetails.
    pub fn submit_order(&mut self) -> Result<OrderSubmission, StoreError> {
        self.flow.submit()?;

        // Total and lines are captured before any clearing happens.
        let order = Order::place(
            &self.cart,
            self.flow.details().clone(),
            OrderId::generate(),
            chrono::Local::now().naive_local(),
        );
        let message = OrderMessage::render(&order);
        let confirmation = order.confirmation();

        info!(
            order_id = %order.id,
            total = order.total.amount,
            items = order.item_count(),
            "order placed"
        );

        self.confirmation = Some(confirmation.clone());
        self.deferred_clear = Some(DeferredClear);

        Ok(OrderSubmission {
            order,
            message,
            confirmation,
        })
    }

    /// Scheduled tick the host environment runs shortly after submission.
    ///
    /// Safe to call any number of times; the clear fires at most once.
    pub fn run_deferred_clear(&mut self) {
        self.settle_deferred_clear();
    }

    /// Dismiss the confirmation screen.
    ///
    /// Leaves the terminal Completed stage the only way there is: back to
    /// Browsing with an emptied cart and a closed basket.
    pub fn acknowledge_confirmation(&mut self) {
        self.settle_deferred_clear();
        self.confirmation = None;
        self.flow.reset();
        self.basket_open = false;
    }

    fn settle_deferred_clear(&mut self) {
        if let Some(pending) = self.deferred_clear.take() {
            pending.fire(&mut self.cart);
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // A clear still pending when the session ends must run anyway.
        self.settle_deferred_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::money::Money;

    fn session_with_item() -> Session {
        let mut session = Session::new(default_catalog());
        session.add_to_cart(ProductId::new(6));
        session
    }

    fn fill_details(session: &mut Session) {
        let d = session.details_mut();
        d.name = "Ana".to_string();
        d.phone = "3001234567".to_string();
        d.neighborhood = "Belén".to_string();
        d.address = "Cra 1 #2-3".to_string();
    }

    #[test]
    fn test_add_opens_basket() {
        let mut session = Session::new(default_catalog());
        assert!(!session.basket_open());
        let snapshot = session.add_to_cart(ProductId::new(6));
        assert!(session.basket_open());
        assert_eq!(snapshot.totals.total_items, 1);
    }

    #[test]
    fn test_add_unknown_id_is_silent_noop() {
        let mut session = Session::new(default_catalog());
        let snapshot = session.add_to_cart(ProductId::new(999));
        assert!(snapshot.is_empty());
        assert!(!session.basket_open());
    }

    #[test]
    fn test_full_pipeline() {
        let mut session = session_with_item();
        session.add_to_cart(ProductId::new(6));

        session.begin_checkout().unwrap();
        fill_details(&mut session);
        let submission = session.submit_order().unwrap();

        assert_eq!(session.checkout_stage(), CheckoutStage::Completed);
        assert_eq!(submission.order.total, Money::new(108_000));
        assert!(submission.message.url.starts_with("https://wa.me/"));
        assert_eq!(submission.confirmation.customer_name, "Ana");

        // Cart still holds the items until the deferred clear fires, so
        // the confirmation total stays displayable.
        assert!(!session.cart().is_empty());
        session.run_deferred_clear();
        assert!(session.cart().is_empty());
        assert_eq!(
            session.confirmation().unwrap().total,
            Money::new(108_000)
        );
    }

    #[test]
    fn test_submit_requires_complete_details() {
        let mut session = session_with_item();
        session.begin_checkout().unwrap();
        assert!(matches!(
            session.submit_order(),
            Err(StoreError::CheckoutIncomplete(_))
        ));
        assert_eq!(session.checkout_stage(), CheckoutStage::CollectingDetails);
    }

    #[test]
    fn test_deferred_clear_fires_exactly_once() {
        let mut session = session_with_item();
        session.begin_checkout().unwrap();
        fill_details(&mut session);
        session.submit_order().unwrap();

        session.run_deferred_clear();
        assert!(session.cart().is_empty());

        // Items added afterwards survive repeated ticks.
        session.add_to_cart(ProductId::new(4));
        session.run_deferred_clear();
        session.run_deferred_clear();
        assert_eq!(session.cart().totals().total_items, 1);
    }

    #[test]
    fn test_acknowledge_runs_pending_clear() {
        let mut session = session_with_item();
        session.begin_checkout().unwrap();
        fill_details(&mut session);
        session.submit_order().unwrap();

        // Dismissed before the scheduled tick ever ran.
        session.acknowledge_confirmation();
        assert!(session.cart().is_empty());
        assert!(session.confirmation().is_none());
        assert_eq!(session.checkout_stage(), CheckoutStage::Browsing);
        assert!(!session.basket_open());
    }

    #[test]
    fn test_reopen_resets_stale_checkout() {
        let mut session = session_with_item();
        session.begin_checkout().unwrap();
        assert_eq!(session.checkout_stage(), CheckoutStage::CollectingDetails);

        session.close_basket();
        session.open_basket();
        assert_eq!(session.checkout_stage(), CheckoutStage::Browsing);
    }

    #[test]
    fn test_reopen_after_completed_order_resets_and_clears() {
        let mut session = session_with_item();
        session.begin_checkout().unwrap();
        fill_details(&mut session);
        session.submit_order().unwrap();
        session.close_basket();

        session.open_basket();
        assert_eq!(session.checkout_stage(), CheckoutStage::Browsing);
        assert!(session.cart().is_empty());
        assert!(session.confirmation().is_none());
    }

    #[test]
    fn test_details_retained_across_back_and_reopen() {
        let mut session = session_with_item();
        session.begin_checkout().unwrap();
        fill_details(&mut session);
        session.checkout_back().unwrap();

        session.begin_checkout().unwrap();
        assert_eq!(session.details().name, "Ana");
    }

    #[test]
    fn test_explicit_clear_cancels_deferred() {
        let mut session = session_with_item();
        session.begin_checkout().unwrap();
        fill_details(&mut session);
        session.submit_order().unwrap();

        session.clear_cart();
        session.add_to_cart(ProductId::new(4));
        // The armed clear was superseded; the new item must survive.
        session.run_deferred_clear();
        assert_eq!(session.cart().totals().total_items, 1);
    }
}
