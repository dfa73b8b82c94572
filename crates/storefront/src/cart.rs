//! Add-to-cart controls and cart count badges.
//!
//! Clicking an add-to-cart control reads the product off its card and adds
//! one unit to the cart. After every change the count badges show the new
//! total quantity.

use love_letters_core::{AddOutcome, Cart, Price, ProductDetails, ProductId};
use tracing::{debug, instrument};

use crate::config::Selectors;
use crate::dom::Element;
use crate::markup::{AddToCartButton, ProductCardMarkup};
use crate::state::AppState;
use crate::storage::KeyValueStore;

/// Feeds product cards into the cart and keeps count badges current.
#[derive(Debug, Clone)]
pub struct CartController<E> {
    buttons: Vec<AddToCartButton<E>>,
    counts: Vec<E>,
    product_id_attr: String,
    currency_symbol: String,
}

impl<E: Element> CartController<E> {
    pub fn new(
        buttons: Vec<AddToCartButton<E>>,
        counts: Vec<E>,
        selectors: &Selectors,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            buttons,
            counts,
            product_id_attr: selectors.product_id_attr.clone(),
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Handle a click on add-to-cart control `index`.
    ///
    /// Controls outside a product card, and cards without a product ID, are
    /// ignored.
    #[instrument(skip(self, state))]
    pub fn on_add_click<S: KeyValueStore>(
        &self,
        state: &mut AppState<S>,
        index: usize,
    ) -> AddOutcome {
        let Some(card) = self.buttons.get(index).and_then(|b| b.card.as_ref()) else {
            debug!("Add-to-cart control has no enclosing product card");
            return AddOutcome::Ignored;
        };

        let product = self.read_product(card);
        self.add(state, product)
    }

    /// Add `product` to the cart and refresh the count badges.
    pub fn add<S: KeyValueStore>(
        &self,
        state: &mut AppState<S>,
        product: ProductDetails,
    ) -> AddOutcome {
        let outcome = state.add_to_cart(product);
        match outcome {
            AddOutcome::Ignored => debug!("Ignoring product without an ID"),
            AddOutcome::Appended | AddOutcome::Incremented { .. } => {
                debug!(?outcome, total = state.cart().total_quantity(), "Cart updated");
                self.update_count(state.cart());
            }
        }
        outcome
    }

    /// Write the cart's total quantity into every count badge.
    pub fn update_count(&self, cart: &Cart) {
        let total = cart.total_quantity().to_string();
        for el in &self.counts {
            el.set_text(&total);
        }
    }

    /// Read the product a card describes, as it is displayed right now.
    #[must_use]
    pub fn read_product(&self, card: &ProductCardMarkup<E>) -> ProductDetails {
        let id = card
            .link
            .as_ref()
            .and_then(|link| link.attribute(&self.product_id_attr));
        let title = card.title.as_ref().map(Element::text).unwrap_or_default();
        let price_text = card.price.as_ref().map(Element::text).unwrap_or_default();

        ProductDetails {
            id: ProductId::parse(id.as_deref()),
            title,
            price: Price::parse_display(&price_text, &self.currency_symbol),
        }
    }
}
