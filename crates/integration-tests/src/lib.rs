//! Integration tests for the Love Letters storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p love-letters-integration-tests
//! ```
//!
//! The tests drive a full [`App`] against a headless page built from
//! [`MemoryElement`]s and a shared [`MemoryStore`]. Building a second app
//! over the same store simulates a fresh page load.
//!
//! # Test Categories
//!
//! - `storefront_cart` - adding products, count badges, cart page
//! - `storefront_preferences` - theme and language toggles, persistence
//! - `storefront_page` - filters and the contact form

use love_letters_storefront::dom::{Element, MemoryElement};
use love_letters_storefront::markup::{
    AddToCartButton, CartPageMarkup, ContactFormMarkup, Markup, ProductCardMarkup,
};
use love_letters_storefront::storage::{KeyValueStore, MemoryStore};
use love_letters_storefront::{App, StorefrontConfig};

/// One product card as it appears on a listing page.
#[derive(Debug, Clone)]
pub struct ProductFixture {
    pub id: Option<&'static str>,
    pub title: &'static str,
    pub price: &'static str,
    pub category: &'static str,
}

impl ProductFixture {
    #[must_use]
    pub const fn new(
        id: &'static str,
        title: &'static str,
        price: &'static str,
        category: &'static str,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            price,
            category,
        }
    }
}

/// Which optional page sections to include.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub products: Vec<ProductFixture>,
    /// Filter categories, e.g. `["all", "cartas"]`
    pub filters: Vec<&'static str>,
    pub cart_page: bool,
    pub contact_form: bool,
    /// Adds an add-to-cart control outside every product card
    pub stray_button: bool,
}

/// Handles onto every element of a headless page.
#[derive(Debug, Clone)]
pub struct TestPage {
    pub root: MemoryElement,
    pub lang_toggle: MemoryElement,
    pub pt_text: MemoryElement,
    pub en_text: MemoryElement,
    pub header_count: MemoryElement,
    pub footer_count: MemoryElement,
    pub cards: Vec<MemoryElement>,
    pub price_labels: Vec<MemoryElement>,
    pub filters: Vec<MemoryElement>,
    pub cart_items: MemoryElement,
    pub cart_empty: MemoryElement,
    pub cart_subtotal: MemoryElement,
    pub cart_total: MemoryElement,
    pub checkout: MemoryElement,
    pub contact_form: MemoryElement,
    pub form_status: MemoryElement,
    markup: Markup<MemoryElement>,
}

impl TestPage {
    /// Build the page described by `options`.
    #[must_use]
    pub fn new(options: &PageOptions) -> Self {
        let root = MemoryElement::new();
        let lang_toggle = MemoryElement::new();
        let pt_text = MemoryElement::new()
            .with_attr("data-lang", "pt")
            .with_text("Cartas de amor");
        let en_text = MemoryElement::new()
            .with_attr("data-lang", "en")
            .with_text("Love letters");
        let header_count = MemoryElement::new().with_text("0");
        let footer_count = MemoryElement::new().with_text("0");

        let mut markup = Markup::new(root.clone());
        markup.theme_toggle = Some(MemoryElement::new());
        markup.lang_toggle = Some(lang_toggle.clone());
        markup.lang_tagged = vec![pt_text.clone(), en_text.clone()];
        markup.cart_counts = vec![header_count.clone(), footer_count.clone()];

        let mut cards = Vec::new();
        let mut price_labels = Vec::new();
        for product in &options.products {
            let card = MemoryElement::new().with_attr("data-category", product.category);
            let price = MemoryElement::new().with_text(product.price);
            markup.add_buttons.push(AddToCartButton {
                button: MemoryElement::new().with_attr("data-add-to-cart", ""),
                card: Some(ProductCardMarkup {
                    link: product
                        .id
                        .map(|id| MemoryElement::new().with_attr("data-product-id", id)),
                    title: Some(MemoryElement::new().with_text(product.title)),
                    price: Some(price.clone()),
                }),
            });
            markup.product_cards.push(card.clone());
            cards.push(card);
            price_labels.push(price);
        }
        if options.stray_button {
            markup.add_buttons.push(AddToCartButton {
                button: MemoryElement::new().with_attr("data-add-to-cart", ""),
                card: None,
            });
        }

        let filters: Vec<MemoryElement> = options
            .filters
            .iter()
            .map(|category| MemoryElement::new().with_attr("data-filter", category))
            .collect();
        markup.filters.clone_from(&filters);

        let cart_items = MemoryElement::new();
        let cart_empty = MemoryElement::new();
        let cart_subtotal = MemoryElement::new();
        let cart_total = MemoryElement::new();
        let checkout = MemoryElement::new();
        if options.cart_page {
            markup.cart_page = Some(CartPageMarkup {
                items: cart_items.clone(),
                empty: Some(cart_empty.clone()),
                subtotal: Some(cart_subtotal.clone()),
                total: Some(cart_total.clone()),
                checkout: Some(checkout.clone()),
            });
        }

        let contact_form = MemoryElement::new()
            .with_field("name", "")
            .with_field("email", "")
            .with_field("message", "");
        let form_status = MemoryElement::new();
        if options.contact_form {
            markup.contact_form = Some(ContactFormMarkup {
                form: contact_form.clone(),
                status: Some(form_status.clone()),
            });
        }

        Self {
            root,
            lang_toggle,
            pt_text,
            en_text,
            header_count,
            footer_count,
            cards,
            price_labels,
            filters,
            cart_items,
            cart_empty,
            cart_subtotal,
            cart_total,
            checkout,
            contact_form,
            form_status,
            markup,
        }
    }

    /// Load the page: build an app over `store` and run startup.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration is rejected.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn load(&self, store: &MemoryStore) -> App<MemoryStore, MemoryElement> {
        let app = App::new(
            &StorefrontConfig::default(),
            store.clone(),
            self.markup.clone(),
        )
        .expect("default configuration is valid");
        app.start();
        app
    }

    /// Text of each rendered cart row, spans joined by `" | "`.
    #[must_use]
    pub fn cart_rows(&self) -> Vec<String> {
        self.cart_items
            .children()
            .iter()
            .map(|item| {
                item.spans
                    .iter()
                    .map(|span| span.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect()
    }

    /// Which cards are currently displayed.
    #[must_use]
    pub fn displayed_cards(&self) -> Vec<bool> {
        self.cards.iter().map(MemoryElement::is_displayed).collect()
    }

    /// Which filter controls carry the `active` class.
    #[must_use]
    pub fn active_filters(&self) -> Vec<bool> {
        self.filters.iter().map(|f| f.has_class("active")).collect()
    }

    /// Text of the header count badge.
    #[must_use]
    pub fn count(&self) -> String {
        self.header_count.text()
    }
}

/// The listing used across scenarios.
#[must_use]
pub fn catalogue() -> Vec<ProductFixture> {
    vec![
        ProductFixture::new("a", "Carta de amor", "10 €", "cartas"),
        ProductFixture::new("b", "Selo antigo", "5 €", "selos"),
        ProductFixture::new("c", "Envelope lacrado", "2,50 €", "cartas"),
    ]
}

/// Decode the raw cart JSON currently held by `store`.
#[must_use]
pub fn stored_cart(store: &MemoryStore) -> Option<serde_json::Value> {
    store
        .get("ll-cart")
        .and_then(|raw| serde_json::from_str(&raw).ok())
}
