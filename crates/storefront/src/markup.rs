//! The page elements the storefront manages, resolved once at startup.
//!
//! Every field except `root` is optional or may be empty: pages carry only
//! the markup for the features they use, and a missing piece simply means
//! the matching feature does not bind.

/// Everything the controllers need from one page.
#[derive(Debug, Clone)]
pub struct Markup<E> {
    /// The document root (`<html>`)
    pub root: E,
    pub theme_toggle: Option<E>,
    pub lang_toggle: Option<E>,
    /// Elements opting into language-based visibility
    pub lang_tagged: Vec<E>,
    /// Elements displaying the cart's item count
    pub cart_counts: Vec<E>,
    pub add_buttons: Vec<AddToCartButton<E>>,
    /// Every product card, in page order
    pub product_cards: Vec<E>,
    pub filters: Vec<E>,
    /// Present only on the cart page
    pub cart_page: Option<CartPageMarkup<E>>,
    pub contact_form: Option<ContactFormMarkup<E>>,
}

impl<E> Markup<E> {
    /// A page with nothing but a root element.
    pub const fn new(root: E) -> Self {
        Self {
            root,
            theme_toggle: None,
            lang_toggle: None,
            lang_tagged: Vec::new(),
            cart_counts: Vec::new(),
            add_buttons: Vec::new(),
            product_cards: Vec::new(),
            filters: Vec::new(),
            cart_page: None,
            contact_form: None,
        }
    }
}

/// An add-to-cart control and the product card enclosing it.
#[derive(Debug, Clone)]
pub struct AddToCartButton<E> {
    pub button: E,
    /// `None` when the control sits outside any product card
    pub card: Option<ProductCardMarkup<E>>,
}

/// The parts of a product card that describe the product.
#[derive(Debug, Clone)]
pub struct ProductCardMarkup<E> {
    /// Link carrying the product ID attribute
    pub link: Option<E>,
    /// Heading holding the product title
    pub title: Option<E>,
    /// Element showing the price, e.g. `12,00 €`
    pub price: Option<E>,
}

/// Cart page summary elements.
#[derive(Debug, Clone)]
pub struct CartPageMarkup<E> {
    /// List receiving one row per line item
    pub items: E,
    /// Placeholder shown while the cart is empty
    pub empty: Option<E>,
    pub subtotal: Option<E>,
    pub total: Option<E>,
    pub checkout: Option<E>,
}

impl<E> CartPageMarkup<E> {
    pub const fn new(items: E) -> Self {
        Self {
            items,
            empty: None,
            subtotal: None,
            total: None,
            checkout: None,
        }
    }
}

/// Contact form and its status line.
#[derive(Debug, Clone)]
pub struct ContactFormMarkup<E> {
    pub form: E,
    pub status: Option<E>,
}
