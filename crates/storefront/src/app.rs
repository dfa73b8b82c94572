//! Application wiring.
//!
//! [`App`] owns the state and one controller per feature. The browser
//! binding (or a test) builds it from a resolved [`Markup`], calls
//! [`App::start`] once, and then forwards each user event to the matching
//! handler. Handlers run to completion; nothing here is re-entrant.

use love_letters_core::{AddOutcome, Cart, Lang, Theme};
use tracing::info;

use crate::cart::CartController;
use crate::cart_page::CartPage;
use crate::config::StorefrontConfig;
use crate::contact::ContactForm;
use crate::dom::Element;
use crate::error::Result;
use crate::filters::FilterController;
use crate::language::LanguageController;
use crate::markup::Markup;
use crate::state::AppState;
use crate::storage::KeyValueStore;
use crate::theme::ThemeController;

/// The storefront runtime for one page.
#[derive(Debug)]
pub struct App<S, E> {
    state: AppState<S>,
    theme: ThemeController<E>,
    language: LanguageController<E>,
    cart: CartController<E>,
    cart_page: Option<CartPage<E>>,
    filters: Option<FilterController<E>>,
    contact: Option<ContactForm<E>>,
}

impl<S: KeyValueStore, E: Element> App<S, E> {
    /// Validate `config`, load state from `store`, and bind controllers to
    /// the elements in `markup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid. Missing markup is
    /// not an error.
    pub fn new(config: &StorefrontConfig, store: S, markup: Markup<E>) -> Result<Self> {
        config.validate()?;

        let selectors = &config.selectors;
        let state = AppState::load(store, config.storage.clone());

        let theme = ThemeController::new(markup.root.clone(), selectors.theme_attr.as_str());
        let language = LanguageController::new(
            markup.root,
            markup.lang_toggle,
            markup.lang_tagged,
            selectors.lang_attr.as_str(),
        );
        let cart = CartController::new(
            markup.add_buttons,
            markup.cart_counts,
            selectors,
            config.currency_symbol.as_str(),
        );
        let cart_page = markup
            .cart_page
            .map(|m| CartPage::new(m, config.currency_symbol.as_str()));
        let filters = FilterController::new(markup.filters, markup.product_cards, selectors);
        let contact = markup
            .contact_form
            .map(|m| ContactForm::new(m, config.contact.clone()));

        Ok(Self {
            state,
            theme,
            language,
            cart,
            cart_page,
            filters,
            contact,
        })
    }

    /// Bring the page in line with the loaded state.
    ///
    /// Applies theme and language, fills the count badges, and renders the
    /// cart summary when this is the cart page.
    pub fn start(&self) {
        self.theme.apply(&self.state);
        self.language.apply(&self.state);
        self.cart.update_count(self.state.cart());
        if let Some(page) = &self.cart_page {
            page.render(self.state.cart());
        }

        info!(
            theme = %self.state.theme(),
            lang = %self.state.lang(),
            cart_items = self.state.cart().total_quantity(),
            cart_page = self.cart_page.is_some(),
            filters = self.filters.is_some(),
            contact_form = self.contact.is_some(),
            "Storefront started"
        );
    }

    /// Theme toggle clicked.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle(&mut self.state);
    }

    /// Language toggle clicked.
    pub fn toggle_lang(&mut self) {
        self.language.toggle(&mut self.state);
    }

    /// Add-to-cart control `index` clicked.
    pub fn add_to_cart(&mut self, index: usize) -> AddOutcome {
        self.cart.on_add_click(&mut self.state, index)
    }

    /// Filter control `index` clicked. No-op without filters.
    pub fn select_filter(&self, index: usize) {
        if let Some(filters) = &self.filters {
            filters.select(index);
        }
    }

    /// Contact form submitted. No-op without a contact form.
    pub fn submit_contact(&self) {
        if let Some(contact) = &self.contact {
            contact.submit(self.state.lang());
        }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.state.theme()
    }

    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.state.lang()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        self.state.cart()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::dom::MemoryElement;
    use crate::error::AppError;
    use crate::storage::MemoryStore;

    #[test]
    fn test_bare_page_starts() {
        let root = MemoryElement::new();
        let mut app = App::new(
            &StorefrontConfig::default(),
            MemoryStore::new(),
            Markup::new(root.clone()),
        )
        .unwrap();
        app.start();

        assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
        assert_eq!(root.attribute("data-lang").as_deref(), Some("pt"));

        // Features without markup are inert.
        app.select_filter(0);
        app.submit_contact();
        assert_eq!(app.add_to_cart(0), AddOutcome::Ignored);
        app.toggle_theme();
        assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = StorefrontConfig::default();
        config.storage.lang = config.storage.cart.clone();

        let err = App::new(&config, MemoryStore::new(), Markup::new(MemoryElement::new()))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::DuplicateStorageKey(_))
        ));
    }
}
