//! Application state shared across controllers.

use love_letters_core::{AddOutcome, Cart, Lang, ProductDetails, Theme};
use tracing::warn;

use crate::config::StorageKeys;
use crate::preferences::PreferenceStore;
use crate::storage::KeyValueStore;

/// The visitor's preferences and cart, mirrored to durable storage.
///
/// Built once at startup from the preference store and owned by the
/// [`App`](crate::app::App). Controllers receive it by reference; this is
/// the only place preferences and the cart are mutated, and every mutation
/// is persisted before it returns.
#[derive(Debug)]
pub struct AppState<S> {
    prefs: PreferenceStore<S>,
    theme: Theme,
    lang: Lang,
    cart: Cart,
}

impl<S: KeyValueStore> AppState<S> {
    /// Load preferences and cart from `store`.
    pub fn load(store: S, keys: StorageKeys) -> Self {
        let prefs = PreferenceStore::new(store, keys);
        Self {
            theme: prefs.load_theme(),
            lang: prefs.load_lang(),
            cart: prefs.load_cart(),
            prefs,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.prefs.save_theme(self.theme) {
            warn!(error = %e, theme = %self.theme, "Failed to persist theme");
        }
        self.theme
    }

    /// Flip the language and persist it. Returns the new language.
    pub fn toggle_lang(&mut self) -> Lang {
        self.lang = self.lang.toggled();
        if let Err(e) = self.prefs.save_lang(self.lang) {
            warn!(error = %e, lang = %self.lang, "Failed to persist language");
        }
        self.lang
    }

    /// Add one unit of `product` to the cart, persisting any change.
    pub fn add_to_cart(&mut self, product: ProductDetails) -> AddOutcome {
        let outcome = self.cart.add(product);
        if outcome.is_mutation()
            && let Err(e) = self.prefs.save_cart(&self.cart)
        {
            warn!(error = %e, items = self.cart.len(), "Failed to persist cart");
        }
        outcome
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use love_letters_core::{Price, ProductId};

    use super::*;
    use crate::storage::MemoryStore;

    fn product(id: Option<&str>) -> ProductDetails {
        ProductDetails {
            id: ProductId::parse(id),
            title: "Carta".to_string(),
            price: Price::parse_display("10 €", "€"),
        }
    }

    #[test]
    fn test_toggles_persist_each_state() {
        let store = MemoryStore::new();
        let mut state = AppState::load(store.clone(), StorageKeys::default());

        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(store.get("ll-theme").as_deref(), Some("dark"));
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(store.get("ll-theme").as_deref(), Some("light"));

        assert_eq!(state.toggle_lang(), Lang::En);
        assert_eq!(store.get("ll-lang").as_deref(), Some("en"));
    }

    #[test]
    fn test_add_persists_only_mutations() {
        let store = MemoryStore::new();
        let mut state = AppState::load(store.clone(), StorageKeys::default());

        assert_eq!(state.add_to_cart(product(None)), AddOutcome::Ignored);
        assert_eq!(store.get("ll-cart"), None);

        assert_eq!(state.add_to_cart(product(Some("a"))), AddOutcome::Appended);
        let reloaded = AppState::load(store, StorageKeys::default());
        assert_eq!(reloaded.cart(), state.cart());
    }
}
