//! Preference store: theme, language, and cart in durable storage.
//!
//! Reads never fail. A value that is absent or unreadable comes back as its
//! default (light theme, Portuguese, empty cart) and the problem is only
//! logged.

use love_letters_core::{Cart, Lang, Theme};
use tracing::debug;

use crate::config::StorageKeys;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Typed access to the three persisted preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub const fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// The stored theme, or the default.
    pub fn load_theme(&self) -> Theme {
        self.load_parsed(&self.keys.theme)
    }

    /// The stored language, or the default.
    pub fn load_lang(&self) -> Lang {
        self.load_parsed(&self.keys.lang)
    }

    /// The stored cart, or an empty one if absent or malformed.
    pub fn load_cart(&self) -> Cart {
        let Some(raw) = self.store.get(&self.keys.cart) else {
            return Cart::new();
        };

        match Cart::from_json(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                debug!(key = %self.keys.cart, error = %e, "Discarding unreadable stored cart");
                Cart::new()
            }
        }
    }

    /// Persist the theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(&self.keys.theme, theme.as_str())?;
        Ok(())
    }

    /// Persist the language.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn save_lang(&self, lang: Lang) -> Result<()> {
        self.store.set(&self.keys.lang, lang.as_str())?;
        Ok(())
    }

    /// Persist the whole cart as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be encoded or the store rejects
    /// the write.
    pub fn save_cart(&self, cart: &Cart) -> Result<()> {
        let json = cart.to_json()?;
        self.store.set(&self.keys.cart, &json)?;
        Ok(())
    }

    fn load_parsed<T>(&self, key: &str) -> T
    where
        T: std::str::FromStr + Default,
        T::Err: std::fmt::Display,
    {
        let Some(raw) = self.store.get(key) else {
            return T::default();
        };

        raw.parse().unwrap_or_else(|e| {
            debug!(key, error = %e, "Ignoring unknown stored preference");
            T::default()
        })
    }
}
