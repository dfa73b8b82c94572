//! Storefront runtime configuration.
//!
//! The runtime talks to the page and to browser storage through a fixed
//! contract of storage keys and selectors. Defaults match the published
//! theme markup; a page may override any subset by passing JSON to
//! `startWithConfig`:
//!
//! ```json
//! {
//!   "storage": { "cart": "shop-cart" },
//!   "log_filter": "love_letters_storefront=debug"
//! }
//! ```
//!
//! Unknown keys are rejected, so a misspelled override fails instead of
//! being ignored. Configuration is validated once at startup. Missing
//! markup is never an error (features simply do not bind), but an unusable
//! contract is.

use std::collections::HashSet;

use love_letters_core::Lang;
use serde::Deserialize;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Configuration value {0} must not be empty")]
    EmptyValue(&'static str),
    #[error("Storage key {0:?} is used for more than one preference")]
    DuplicateStorageKey(String),
}

/// Storefront runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Durable storage keys
    pub storage: StorageKeys,
    /// Page element selectors and attribute names
    pub selectors: Selectors,
    /// Currency symbol stripped from price text and appended to amounts
    pub currency_symbol: String,
    /// Contact form confirmation texts
    pub contact: ContactMessages,
    /// `tracing` filter directive for the console logger
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            selectors: Selectors::default(),
            currency_symbol: "€".to_owned(),
            contact: ContactMessages::default(),
            log_filter: "love_letters_storefront=info".to_owned(),
        }
    }
}

/// Storage key for each persisted preference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageKeys {
    /// JSON array of cart line items
    pub cart: String,
    /// `"light"` or `"dark"`
    pub theme: String,
    /// `"pt"` or `"en"`
    pub lang: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart: "ll-cart".to_owned(),
            theme: "ll-theme".to_owned(),
            lang: "ll-lang".to_owned(),
        }
    }
}

/// Where each controller finds its elements.
///
/// Fields ending in `_attr` are attribute names; the rest are CSS
/// selectors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    /// Root attribute carrying the current theme
    pub theme_attr: String,
    /// Root attribute carrying the current language, and the per-element
    /// opt-in tag for language-based visibility
    pub lang_attr: String,
    pub theme_toggle: String,
    pub lang_toggle: String,
    pub product_card: String,
    /// Attribute on product cards naming their category
    pub category_attr: String,
    pub add_to_cart: String,
    pub product_link: String,
    /// Attribute on the product link carrying the product ID
    pub product_id_attr: String,
    pub product_title: String,
    pub product_price: String,
    pub cart_count: String,
    pub filter: String,
    /// Attribute on filter controls naming the category they select
    pub filter_attr: String,
    /// Class marking the selected filter control
    pub active_class: String,
    /// Filter category that matches every card
    pub filter_all: String,
    pub cart_items: String,
    pub cart_empty: String,
    pub cart_subtotal: String,
    pub cart_total: String,
    pub checkout: String,
    pub contact_form: String,
    pub form_status: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_attr: "data-theme".to_owned(),
            lang_attr: "data-lang".to_owned(),
            theme_toggle: "#toggle-theme".to_owned(),
            lang_toggle: "#toggle-lang".to_owned(),
            product_card: ".product-card".to_owned(),
            category_attr: "data-category".to_owned(),
            add_to_cart: "[data-add-to-cart]".to_owned(),
            product_link: ".product-link".to_owned(),
            product_id_attr: "data-product-id".to_owned(),
            product_title: "h2".to_owned(),
            product_price: ".price".to_owned(),
            cart_count: "[data-cart-count]".to_owned(),
            filter: "[data-filter]".to_owned(),
            filter_attr: "data-filter".to_owned(),
            active_class: "active".to_owned(),
            filter_all: "all".to_owned(),
            cart_items: "[data-cart-items]".to_owned(),
            cart_empty: ".cart-empty".to_owned(),
            cart_subtotal: "[data-cart-subtotal]".to_owned(),
            cart_total: "[data-cart-total]".to_owned(),
            checkout: ".btn-checkout".to_owned(),
            contact_form: "[data-form=\"contact\"]".to_owned(),
            form_status: ".form-status".to_owned(),
        }
    }
}

impl Selectors {
    /// Selector matching every element tagged with a language.
    #[must_use]
    pub fn lang_tagged(&self) -> String {
        format!("[{}]", self.lang_attr)
    }
}

/// Confirmation shown after the contact form is submitted, per language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactMessages {
    pub pt: String,
    pub en: String,
}

impl Default for ContactMessages {
    fn default() -> Self {
        Self {
            pt: "Carta enviada. Respondemos em breve.".to_owned(),
            en: "Letter sent. We\u{2019}ll reply soon.".to_owned(),
        }
    }
}

impl ContactMessages {
    /// The confirmation text for `lang`.
    #[must_use]
    pub fn for_lang(&self, lang: Lang) -> &str {
        match lang {
            Lang::Pt => &self.pt,
            Lang::En => &self.en,
        }
    }
}

impl StorefrontConfig {
    /// Parse a (partial) configuration from JSON and validate it.
    ///
    /// Omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed or the resulting
    /// configuration fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the key and attribute contract is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyValue` for any empty key, selector, or
    /// attribute name, and `ConfigError::DuplicateStorageKey` when two
    /// preferences would share a storage slot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let storage = [
            ("storage.cart", &self.storage.cart),
            ("storage.theme", &self.storage.theme),
            ("storage.lang", &self.storage.lang),
        ];
        require_non_empty(&storage)?;

        let mut seen = HashSet::new();
        for (_, key) in storage {
            if !seen.insert(key.as_str()) {
                return Err(ConfigError::DuplicateStorageKey(key.clone()));
            }
        }

        let s = &self.selectors;
        require_non_empty(&[
            ("selectors.theme_attr", &s.theme_attr),
            ("selectors.lang_attr", &s.lang_attr),
            ("selectors.theme_toggle", &s.theme_toggle),
            ("selectors.lang_toggle", &s.lang_toggle),
            ("selectors.product_card", &s.product_card),
            ("selectors.category_attr", &s.category_attr),
            ("selectors.add_to_cart", &s.add_to_cart),
            ("selectors.product_link", &s.product_link),
            ("selectors.product_id_attr", &s.product_id_attr),
            ("selectors.product_title", &s.product_title),
            ("selectors.product_price", &s.product_price),
            ("selectors.cart_count", &s.cart_count),
            ("selectors.filter", &s.filter),
            ("selectors.filter_attr", &s.filter_attr),
            ("selectors.active_class", &s.active_class),
            ("selectors.filter_all", &s.filter_all),
            ("selectors.cart_items", &s.cart_items),
            ("selectors.cart_empty", &s.cart_empty),
            ("selectors.cart_subtotal", &s.cart_subtotal),
            ("selectors.cart_total", &s.cart_total),
            ("selectors.checkout", &s.checkout),
            ("selectors.contact_form", &s.contact_form),
            ("selectors.form_status", &s.form_status),
        ])?;

        require_non_empty(&[("currency_symbol", &self.currency_symbol)])
    }
}

fn require_non_empty(values: &[(&'static str, &String)]) -> Result<(), ConfigError> {
    match values.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(ConfigError::EmptyValue(*name)),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.cart, "ll-cart");
        assert_eq!(config.storage.theme, "ll-theme");
        assert_eq!(config.storage.lang, "ll-lang");
        assert_eq!(config.selectors.lang_tagged(), "[data-lang]");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = StorefrontConfig::from_json(r#"{"storage":{"cart":"shop-cart"}}"#).unwrap();
        assert_eq!(config.storage.cart, "shop-cart");
        assert_eq!(config.storage.theme, "ll-theme");
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_empty_value_rejected() {
        let err = StorefrontConfig::from_json(r#"{"selectors":{"filter_attr":" "}}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration value selectors.filter_attr must not be empty"
        );
    }

    #[test]
    fn test_duplicate_storage_key_rejected() {
        let err = StorefrontConfig::from_json(r#"{"storage":{"theme":"ll-lang"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateStorageKey(key) if key == "ll-lang"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = StorefrontConfig::from_json(r#"{"storge":{"cart":"shop-cart"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("storge"));

        let err = StorefrontConfig::from_json(r#"{"selectors":{"cart_count_":"[x]"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = StorefrontConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_contact_messages_per_language() {
        let messages = ContactMessages::default();
        assert_eq!(
            messages.for_lang(Lang::Pt),
            "Carta enviada. Respondemos em breve."
        );
        assert_eq!(messages.for_lang(Lang::En), "Letter sent. We’ll reply soon.");
    }
}
