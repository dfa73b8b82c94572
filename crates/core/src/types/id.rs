//! Newtype IDs for type-safe entity references.
//!
//! Product IDs come from page markup (`data-product-id`) and are opaque
//! strings. The only rule is that an ID is never empty.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a sellable product, as published on its product card.
///
/// # Example
///
/// ```rust
/// # use love_letters_core::ProductId;
/// assert!(ProductId::parse(Some("carta-01")).is_some());
/// assert!(ProductId::parse(Some("")).is_none());
/// assert!(ProductId::parse(None).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Build an ID from an optional raw value.
    ///
    /// Returns `None` when the value is absent or empty. The value is kept
    /// verbatim otherwise; IDs compare exactly.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(value) if !value.is_empty() => Some(Self(value.to_owned())),
            _ => None,
        }
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the ID is empty.
    ///
    /// Only possible for values deserialized from storage; such items are
    /// discarded when a cart is loaded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
