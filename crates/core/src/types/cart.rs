//! Shopping cart kept on the visitor's device.
//!
//! The cart is an ordered list of line items, one per distinct product,
//! in the order products were first added. It only ever grows: adding a
//! product already in the cart bumps its quantity.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// One cart entry: a distinct product and how many of it were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default = "default_qty")]
    pub qty: u32,
}

const fn default_qty() -> u32 {
    1
}

impl CartLineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.qty)
    }
}

/// Product details read off a product card when it is added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDetails {
    /// `None` when the card carries no usable ID; such adds are ignored.
    pub id: Option<ProductId>,
    pub title: String,
    pub price: Price,
}

/// What [`Cart::add`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product had no ID; the cart is unchanged.
    Ignored,
    /// A new line item was appended with quantity 1.
    Appended,
    /// An existing line item's quantity was raised to `qty`.
    Incremented { qty: u32 },
}

impl AddOutcome {
    /// Whether the cart changed and must be persisted.
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Ordered list of line items with unique product IDs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from stored items, restoring its invariants.
    ///
    /// Items with an empty ID are dropped, a zero quantity counts as one,
    /// and repeated IDs are folded into the first occurrence.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut cart = Self::new();
        for mut item in items {
            if item.id.is_empty() {
                continue;
            }
            item.qty = item.qty.max(1);
            if let Some(existing) = cart.items.iter_mut().find(|i| i.id == item.id) {
                existing.qty = existing.qty.saturating_add(item.qty);
            } else {
                cart.items.push(item);
            }
        }
        cart
    }

    /// Decode a cart from its stored JSON form.
    ///
    /// Entries that are not line items (no `id`, a non-string `id`, not an
    /// object) are skipped; the rest of the cart survives.
    ///
    /// # Errors
    ///
    /// Returns the decode error when `json` is not an array. Callers treat
    /// that as an empty cart.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(Self::from_items(
            entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value::<CartLineItem>(entry).ok()),
        ))
    }

    /// Encode the cart as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Add one unit of `product`.
    ///
    /// A product without an ID is ignored. If the ID is already in the cart
    /// only its quantity changes; the stored title and price are kept even
    /// if the card now shows something different.
    pub fn add(&mut self, product: ProductDetails) -> AddOutcome {
        let Some(id) = product.id else {
            return AddOutcome::Ignored;
        };

        if let Some(existing) = self.items.iter_mut().find(|item| item.id == id) {
            existing.qty = existing.qty.saturating_add(1);
            return AddOutcome::Incremented { qty: existing.qty };
        }

        self.items.push(CartLineItem {
            id,
            title: product.title,
            price: product.price,
            qty: 1,
        });
        AddOutcome::Appended
    }

    /// Line items in first-add order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct products.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.qty))
    }

    /// Sum of every line total.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }
}
