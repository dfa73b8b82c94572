//! Core types for the Love Letters storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod preference;
pub mod price;

pub use cart::{AddOutcome, Cart, CartLineItem, ProductDetails};
pub use id::ProductId;
pub use preference::{Lang, Theme, UnknownPreference};
pub use price::Price;
