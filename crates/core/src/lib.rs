//! Love Letters Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront runtime:
//! product IDs, euro prices, visitor preferences, and the cart itself.
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no storage, no page
//! access, no logging. This keeps it lightweight and testable anywhere.
//!
//! # Modules
//!
//! - [`types`] - IDs, prices, preferences, and the cart model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
