//! Love Letters Storefront - client-side runtime.
//!
//! Everything the static storefront pages do in the browser: theme and
//! language toggles, a cart kept in `localStorage`, category filters, and a
//! simulated contact form.
//!
//! # Architecture
//!
//! - [`app::App`] owns the [`state::AppState`] and one controller per
//!   feature, each constructed with exactly the elements it manages
//!   ([`markup::Markup`]).
//! - Page access goes through the [`dom::Element`] port and storage through
//!   [`storage::KeyValueStore`], so every controller runs natively against
//!   [`dom::MemoryElement`] and [`storage::MemoryStore`].
//! - On `wasm32` the `web` module binds the runtime to the real page and
//!   exports `start()` / `startWithConfig(json)` to JavaScript.
//!
//! # Failure model
//!
//! Nothing a visitor does raises an error. Unreadable storage falls back to
//! defaults, missing markup leaves a feature unbound, and storage write
//! failures are logged and ignored.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart;
pub mod cart_page;
pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod filters;
pub mod language;
pub mod markup;
pub mod preferences;
pub mod state;
pub mod storage;
pub mod telemetry;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::App;
pub use config::StorefrontConfig;
pub use error::{AppError, Result};
