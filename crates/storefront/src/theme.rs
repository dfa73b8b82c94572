//! Theme controller: light/dark attribute on the document root.

use tracing::{debug, instrument};

use crate::dom::Element;
use crate::state::AppState;
use crate::storage::KeyValueStore;

/// Applies the current theme to the root element.
#[derive(Debug, Clone)]
pub struct ThemeController<E> {
    root: E,
    attr: String,
}

impl<E: Element> ThemeController<E> {
    pub fn new(root: E, attr: impl Into<String>) -> Self {
        Self {
            root,
            attr: attr.into(),
        }
    }

    /// Write the current theme to the root attribute. Idempotent.
    pub fn apply<S: KeyValueStore>(&self, state: &AppState<S>) {
        self.root.set_attribute(&self.attr, state.theme().as_str());
    }

    /// Flip, persist, and re-apply the theme.
    #[instrument(skip_all)]
    pub fn toggle<S: KeyValueStore>(&self, state: &mut AppState<S>) {
        let theme = state.toggle_theme();
        debug!(%theme, "Theme toggled");
        self.apply(state);
    }
}
