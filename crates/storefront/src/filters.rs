//! Category filter for product listings.

use tracing::{debug, instrument};

use crate::config::Selectors;
use crate::dom::Element;

/// Shows the product cards of the selected category.
///
/// Purely presentational: the cart is never touched.
#[derive(Debug, Clone)]
pub struct FilterController<E> {
    filters: Vec<E>,
    cards: Vec<E>,
    filter_attr: String,
    category_attr: String,
    active_class: String,
    all: String,
}

impl<E: Element> FilterController<E> {
    /// Returns `None` when the page has no filter controls.
    pub fn new(filters: Vec<E>, cards: Vec<E>, selectors: &Selectors) -> Option<Self> {
        if filters.is_empty() {
            return None;
        }

        Some(Self {
            filters,
            cards,
            filter_attr: selectors.filter_attr.clone(),
            category_attr: selectors.category_attr.clone(),
            active_class: selectors.active_class.clone(),
            all: selectors.filter_all.clone(),
        })
    }

    /// Handle a click on filter control `index`.
    #[instrument(skip(self))]
    pub fn select(&self, index: usize) {
        let Some(selected) = self.filters.get(index) else {
            return;
        };

        for filter in &self.filters {
            filter.set_class(&self.active_class, false);
        }
        selected.set_class(&self.active_class, true);

        let category = selected.attribute(&self.filter_attr).unwrap_or_default();
        let mut shown = 0_usize;
        for card in &self.cards {
            let matches = category == self.all
                || card.attribute(&self.category_attr).as_deref() == Some(category.as_str());
            card.set_displayed(matches);
            shown += usize::from(matches);
        }

        debug!(%category, shown, total = self.cards.len(), "Filter applied");
    }
}
