//! Language controller: root attribute, tagged-element visibility, and the
//! toggle button label.

use tracing::{debug, instrument};

use crate::dom::Element;
use crate::state::AppState;
use crate::storage::KeyValueStore;

/// Shows only the content written in the current language.
#[derive(Debug, Clone)]
pub struct LanguageController<E> {
    root: E,
    toggle: Option<E>,
    tagged: Vec<E>,
    attr: String,
}

impl<E: Element> LanguageController<E> {
    /// `tagged` are the elements carrying `attr`; each is visible only
    /// while its tag equals the current language.
    pub fn new(root: E, toggle: Option<E>, tagged: Vec<E>, attr: impl Into<String>) -> Self {
        Self {
            root,
            toggle,
            tagged,
            attr: attr.into(),
        }
    }

    /// Apply the current language to the page. Idempotent.
    pub fn apply<S: KeyValueStore>(&self, state: &AppState<S>) {
        let lang = state.lang();
        self.root.set_attribute(&self.attr, lang.as_str());

        for el in &self.tagged {
            // Tags are compared exactly; "EN" never matches "en".
            if let Some(tag) = el.attribute(&self.attr) {
                el.set_hidden(tag != lang.as_str());
            }
        }

        if let Some(toggle) = &self.toggle {
            toggle.set_text(lang.label());
        }
    }

    /// Flip, persist, and re-apply the language.
    #[instrument(skip_all)]
    pub fn toggle<S: KeyValueStore>(&self, state: &mut AppState<S>) {
        let lang = state.toggle_lang();
        debug!(%lang, "Language toggled");
        self.apply(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageKeys;
    use crate::dom::MemoryElement;
    use crate::storage::MemoryStore;

    struct Page {
        root: MemoryElement,
        button: MemoryElement,
        pt: MemoryElement,
        en: MemoryElement,
        shouty: MemoryElement,
    }

    fn page() -> (Page, LanguageController<MemoryElement>) {
        let page = Page {
            root: MemoryElement::new(),
            button: MemoryElement::new(),
            pt: MemoryElement::new().with_attr("data-lang", "pt"),
            en: MemoryElement::new().with_attr("data-lang", "en"),
            shouty: MemoryElement::new().with_attr("data-lang", "EN"),
        };
        let controller = LanguageController::new(
            page.root.clone(),
            Some(page.button.clone()),
            vec![page.pt.clone(), page.en.clone(), page.shouty.clone()],
            "data-lang",
        );
        (page, controller)
    }

    #[test]
    fn test_apply_default_language() {
        let (page, controller) = page();
        let state = AppState::load(MemoryStore::new(), StorageKeys::default());
        controller.apply(&state);

        assert_eq!(page.root.attribute("data-lang").as_deref(), Some("pt"));
        assert!(!page.pt.is_hidden());
        assert!(page.en.is_hidden());
        assert!(page.shouty.is_hidden());
        assert_eq!(page.button.text(), "PT");
    }

    #[test]
    fn test_toggle_flips_visibility_and_back() {
        let (page, controller) = page();
        let store = MemoryStore::new();
        let mut state = AppState::load(store.clone(), StorageKeys::default());
        controller.apply(&state);

        controller.toggle(&mut state);
        assert!(page.pt.is_hidden());
        assert!(!page.en.is_hidden());
        assert!(page.shouty.is_hidden());
        assert_eq!(page.button.text(), "EN");
        assert_eq!(store.get("ll-lang").as_deref(), Some("en"));

        controller.toggle(&mut state);
        assert!(!page.pt.is_hidden());
        assert!(page.en.is_hidden());
        assert_eq!(page.button.text(), "PT");
        assert_eq!(store.get("ll-lang").as_deref(), Some("pt"));
    }

    #[test]
    fn test_without_toggle_button() {
        let root = MemoryElement::new();
        let controller = LanguageController::new(root.clone(), None, Vec::new(), "data-lang");
        let store = MemoryStore::with_entries([("ll-lang", "en")]);
        controller.apply(&AppState::load(store, StorageKeys::default()));
        assert_eq!(root.attribute("data-lang").as_deref(), Some("en"));
    }
}
