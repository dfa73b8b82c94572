//! Integration tests for theme and language preferences.

use love_letters_core::{Lang, Theme};
use love_letters_storefront::dom::Element;
use love_letters_storefront::storage::{KeyValueStore, MemoryStore};

use love_letters_integration_tests::{PageOptions, TestPage};

fn page() -> TestPage {
    TestPage::new(&PageOptions::default())
}

// =============================================================================
// Theme
// =============================================================================

#[test]
fn test_theme_defaults_to_light() {
    let store = MemoryStore::new();
    let page = page();
    let app = page.load(&store);

    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(page.root.attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(store.get("ll-theme"), None);
}

#[test]
fn test_theme_toggle_twice_round_trips() {
    let store = MemoryStore::new();
    let page = page();
    let mut app = page.load(&store);

    app.toggle_theme();
    assert_eq!(page.root.attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(store.get("ll-theme").as_deref(), Some("dark"));

    app.toggle_theme();
    assert_eq!(page.root.attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(store.get("ll-theme").as_deref(), Some("light"));
}

#[test]
fn test_stored_theme_applied_on_load() {
    let store = MemoryStore::with_entries([("ll-theme", "dark")]);
    let page = page();
    let app = page.load(&store);

    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(page.root.attribute("data-theme").as_deref(), Some("dark"));
}

#[test]
fn test_unknown_stored_theme_falls_back() {
    let store = MemoryStore::with_entries([("ll-theme", "DARK")]);
    let page = page();
    let _app = page.load(&store);

    assert_eq!(page.root.attribute("data-theme").as_deref(), Some("light"));
}

// =============================================================================
// Language
// =============================================================================

#[test]
fn test_language_defaults_to_portuguese() {
    let store = MemoryStore::new();
    let page = page();
    let app = page.load(&store);

    assert_eq!(app.lang(), Lang::Pt);
    assert_eq!(page.root.attribute("data-lang").as_deref(), Some("pt"));
    assert!(!page.pt_text.is_hidden());
    assert!(page.en_text.is_hidden());
    assert_eq!(page.lang_toggle.text(), "PT");
}

#[test]
fn test_language_toggle_and_back() {
    let store = MemoryStore::new();
    let page = page();
    let mut app = page.load(&store);

    app.toggle_lang();
    assert_eq!(page.root.attribute("data-lang").as_deref(), Some("en"));
    assert!(page.pt_text.is_hidden());
    assert!(!page.en_text.is_hidden());
    assert_eq!(page.lang_toggle.text(), "EN");
    assert_eq!(store.get("ll-lang").as_deref(), Some("en"));

    app.toggle_lang();
    assert!(!page.pt_text.is_hidden());
    assert!(page.en_text.is_hidden());
    assert_eq!(page.lang_toggle.text(), "PT");
    assert_eq!(store.get("ll-lang").as_deref(), Some("pt"));
}

#[test]
fn test_language_survives_reload() {
    let store = MemoryStore::new();
    page().load(&store).toggle_lang();

    let page = page();
    let app = page.load(&store);
    assert_eq!(app.lang(), Lang::En);
    assert!(page.pt_text.is_hidden());
    assert!(!page.en_text.is_hidden());
}

#[test]
fn test_preferences_are_independent() {
    let store = MemoryStore::new();
    let page = page();
    let mut app = page.load(&store);

    app.toggle_lang();
    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(store.get("ll-theme"), None);
    assert!(app.cart().is_empty());
}
