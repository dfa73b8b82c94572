//! Integration tests for the listing filters and the contact form.

use love_letters_storefront::dom::Element;
use love_letters_storefront::storage::{KeyValueStore, MemoryStore};
use pretty_assertions::assert_eq;

use love_letters_integration_tests::{PageOptions, TestPage, catalogue};

// =============================================================================
// Filters
// =============================================================================

fn filtered_listing() -> TestPage {
    TestPage::new(&PageOptions {
        products: catalogue(),
        filters: vec!["all", "cartas", "selos", "postais"],
        ..PageOptions::default()
    })
}

#[test]
fn test_filter_shows_only_matching_cards() {
    let store = MemoryStore::new();
    let page = filtered_listing();
    let app = page.load(&store);

    app.select_filter(1);
    assert_eq!(page.displayed_cards(), [true, false, true]);
    assert_eq!(page.active_filters(), [false, true, false, false]);

    app.select_filter(2);
    assert_eq!(page.displayed_cards(), [false, true, false]);
    assert_eq!(page.active_filters(), [false, false, true, false]);
}

#[test]
fn test_filter_all_restores_every_card() {
    let store = MemoryStore::new();
    let page = filtered_listing();
    let app = page.load(&store);

    app.select_filter(3);
    assert_eq!(page.displayed_cards(), [false, false, false]);

    app.select_filter(0);
    assert_eq!(page.displayed_cards(), [true, true, true]);
    assert_eq!(page.active_filters(), [true, false, false, false]);
}

#[test]
fn test_exactly_one_filter_active_after_each_click() {
    let store = MemoryStore::new();
    let page = filtered_listing();
    let app = page.load(&store);

    for index in [2, 2, 0, 3, 1] {
        app.select_filter(index);
        let active = page.active_filters();
        assert_eq!(active.iter().filter(|a| **a).count(), 1);
        assert!(active[index]);
    }
}

#[test]
fn test_filters_never_touch_the_cart() {
    let store = MemoryStore::new();
    let page = filtered_listing();
    let mut app = page.load(&store);
    app.add_to_cart(1);

    app.select_filter(1);
    assert_eq!(app.cart().total_quantity(), 1);
    assert_eq!(page.count(), "1");

    // Hidden cards can still be added.
    app.add_to_cart(1);
    assert_eq!(app.cart().total_quantity(), 2);
}

#[test]
fn test_page_without_filters_ignores_clicks() {
    let store = MemoryStore::new();
    let page = TestPage::new(&PageOptions {
        products: catalogue(),
        ..PageOptions::default()
    });
    let app = page.load(&store);

    app.select_filter(0);
    assert_eq!(page.displayed_cards(), [true, true, true]);
}

// =============================================================================
// Contact Form
// =============================================================================

fn contact_page() -> TestPage {
    TestPage::new(&PageOptions {
        contact_form: true,
        ..PageOptions::default()
    })
}

fn fill(page: &TestPage) {
    page.contact_form.fill_field("name", "Ana");
    page.contact_form.fill_field("email", "ana@example.com");
    page.contact_form.fill_field("message", "Gostaria de encomendar uma carta.");
}

#[test]
fn test_contact_submit_in_portuguese() {
    let store = MemoryStore::new();
    let page = contact_page();
    let app = page.load(&store);
    fill(&page);

    app.submit_contact();

    assert_eq!(page.form_status.text(), "Carta enviada. Respondemos em breve.");
    for field in ["name", "email", "message"] {
        assert_eq!(page.contact_form.field(field).as_deref(), Some(""));
    }
}

#[test]
fn test_contact_submit_follows_current_language() {
    let store = MemoryStore::new();
    let page = contact_page();
    let mut app = page.load(&store);
    app.toggle_lang();
    fill(&page);

    app.submit_contact();

    assert_eq!(page.form_status.text(), "Letter sent. We’ll reply soon.");
    assert_eq!(page.contact_form.field("message").as_deref(), Some(""));
}

#[test]
fn test_contact_submit_stores_nothing() {
    let store = MemoryStore::new();
    let page = contact_page();
    let app = page.load(&store);
    fill(&page);

    app.submit_contact();

    assert_eq!(store.get("ll-cart"), None);
    assert_eq!(store.get("ll-lang"), None);
}

#[test]
fn test_page_without_contact_form_ignores_submit() {
    let store = MemoryStore::new();
    let page = TestPage::new(&PageOptions::default());
    let app = page.load(&store);
    fill(&page);

    app.submit_contact();

    assert_eq!(page.form_status.text(), "");
    assert_eq!(page.contact_form.field("name").as_deref(), Some("Ana"));
}
