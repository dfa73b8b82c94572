//! Browser binding, exported to JavaScript via `wasm-bindgen`.
//!
//! The page loads the module and calls `start()` (or `startWithConfig(json)`
//! to override configuration). Startup waits for the document to finish
//! parsing, resolves the [`Markup`] from the configured selectors, and
//! attaches one listener per control. Every listener forwards to the shared
//! [`App`].

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Event, HtmlElement, HtmlFormElement};

use crate::app::App;
use crate::config::{Selectors, StorefrontConfig};
use crate::dom::{Element, ListItem};
use crate::markup::{
    AddToCartButton, CartPageMarkup, ContactFormMarkup, Markup, ProductCardMarkup,
};
use crate::storage::{KeyValueStore, StorageError};
use crate::telemetry;

type WebApp = App<LocalStorage, WebElement>;
type SharedApp = Rc<RefCell<WebApp>>;

/// Start the storefront with the default configuration.
///
/// # Errors
///
/// Never fails with the default configuration; the `Result` mirrors
/// `startWithConfig`.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    run(StorefrontConfig::default())
}

/// Start the storefront with a JSON configuration override.
///
/// # Errors
///
/// Throws if the configuration is malformed or invalid.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config_json: &str) -> Result<(), JsValue> {
    match StorefrontConfig::from_json(config_json) {
        Ok(config) => run(config),
        Err(e) => {
            telemetry::init(&StorefrontConfig::default().log_filter);
            error!(error = %e, "Rejected storefront configuration");
            Err(js_sys::Error::new(&e.to_string()).into())
        }
    }
}

fn run(config: StorefrontConfig) -> Result<(), JsValue> {
    telemetry::init(&config.log_filter);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document; storefront not started");
        return Ok(());
    };

    if document.ready_state() == DocumentReadyState::Loading {
        let ready_document = document.clone();
        let on_ready = Closure::once(move |_: Event| {
            if let Err(e) = boot(&config, &ready_document) {
                error!(error = ?e, "Storefront failed to start");
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
        return Ok(());
    }

    boot(&config, &document)
}

fn boot(config: &StorefrontConfig, document: &Document) -> Result<(), JsValue> {
    let Some(markup) = resolve_markup(document, &config.selectors) else {
        warn!("Document has no root element; storefront not started");
        return Ok(());
    };
    let bindings = Bindings::from_markup(&markup);

    let app = App::new(config, LocalStorage::open(), markup)
        .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
    app.start();

    bindings.attach(&Rc::new(RefCell::new(app)))
}

/// Element handles that receive event listeners, kept aside before the
/// markup is moved into the app.
struct Bindings {
    theme_toggle: Option<web_sys::Element>,
    lang_toggle: Option<web_sys::Element>,
    add_buttons: Vec<web_sys::Element>,
    filters: Vec<web_sys::Element>,
    contact_form: Option<web_sys::Element>,
}

impl Bindings {
    fn from_markup(markup: &Markup<WebElement>) -> Self {
        Self {
            theme_toggle: markup.theme_toggle.as_ref().map(|e| e.0.clone()),
            lang_toggle: markup.lang_toggle.as_ref().map(|e| e.0.clone()),
            add_buttons: markup.add_buttons.iter().map(|b| b.button.0.clone()).collect(),
            filters: markup.filters.iter().map(|f| f.0.clone()).collect(),
            contact_form: markup.contact_form.as_ref().map(|c| c.form.0.clone()),
        }
    }

    fn attach(self, app: &SharedApp) -> Result<(), JsValue> {
        if let Some(toggle) = &self.theme_toggle {
            listen(toggle, "click", app, |app, _| app.toggle_theme())?;
        }
        if let Some(toggle) = &self.lang_toggle {
            listen(toggle, "click", app, |app, _| app.toggle_lang())?;
        }
        for (index, button) in self.add_buttons.iter().enumerate() {
            listen(button, "click", app, move |app, _| {
                app.add_to_cart(index);
            })?;
        }
        for (index, filter) in self.filters.iter().enumerate() {
            listen(filter, "click", app, move |app, _| app.select_filter(index))?;
        }
        if let Some(form) = &self.contact_form {
            listen(form, "submit", app, |app, event| {
                event.prevent_default();
                app.submit_contact();
            })?;
        }

        debug!(
            add_buttons = self.add_buttons.len(),
            filters = self.filters.len(),
            "Event listeners attached"
        );
        Ok(())
    }
}

/// Attach a listener that runs `handler` against the shared app.
///
/// Listeners live as long as the page, so their closures are leaked.
fn listen(
    target: &web_sys::Element,
    event: &str,
    app: &SharedApp,
    handler: impl Fn(&mut WebApp, &Event) + 'static,
) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    let event_name = event.to_owned();
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        match app.try_borrow_mut() {
            Ok(mut app) => handler(&mut *app, &event),
            Err(_) => warn!(event = %event_name, "Dropped re-entrant event"),
        }
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Resolve every element the controllers manage.
///
/// Returns `None` only when the document has no root element.
fn resolve_markup(document: &Document, s: &Selectors) -> Option<Markup<WebElement>> {
    let root = document.document_element()?;

    let add_buttons = query_all(document, &s.add_to_cart)
        .into_iter()
        .map(|button| {
            let card = button
                .closest(&s.product_card)
                .ok()
                .flatten()
                .map(|card| ProductCardMarkup {
                    link: query_in(&card, &s.product_link),
                    title: query_in(&card, &s.product_title),
                    price: query_in(&card, &s.product_price),
                });
            AddToCartButton {
                button: WebElement(button),
                card,
            }
        })
        .collect();

    let cart_page = query_one(document, &s.cart_items).map(|items| CartPageMarkup {
        items,
        empty: query_one(document, &s.cart_empty),
        subtotal: query_one(document, &s.cart_subtotal),
        total: query_one(document, &s.cart_total),
        checkout: query_one(document, &s.checkout),
    });

    let contact_form = query_one(document, &s.contact_form).map(|form| ContactFormMarkup {
        status: query_in(&form.0, &s.form_status),
        form,
    });

    Some(Markup {
        root: WebElement(root),
        theme_toggle: query_one(document, &s.theme_toggle),
        lang_toggle: query_one(document, &s.lang_toggle),
        lang_tagged: wrap_all(query_all(document, &s.lang_tagged())),
        cart_counts: wrap_all(query_all(document, &s.cart_count)),
        add_buttons,
        product_cards: wrap_all(query_all(document, &s.product_card)),
        filters: wrap_all(query_all(document, &s.filter)),
        cart_page,
        contact_form,
    })
}

fn query_all(document: &Document, selector: &str) -> Vec<web_sys::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            warn!(selector, error = ?e, "Invalid selector");
            return Vec::new();
        }
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

fn query_one(document: &Document, selector: &str) -> Option<WebElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .map(WebElement)
}

fn query_in(parent: &web_sys::Element, selector: &str) -> Option<WebElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .map(WebElement)
}

fn wrap_all(elements: Vec<web_sys::Element>) -> Vec<WebElement> {
    elements.into_iter().map(WebElement).collect()
}

/// A live DOM element.
#[derive(Debug, Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl Element for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            debug!(name, error = ?e, "Failed to set attribute");
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_hidden(&self, hidden: bool) {
        if let Some(html) = self.html() {
            html.set_hidden(hidden);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Err(e) = self.0.toggle_attribute_with_force("disabled", disabled) {
            debug!(error = ?e, "Failed to set disabled");
        }
    }

    fn set_class(&self, class: &str, present: bool) {
        if let Err(e) = self.0.class_list().toggle_with_force(class, present) {
            debug!(class, error = ?e, "Failed to toggle class");
        }
    }

    fn set_displayed(&self, displayed: bool) {
        let Some(html) = self.html() else {
            return;
        };
        let style = html.style();
        let result = if displayed {
            style.remove_property("display").map(drop)
        } else {
            style.set_property("display", "none")
        };
        if let Err(e) = result {
            debug!(error = ?e, "Failed to set display");
        }
    }

    fn clear_children(&self) {
        self.0.set_text_content(None);
    }

    fn append_list_item(&self, item: &ListItem) {
        let Some(document) = self.0.owner_document() else {
            return;
        };
        if let Err(e) = build_list_item(&document, item).and_then(|li| self.0.append_child(&li)) {
            debug!(error = ?e, "Failed to append list item");
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

fn build_list_item(document: &Document, item: &ListItem) -> Result<web_sys::Node, JsValue> {
    let li = document.create_element("li")?;
    li.set_class_name(&item.class);
    for span in &item.spans {
        let el = document.create_element("span")?;
        el.set_class_name(&span.class);
        el.set_text_content(Some(&span.text));
        li.append_child(&el)?;
    }
    Ok(li.into())
}

/// `window.localStorage`, or nothing when the browser withholds it.
#[derive(Debug, Clone)]
pub struct LocalStorage(Option<web_sys::Storage>);

impl LocalStorage {
    fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable; preferences will not persist");
        }
        Self(storage)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.0.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_owned(),
                message: format!("{e:?}"),
            })
    }
}
