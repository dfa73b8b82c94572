//! Page element port.
//!
//! Controllers never query the page themselves. They are handed the
//! elements they manage (see [`crate::markup`]) and drive them through the
//! [`Element`] trait. The browser implementation wraps `web_sys` elements;
//! [`MemoryElement`] is a headless stand-in used natively and in tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// The operations the storefront performs on a page element.
///
/// Elements are handles: cloning one yields another handle to the same
/// element, and mutation goes through `&self`.
pub trait Element: Clone {
    /// Value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    /// Text content of the element and its descendants.
    fn text(&self) -> String;

    /// Replace the element's content with `text`.
    fn set_text(&self, text: &str);

    /// Set the `hidden` property.
    fn set_hidden(&self, hidden: bool);

    /// Set the `disabled` property. Ignored by elements that have none.
    fn set_disabled(&self, disabled: bool);

    /// Add or remove one class.
    fn set_class(&self, class: &str, present: bool);

    /// Show the element with its stylesheet display, or hide it with
    /// `display: none`.
    fn set_displayed(&self, displayed: bool);

    /// Remove all children.
    fn clear_children(&self);

    /// Append a list item built from text nodes.
    fn append_list_item(&self, item: &ListItem);

    /// Reset a form's fields. Ignored by non-form elements.
    fn reset_form(&self);
}

/// A `<li>` made of classed `<span>`s, each holding plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub class: String,
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub class: String,
    pub text: String,
}

impl Span {
    pub fn new(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: text.into(),
        }
    }
}

/// Headless element.
///
/// Records every mutation so tests can assert on the resulting page state.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    node: Rc<RefCell<MemoryNode>>,
}

#[derive(Debug)]
struct MemoryNode {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    hidden: bool,
    disabled: bool,
    displayed: bool,
    children: Vec<ListItem>,
    fields: BTreeMap<String, String>,
}

impl Default for MemoryNode {
    fn default() -> Self {
        Self {
            attributes: BTreeMap::new(),
            classes: BTreeSet::new(),
            text: String::new(),
            hidden: false,
            disabled: false,
            displayed: true,
            children: Vec::new(),
            fields: BTreeMap::new(),
        }
    }
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder: set the text content.
    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Builder: add a form field with its current value.
    #[must_use]
    pub fn with_field(self, name: &str, value: &str) -> Self {
        self.node
            .borrow_mut()
            .fields
            .insert(name.to_owned(), value.to_owned());
        self
    }

    /// Simulate the visitor typing into a form field.
    pub fn fill_field(&self, name: &str, value: &str) {
        self.node
            .borrow_mut()
            .fields
            .insert(name.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<String> {
        self.node.borrow().fields.get(name).cloned()
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.node.borrow().hidden
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.node.borrow().disabled
    }

    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.node.borrow().displayed
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.node.borrow().classes.contains(class)
    }

    /// List items appended since the last clear.
    #[must_use]
    pub fn children(&self) -> Vec<ListItem> {
        self.node.borrow().children.clone()
    }

    /// Whether two handles refer to the same element.
    #[must_use]
    pub fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.node.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.node
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn text(&self) -> String {
        let node = self.node.borrow();
        let mut text = node.text.clone();
        for span in node.children.iter().flat_map(|item| &item.spans) {
            text.push_str(&span.text);
        }
        text
    }

    fn set_text(&self, text: &str) {
        let mut node = self.node.borrow_mut();
        node.children.clear();
        text.clone_into(&mut node.text);
    }

    fn set_hidden(&self, hidden: bool) {
        self.node.borrow_mut().hidden = hidden;
    }

    fn set_disabled(&self, disabled: bool) {
        self.node.borrow_mut().disabled = disabled;
    }

    fn set_class(&self, class: &str, present: bool) {
        let mut node = self.node.borrow_mut();
        if present {
            node.classes.insert(class.to_owned());
        } else {
            node.classes.remove(class);
        }
    }

    fn set_displayed(&self, displayed: bool) {
        self.node.borrow_mut().displayed = displayed;
    }

    fn clear_children(&self) {
        let mut node = self.node.borrow_mut();
        node.children.clear();
        node.text.clear();
    }

    fn append_list_item(&self, item: &ListItem) {
        self.node.borrow_mut().children.push(item.clone());
    }

    fn reset_form(&self) {
        for value in self.node.borrow_mut().fields.values_mut() {
            value.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let el = MemoryElement::new().with_attr("data-lang", "pt");
        let handle = el.clone();
        el.set_hidden(true);
        el.set_class("active", true);

        assert!(handle.is_hidden());
        assert!(handle.has_class("active"));
        assert!(handle.same_node(&el));
        assert!(!handle.same_node(&MemoryElement::new()));
    }

    #[test]
    fn test_set_text_replaces_children() {
        let list = MemoryElement::new();
        list.append_list_item(&ListItem {
            class: "cart-item".to_string(),
            spans: vec![Span::new("cart-item-title", "Carta")],
        });
        assert_eq!(list.text(), "Carta");

        list.set_text("3");
        assert!(list.children().is_empty());
        assert_eq!(list.text(), "3");
    }

    #[test]
    fn test_reset_form_blanks_fields() {
        let form = MemoryElement::new()
            .with_field("name", "Ana")
            .with_field("message", "Olá");
        form.reset_form();
        assert_eq!(form.field("name").as_deref(), Some(""));
        assert_eq!(form.field("message").as_deref(), Some(""));
    }

    #[test]
    fn test_displayed_by_default() {
        let card = MemoryElement::new();
        assert!(card.is_displayed());
        card.set_displayed(false);
        assert!(!card.is_displayed());
    }
}
