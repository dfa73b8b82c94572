//! Cart page rendering.
//!
//! The summary is rendered once, when the page loads. There are no taxes or
//! shipping, so the total always equals the subtotal.

use love_letters_core::{Cart, Price};
use tracing::debug;

use crate::dom::{Element, ListItem, Span};
use crate::markup::CartPageMarkup;

/// Renders the cart into the cart page summary.
#[derive(Debug, Clone)]
pub struct CartPage<E> {
    markup: CartPageMarkup<E>,
    currency_symbol: String,
}

impl<E: Element> CartPage<E> {
    pub fn new(markup: CartPageMarkup<E>, currency_symbol: impl Into<String>) -> Self {
        Self {
            markup,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Replace the summary with the contents of `cart`.
    pub fn render(&self, cart: &Cart) {
        let m = &self.markup;
        m.items.clear_children();

        if cart.is_empty() {
            if let Some(empty) = &m.empty {
                empty.set_hidden(false);
            }
            if let Some(checkout) = &m.checkout {
                checkout.set_disabled(true);
            }
            debug!("Rendered empty cart");
            return;
        }

        if let Some(empty) = &m.empty {
            empty.set_hidden(true);
        }

        for item in cart.items() {
            m.items.append_list_item(&ListItem {
                class: "cart-item".to_owned(),
                spans: vec![
                    Span::new("cart-item-title", item.title.as_str()),
                    Span::new(
                        "cart-item-qty",
                        format!("{} × {}", item.qty, self.format_amount(item.price)),
                    ),
                ],
            });
        }

        let subtotal = self.format_amount(cart.subtotal());
        if let Some(el) = &m.subtotal {
            el.set_text(&subtotal);
        }
        if let Some(el) = &m.total {
            el.set_text(&subtotal);
        }
        if let Some(checkout) = &m.checkout {
            checkout.set_disabled(false);
        }

        debug!(items = cart.len(), %subtotal, "Rendered cart");
    }

    fn format_amount(&self, price: Price) -> String {
        format!("{price} {}", self.currency_symbol)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use love_letters_core::{ProductDetails, ProductId};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dom::MemoryElement;

    struct Summary {
        items: MemoryElement,
        empty: MemoryElement,
        subtotal: MemoryElement,
        total: MemoryElement,
        checkout: MemoryElement,
    }

    fn summary() -> (Summary, CartPage<MemoryElement>) {
        let s = Summary {
            items: MemoryElement::new(),
            empty: MemoryElement::new(),
            subtotal: MemoryElement::new(),
            total: MemoryElement::new(),
            checkout: MemoryElement::new(),
        };
        let page = CartPage::new(
            CartPageMarkup {
                items: s.items.clone(),
                empty: Some(s.empty.clone()),
                subtotal: Some(s.subtotal.clone()),
                total: Some(s.total.clone()),
                checkout: Some(s.checkout.clone()),
            },
            "€",
        );
        (s, page)
    }

    fn add(cart: &mut Cart, id: &str, title: &str, price: &str) {
        cart.add(ProductDetails {
            id: ProductId::parse(Some(id)),
            title: title.to_string(),
            price: Price::parse_display(price, "€"),
        });
    }

    #[test]
    fn test_empty_cart_shows_placeholder() {
        let (s, page) = summary();
        s.empty.set_hidden(true);
        page.render(&Cart::new());

        assert!(!s.empty.is_hidden());
        assert!(s.checkout.is_disabled());
        assert!(s.items.children().is_empty());
    }

    #[test]
    fn test_rows_and_totals() {
        let (s, page) = summary();
        let mut cart = Cart::new();
        add(&mut cart, "a", "Carta", "10");
        add(&mut cart, "b", "Selo", "2.50");
        add(&mut cart, "b", "Selo", "2.50");
        page.render(&cart);

        assert!(s.empty.is_hidden());
        assert!(!s.checkout.is_disabled());
        assert_eq!(
            s.items.children(),
            vec![
                ListItem {
                    class: "cart-item".to_string(),
                    spans: vec![
                        Span::new("cart-item-title", "Carta"),
                        Span::new("cart-item-qty", "1 × 10 €"),
                    ],
                },
                ListItem {
                    class: "cart-item".to_string(),
                    spans: vec![
                        Span::new("cart-item-title", "Selo"),
                        Span::new("cart-item-qty", "2 × 2.5 €"),
                    ],
                },
            ]
        );
        assert_eq!(s.subtotal.text(), "15 €");
        assert_eq!(s.total.text(), "15 €");
    }

    #[test]
    fn test_render_replaces_previous_rows() {
        let (s, page) = summary();
        let mut cart = Cart::new();
        add(&mut cart, "a", "Carta", "10");
        page.render(&cart);
        page.render(&cart);
        assert_eq!(s.items.children().len(), 1);
    }

    #[test]
    fn test_missing_optional_elements() {
        let items = MemoryElement::new();
        let page = CartPage::new(CartPageMarkup::new(items.clone()), "€");
        let mut cart = Cart::new();
        page.render(&cart);

        add(&mut cart, "a", "Carta", "10");
        page.render(&cart);
        assert_eq!(items.children().len(), 1);
    }
}
