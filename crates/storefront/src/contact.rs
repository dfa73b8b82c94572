//! Contact form handler.
//!
//! Submissions are simulated: the visitor gets a confirmation in their
//! language and the form is cleared, but nothing is sent anywhere.

use love_letters_core::Lang;
use tracing::{info, instrument};

use crate::config::ContactMessages;
use crate::dom::Element;
use crate::markup::ContactFormMarkup;

#[derive(Debug, Clone)]
pub struct ContactForm<E> {
    markup: ContactFormMarkup<E>,
    messages: ContactMessages,
}

impl<E: Element> ContactForm<E> {
    pub const fn new(markup: ContactFormMarkup<E>, messages: ContactMessages) -> Self {
        Self { markup, messages }
    }

    /// Handle a submit. The caller has already suppressed navigation.
    #[instrument(skip(self))]
    pub fn submit(&self, lang: Lang) {
        if let Some(status) = &self.markup.status {
            status.set_text(self.messages.for_lang(lang));
        }
        self.markup.form.reset_form();
        info!("Contact form submitted");
    }
}
