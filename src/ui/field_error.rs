//! Inline validation messages
//!
//! The container is always emitted, even with no messages, so that screen
//! readers keep announcing the same polite live region as errors come and go.

use crate::actions::ActionState;
use crate::core::validation::schema::{AMOUNT, CUSTOMER_ID, STATUS};
use tera::{Context, Tera};

const TEMPLATE: &str = concat!(
    r#"<div id="{{ id }}" aria-live="polite" aria-atomic="true">"#,
    r#"{% for error in errors %}<p class="mt-2 text-sm text-red-500">{{ error }}</p>{% endfor %}"#,
    "</div>",
);

/// Element id of each form field's error container
pub const FIELD_ERROR_IDS: [(&str, &str); 3] = [
    (CUSTOMER_ID, "customer-error"),
    (AMOUNT, "amount-error"),
    (STATUS, "status-error"),
];

/// Element id of the form-level message container
pub const FORM_ERROR_ID: &str = "form-error";

/// Error messages for one field, rendered as a live region
#[derive(Debug, Clone, Copy)]
pub struct FieldError<'a> {
    id: &'a str,
    errors: Option<&'a [String]>,
}

impl<'a> FieldError<'a> {
    pub fn new(id: &'a str, errors: Option<&'a [String]>) -> Self {
        Self { id, errors }
    }

    /// One `<p>` per message, in order, inside the container. Text is HTML-escaped.
    pub fn render(&self) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("id", self.id);
        context.insert("errors", self.errors.unwrap_or(&[]));
        Tera::one_off(TEMPLATE, &context, true)
    }
}

/// Render a failed submission: one container per form field, then the form message
pub fn render_action_state(state: &ActionState) -> Result<String, tera::Error> {
    let mut html = String::new();
    for (field, id) in FIELD_ERROR_IDS {
        html.push_str(&FieldError::new(id, state.field_errors(field)).render()?);
    }
    let message = state.message.as_ref().map(std::slice::from_ref);
    html.push_str(&FieldError::new(FORM_ERROR_ID, message).render()?);
    Ok(html)
}
