//! The invoice create/update form schema

use super::validators;
use super::{FieldErrors, FieldRule};
use crate::core::form::FormInput;
use crate::core::invoice::{InvoiceForm, InvoiceStatus, to_minor_units};
use rust_decimal::Decimal;

pub const CUSTOMER_ID: &str = "customerId";
pub const AMOUNT: &str = "amount";
pub const STATUS: &str = "status";

pub const CUSTOMER_ID_MESSAGE: &str = "Please select a customer";
pub const AMOUNT_MESSAGE: &str = "Amount must be greater than 0";
pub const AMOUNT_TOO_LARGE_MESSAGE: &str = "Amount is too large";
pub const STATUS_MESSAGE: &str = "Please select an invoice status";

/// Rules for the fields a user submits when creating or editing an invoice.
///
/// `id` and `date` are assigned by the system and are not part of the form.
#[derive(Debug)]
pub struct InvoiceFormSchema {
    customer_id: FieldRule<String>,
    amount: FieldRule<Decimal>,
    status: FieldRule<InvoiceStatus>,
}

impl InvoiceFormSchema {
    pub fn new() -> Self {
        Self {
            customer_id: FieldRule::new(CUSTOMER_ID, validators::string(), CUSTOMER_ID_MESSAGE),
            amount: FieldRule::new(AMOUNT, validators::number(), AMOUNT_MESSAGE)
                .refine(validators::positive(), AMOUNT_MESSAGE)
                .refine(|n| to_minor_units(*n).is_some(), AMOUNT_TOO_LARGE_MESSAGE)
                .refine(|n| to_minor_units(*n).is_some_and(|c| c > 0), AMOUNT_MESSAGE),
            status: FieldRule::new(STATUS, validators::one_of::<InvoiceStatus>(), STATUS_MESSAGE),
        }
    }

    /// Field names in the order they are checked
    pub fn fields(&self) -> [&'static str; 3] {
        [
            self.customer_id.field(),
            self.amount.field(),
            self.status.field(),
        ]
    }

    /// Validate a submission without side effects.
    ///
    /// All three fields are checked; the error map contains every failing field.
    pub fn validate(&self, form: &dyn FormInput) -> Result<InvoiceForm, FieldErrors> {
        let mut errors = FieldErrors::new();

        let customer_id = self.customer_id.apply(form, &mut errors);
        let amount = self
            .amount
            .apply(form, &mut errors)
            .and_then(|amount| Some((amount, to_minor_units(amount)?)));
        let status = self.status.apply(form, &mut errors);

        match (customer_id, amount, status) {
            (Some(customer_id), Some((amount, amount_cents)), Some(status)) => Ok(InvoiceForm {
                customer_id,
                amount,
                amount_cents,
                status,
            }),
            _ => Err(errors),
        }
    }
}

impl Default for InvoiceFormSchema {
    fn default() -> Self {
        Self::new()
    }
}
