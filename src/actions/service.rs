//! Create, update and delete handlers for invoices
//!
//! Each handler is one linear flow:
//!
//! ```text
//! validate ──✗──▶ ValidationFailure            (no I/O)
//!    │
//!    ▼
//! store statement ──✗──▶ PersistenceFailure   (logged, nothing revalidated)
//!    │
//!    ▼
//! revalidate listing ──▶ Success { redirect_to }
//! ```

use super::outcome::{ActionOutcome, ActionState};
use crate::config::DEFAULT_LISTING_PATH;
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::StoreError;
use crate::core::form::FormInput;
use crate::core::invoice::{InvoiceChanges, InvoiceStatus, NewInvoice};
use crate::core::revalidate::PathRevalidator;
use crate::core::store::InvoiceStore;
use crate::core::validation::InvoiceFormSchema;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn verb(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    fn validation_message(&self) -> String {
        format!("Missing fields. Failed to {} invoice.", self.verb())
    }

    fn database_message(&self) -> String {
        format!("Database Error: Failed to {} invoice.", self.verb())
    }
}

/// A submission ready to bind: amount already converted to minor units
struct Validated {
    customer_id: String,
    amount: i64,
    status: InvoiceStatus,
}

/// The invoice mutation handlers and their collaborators
///
/// # Example
///
/// ```rust,ignore
/// let actions = InvoiceActions::new(Arc::new(InMemoryInvoiceStore::new()), page_cache);
///
/// match actions.create_invoice(&form).await {
///     ActionOutcome::Success { redirect_to } => { /* 303 to redirect_to */ }
///     ActionOutcome::ValidationFailure(state) => { /* re-render the form with state */ }
///     ActionOutcome::PersistenceFailure(state) => { /* show state.message */ }
/// }
/// ```
#[derive(Clone)]
pub struct InvoiceActions {
    store: Arc<dyn InvoiceStore>,
    revalidator: Arc<dyn PathRevalidator>,
    clock: Arc<dyn Clock>,
    schema: Arc<InvoiceFormSchema>,
    listing_path: Arc<str>,
}

impl InvoiceActions {
    /// Handlers using the system clock and the default listing path
    pub fn new(store: Arc<dyn InvoiceStore>, revalidator: Arc<dyn PathRevalidator>) -> Self {
        Self {
            store,
            revalidator,
            clock: Arc::new(SystemClock),
            schema: Arc::new(InvoiceFormSchema::new()),
            listing_path: Arc::from(DEFAULT_LISTING_PATH),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Path revalidated (and redirected to) after a successful mutation
    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = Arc::from(path.into());
        self
    }

    pub fn listing_path(&self) -> &str {
        &self.listing_path
    }

    pub fn store(&self) -> &Arc<dyn InvoiceStore> {
        &self.store
    }

    /// Validate `form` and insert a new invoice dated today (UTC).
    pub async fn create_invoice(&self, form: &dyn FormInput) -> ActionOutcome {
        let op = Operation::Create;
        let valid = match self.validate(op, form) {
            Ok(valid) => valid,
            Err(outcome) => return outcome,
        };

        let invoice = NewInvoice {
            customer_id: valid.customer_id,
            amount: valid.amount,
            status: valid.status,
            date: self.clock.today(),
        };

        match self.store.insert(invoice).await {
            Ok(id) => {
                tracing::info!(invoice_id = %id, "invoice created");
                self.revalidated(op).await
            }
            Err(e) => self.persistence_failure(op, None, e),
        }
    }

    /// Validate `form` and rewrite customer, amount and status of invoice `id`.
    ///
    /// The creation date is left untouched.
    pub async fn update_invoice(&self, id: &str, form: &dyn FormInput) -> ActionOutcome {
        let op = Operation::Update;
        let valid = match self.validate(op, form) {
            Ok(valid) => valid,
            Err(outcome) => return outcome,
        };

        let changes = InvoiceChanges {
            customer_id: valid.customer_id,
            amount: valid.amount,
            status: valid.status,
        };

        match self.store.update(id, changes).await {
            Ok(()) => {
                tracing::info!(invoice_id = %id, "invoice updated");
                self.revalidated(op).await
            }
            Err(e) => self.persistence_failure(op, Some(id), e),
        }
    }

    /// Delete invoice `id`.
    ///
    /// The id is trusted as-is. On success the listing is revalidated but no
    /// redirect is requested: the caller is already showing the listing.
    pub async fn delete_invoice(&self, id: &str) -> ActionOutcome {
        let op = Operation::Delete;

        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(invoice_id = %id, "invoice deleted");
                self.revalidated(op).await
            }
            Err(e) => self.persistence_failure(op, Some(id), e),
        }
    }

    fn validate(&self, op: Operation, form: &dyn FormInput) -> Result<Validated, ActionOutcome> {
        let form = self.schema.validate(form).map_err(|errors| {
            tracing::debug!(
                operation = op.verb(),
                fields = ?errors.fields().collect::<Vec<_>>(),
                "invoice submission rejected"
            );
            ActionOutcome::ValidationFailure(ActionState::invalid(errors, op.validation_message()))
        })?;

        Ok(Validated {
            customer_id: form.customer_id,
            amount: form.amount_cents,
            status: form.status,
        })
    }

    async fn revalidated(&self, op: Operation) -> ActionOutcome {
        self.revalidator.revalidate(&self.listing_path).await;

        let redirect_to = match op {
            Operation::Create | Operation::Update => Some(self.listing_path.to_string()),
            Operation::Delete => None,
        };
        ActionOutcome::Success { redirect_to }
    }

    fn persistence_failure(
        &self,
        op: Operation,
        id: Option<&str>,
        error: StoreError,
    ) -> ActionOutcome {
        tracing::error!(
            operation = op.verb(),
            invoice_id = id.unwrap_or("-"),
            error = %error,
            "invoice statement failed"
        );
        ActionOutcome::PersistenceFailure(ActionState::message(op.database_message()))
    }
}
