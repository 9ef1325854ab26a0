//! In-memory implementation of InvoiceStore for testing and development

use crate::core::error::StoreError;
use crate::core::invoice::{Invoice, InvoiceChanges, NewInvoice};
use crate::core::store::InvoiceStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory invoice store
///
/// Useful for testing and development. Uses RwLock for thread-safe access and
/// UUID v4 strings as ids. Cloning shares the underlying table.
#[derive(Clone, Default)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<HashMap<String, Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `invoices`
    pub fn with_invoices(invoices: impl IntoIterator<Item = Invoice>) -> Self {
        let map = invoices
            .into_iter()
            .map(|invoice| (invoice.id.clone(), invoice))
            .collect();
        Self {
            invoices: Arc::new(RwLock::new(map)),
        }
    }

    /// Look up one invoice
    pub fn get(&self, id: &str) -> Result<Option<Invoice>, StoreError> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        Ok(invoices.get(id).cloned())
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, invoice: NewInvoice) -> Result<String, StoreError> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        let id = Uuid::new_v4().to_string();
        invoices.insert(
            id.clone(),
            Invoice {
                id: id.clone(),
                customer_id: invoice.customer_id,
                amount: invoice.amount,
                status: invoice.status,
                date: invoice.date,
            },
        );

        Ok(id)
    }

    async fn update(&self, id: &str, changes: InvoiceChanges) -> Result<(), StoreError> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        if let Some(invoice) = invoices.get_mut(id) {
            invoice.customer_id = changes.customer_id;
            invoice.amount = changes.amount;
            invoice.status = changes.status;
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        invoices.remove(id);

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        let mut all: Vec<Invoice> = invoices.values().cloned().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));

        Ok(all)
    }
}
