//! Database collaborator for invoice rows

use crate::core::error::StoreError;
use crate::core::invoice::{Invoice, InvoiceChanges, NewInvoice};
use async_trait::async_trait;

/// Persistence for the `invoices` table
///
/// Each mutating call issues exactly one parameterized statement. Updating or
/// deleting an id that does not exist is not an error: zero rows are affected.
/// Concurrency between calls is whatever the backend guarantees.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// `INSERT INTO invoices (customer_id, amount, status, date)`, returning the new id
    async fn insert(&self, invoice: NewInvoice) -> Result<String, StoreError>;

    /// `UPDATE invoices SET customer_id, amount, status WHERE id`
    async fn update(&self, id: &str, changes: InvoiceChanges) -> Result<(), StoreError>;

    /// `DELETE FROM invoices WHERE id`
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// All invoices, newest date first
    async fn list(&self) -> Result<Vec<Invoice>, StoreError>;
}
