//! PostgreSQL storage backend using sqlx.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! invoice-actions = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! A single `invoices` table keyed by UUID v4 strings; amounts are stored as
//! integer minor units.

use crate::core::error::StoreError;
use crate::core::invoice::{Invoice, InvoiceChanges, NewInvoice};
use crate::core::store::InvoiceStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

const BACKEND: &str = "PostgreSQL";

/// Apply the `invoices` table (idempotent).
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id TEXT PRIMARY KEY,
            customer_id TEXT NOT NULL,
            amount BIGINT NOT NULL,
            status VARCHAR(32) NOT NULL,
            date DATE NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(query_error("ensure_schema"))?;

    Ok(())
}

fn query_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |e| StoreError::Query {
        backend: BACKEND,
        operation,
        message: e.to_string(),
    }
}

/// Invoice store backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// let store = PostgresInvoiceStore::connect("postgres://localhost/invoices", 5).await?;
/// ensure_schema(store.pool()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    /// Create a new `PostgresInvoiceStore` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `url`
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| StoreError::Connection {
                backend: BACKEND,
                message: e.to_string(),
            })?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    async fn insert(&self, invoice: NewInvoice) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO invoices (id, customer_id, amount, status, date) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&id)
        .bind(&invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&self.pool)
        .await
        .map_err(query_error("insert"))?;

        Ok(id)
    }

    async fn update(&self, id: &str, changes: InvoiceChanges) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE invoices \
             SET customer_id = $1, amount = $2, status = $3 \
             WHERE id = $4",
        )
        .bind(&changes.customer_id)
        .bind(changes.amount)
        .bind(changes.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(query_error("update"))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error("delete"))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        let rows = sqlx::query_as::<_, (String, String, i64, String, NaiveDate)>(
            "SELECT id, customer_id, amount, status, date \
             FROM invoices ORDER BY date DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_error("list"))?;

        rows.into_iter()
            .map(|(id, customer_id, amount, status, date)| {
                let status = status.parse().map_err(|e| StoreError::Integrity {
                    message: format!("invoice {}: {}", id, e),
                })?;
                Ok(Invoice {
                    id,
                    customer_id,
                    amount,
                    status,
                    date,
                })
            })
            .collect()
    }
}
