//! # Invoice Actions
//!
//! Server-side create, update and delete handlers for invoices, plus the HTTP
//! surface that exposes them.
//!
//! ## Features
//!
//! - **Validated Submissions**: Raw form input is checked field by field and
//!   every failure is reported at once
//! - **Exact Money Handling**: Amounts are converted to integer minor units
//!   with decimal arithmetic
//! - **Explicit Outcomes**: Handlers return an [`ActionOutcome`](actions::ActionOutcome)
//!   instead of navigating
//! - **Cache Revalidation**: Every successful mutation invalidates the invoice
//!   listing
//! - **Pluggable Storage**: In-memory store by default, PostgreSQL behind the
//!   `postgres` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use invoices::prelude::*;
//!
//! let config = AppConfig::from_yaml_file("invoices.yaml")?.with_env_overrides()?;
//! invoices::logging::init(&config.logging)?;
//!
//! ServerBuilder::new()
//!     .with_store(InMemoryInvoiceStore::new())
//!     .with_config(config)
//!     .serve()
//!     .await?;
//! ```

pub mod actions;
pub mod config;
pub mod core;
pub mod logging;
pub mod server;
pub mod storage;
pub mod ui;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Clock, FieldErrors, FixedClock, FormData, FormInput, Invoice, InvoiceChanges,
        InvoiceError, InvoiceForm, InvoiceFormSchema, InvoiceStatus, InvoiceStore,
        NewInvoice, PathRevalidator, StoreError, SystemClock,
    };

    // === Actions ===
    pub use crate::actions::{ActionOutcome, ActionState, InvoiceActions};

    // === Config ===
    pub use crate::config::{AppConfig, DEFAULT_LISTING_PATH};

    // === Server ===
    pub use crate::server::{AppState, PageCache, ServerBuilder};

    // === Storage ===
    pub use crate::storage::InMemoryInvoiceStore;

    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresInvoiceStore;

    // === UI ===
    pub use crate::ui::{FieldError, render_action_state};

    // === Re-exports ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use rust_decimal::Decimal;
    pub use serde_json::{Value, json};
}
