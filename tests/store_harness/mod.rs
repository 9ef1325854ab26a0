//! Shared test harness for invoice store backends
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod invoice_store_tests;

use chrono::NaiveDate;
use invoices::core::invoice::{InvoiceChanges, InvoiceStatus, NewInvoice};

/// Build a `NewInvoice` dated `2024-03-{day}`
pub fn new_invoice(customer_id: &str, amount: i64, status: InvoiceStatus, day: u32) -> NewInvoice {
    NewInvoice {
        customer_id: customer_id.to_string(),
        amount,
        status,
        date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
    }
}

pub fn changes(customer_id: &str, amount: i64, status: InvoiceStatus) -> InvoiceChanges {
    InvoiceChanges {
        customer_id: customer_id.to_string(),
        amount,
        status,
    }
}
