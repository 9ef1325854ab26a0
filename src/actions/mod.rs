//! Invoice mutation handlers

pub mod outcome;
pub mod service;

pub use outcome::{ActionOutcome, ActionState};
pub use service::InvoiceActions;
