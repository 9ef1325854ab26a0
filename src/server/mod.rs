//! HTTP surface for the invoice handlers
//!
//! This module provides a `ServerBuilder` that registers:
//! - Health routes
//! - The cached invoice listing
//! - Create, update and delete routes backed by [`InvoiceActions`](crate::actions::InvoiceActions)

pub mod builder;
pub mod extract;
pub mod handlers;
pub mod page_cache;
pub mod router;

pub use builder::ServerBuilder;
pub use extract::{Submission, SubmissionKind};
pub use handlers::AppState;
pub use page_cache::{CachedPage, PageCache};
pub use router::build_router;
