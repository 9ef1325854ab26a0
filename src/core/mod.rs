//! Core types and collaborator traits

pub mod clock;
pub mod error;
pub mod form;
pub mod invoice;
pub mod revalidate;
pub mod store;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, InvoiceError, RequestError, StoreError};
pub use form::{FormData, FormInput};
pub use invoice::{Invoice, InvoiceChanges, InvoiceForm, InvoiceStatus, NewInvoice};
pub use revalidate::PathRevalidator;
pub use store::InvoiceStore;
pub use validation::{FieldErrors, InvoiceFormSchema};
