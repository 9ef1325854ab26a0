//! Server-rendered markup for form feedback

pub mod field_error;

pub use field_error::{FIELD_ERROR_IDS, FieldError, render_action_state};
