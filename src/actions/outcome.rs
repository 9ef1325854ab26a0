//! What a mutation handler reports back to its caller

use crate::core::validation::FieldErrors;
use serde::{Deserialize, Serialize};

/// The form state a UI renders after a failed submission
///
/// Serializes as `{ "errors"?: {field: [message]}, "message"?: string }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionState {
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }

    /// Messages for one field, if it failed validation
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.as_ref().and_then(|errors| errors.get(field))
    }
}

/// Result of one create/update/delete invocation
///
/// Navigation is not performed by the handler: on success it names the path the
/// caller should move the client to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The statement ran and the listing was revalidated
    Success { redirect_to: Option<String> },

    /// The submission was rejected before any I/O
    ValidationFailure(ActionState),

    /// The store raised; nothing was revalidated
    PersistenceFailure(ActionState),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success { .. })
    }

    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            ActionOutcome::Success { redirect_to } => redirect_to.as_deref(),
            _ => None,
        }
    }

    /// The failure state, `None` on success
    pub fn state(&self) -> Option<&ActionState> {
        match self {
            ActionOutcome::Success { .. } => None,
            ActionOutcome::ValidationFailure(state) | ActionOutcome::PersistenceFailure(state) => {
                Some(state)
            }
        }
    }
}
