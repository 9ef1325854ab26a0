//! Axum extractor for form submissions
//!
//! Accepts `application/x-www-form-urlencoded` (browser forms) and
//! `application/json` (API clients) and yields a [`FormData`] either way.

use crate::core::error::{InvoiceError, RequestError};
use crate::core::form::FormData;
use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;

/// Where a submission came from, which decides how failures are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    /// URL-encoded form post; failures render as HTML
    Browser,
    /// JSON body; failures render as JSON
    Api,
}

/// A decoded form submission
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_invoice(
///     State(state): State<AppState>,
///     submission: Submission,
/// ) -> Response {
///     let outcome = state.actions.create_invoice(&submission.form).await;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Submission {
    pub form: FormData,
    pub kind: SubmissionKind,
}

impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = InvoiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(body): Json<Value> = Json::from_request(req, state)
                .await
                .map_err(|e| RequestError::InvalidBody {
                    message: e.body_text(),
                })?;

            let form = FormData::from_json(body).ok_or_else(|| RequestError::InvalidBody {
                message: "expected a JSON object".to_string(),
            })?;

            return Ok(Self {
                form,
                kind: SubmissionKind::Api,
            });
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs): Form<Vec<(String, String)>> = Form::from_request(req, state)
                .await
                .map_err(|e| RequestError::InvalidBody {
                    message: e.body_text(),
                })?;

            return Ok(Self {
                form: FormData::from_pairs(pairs),
                kind: SubmissionKind::Browser,
            });
        }

        Err(RequestError::UnsupportedMediaType { content_type }.into())
    }
}
