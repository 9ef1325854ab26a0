//! HTTP handlers for the invoice listing and its mutations
//!
//! The mutation handlers are thin: they decode the submission, call
//! [`InvoiceActions`] and translate the [`ActionOutcome`] into a response.

use super::extract::{Submission, SubmissionKind};
use super::page_cache::PageCache;
use crate::actions::{ActionOutcome, ActionState, InvoiceActions};
use crate::core::error::{InvoiceError, StoreError};
use crate::core::invoice::{Invoice, format_currency, format_date};
use crate::ui::render_action_state;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub actions: InvoiceActions,
    /// Also registered as the actions' revalidator
    pub page_cache: PageCache,
}

/// One row of the invoice listing
#[derive(Debug, Serialize)]
pub struct InvoiceRow {
    pub id: String,
    pub customer_id: String,
    /// Minor units
    pub amount: i64,
    pub formatted_amount: String,
    pub status: String,
    pub date: NaiveDate,
    pub formatted_date: String,
}

impl From<Invoice> for InvoiceRow {
    fn from(invoice: Invoice) -> Self {
        Self {
            formatted_amount: format_currency(invoice.amount),
            formatted_date: format_date(invoice.date),
            status: invoice.status.as_str().to_string(),
            id: invoice.id,
            customer_id: invoice.customer_id,
            amount: invoice.amount,
            date: invoice.date,
        }
    }
}

/// Render the listing body from the store
async fn render_listing(state: &AppState) -> Result<Value, StoreError> {
    let rows: Vec<InvoiceRow> = state
        .actions
        .store()
        .list()
        .await?
        .into_iter()
        .map(InvoiceRow::from)
        .collect();

    Ok(json!({
        "count": rows.len(),
        "invoices": rows,
    }))
}

/// GET {listing}
///
/// Served from the page cache until a mutation revalidates it.
pub async fn list_invoices(State(state): State<AppState>) -> Result<Json<Value>, InvoiceError> {
    let path = state.actions.listing_path().to_string();
    let page = state
        .page_cache
        .get_or_render(&path, || render_listing(&state))
        .await?;

    let mut body = page.body;
    if let Value::Object(map) = &mut body {
        map.insert("rendered_at".to_string(), json!(page.rendered_at));
    }
    Ok(Json(body))
}

/// POST {listing}
pub async fn create_invoice(State(state): State<AppState>, submission: Submission) -> Response {
    let outcome = state.actions.create_invoice(&submission.form).await;
    respond(outcome, submission.kind)
}

/// POST {listing}/{id}/edit, PUT {listing}/{id}
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    submission: Submission,
) -> Response {
    let outcome = state.actions.update_invoice(&id, &submission.form).await;
    respond(outcome, submission.kind)
}

/// POST {listing}/{id}/delete, DELETE {listing}/{id}
pub async fn delete_invoice(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let outcome = state.actions.delete_invoice(&id).await;
    respond(outcome, SubmissionKind::Api)
}

/// Map an outcome to HTTP
///
/// | Outcome                              | Status |
/// |--------------------------------------|--------|
/// | `Success { redirect_to: Some(..) }`  | 303    |
/// | `Success { redirect_to: None }`      | 204    |
/// | `ValidationFailure`                  | 422    |
/// | `PersistenceFailure`                 | 500    |
fn respond(outcome: ActionOutcome, kind: SubmissionKind) -> Response {
    match outcome {
        ActionOutcome::Success {
            redirect_to: Some(path),
        } => Redirect::to(&path).into_response(),
        ActionOutcome::Success { redirect_to: None } => StatusCode::NO_CONTENT.into_response(),
        ActionOutcome::ValidationFailure(state) => {
            failure(StatusCode::UNPROCESSABLE_ENTITY, state, kind)
        }
        ActionOutcome::PersistenceFailure(state) => {
            failure(StatusCode::INTERNAL_SERVER_ERROR, state, kind)
        }
    }
}

fn failure(status: StatusCode, state: ActionState, kind: SubmissionKind) -> Response {
    match kind {
        SubmissionKind::Api => (status, Json(state)).into_response(),
        SubmissionKind::Browser => match render_action_state(&state) {
            Ok(markup) => (status, Html(markup)).into_response(),
            Err(e) => InvoiceError::Render(e.to_string()).into_response(),
        },
    }
}
