//! Route table for the invoice service

use super::handlers::{AppState, create_invoice, delete_invoice, list_invoices, update_invoice};
use axum::{
    Json, Router,
    routing::{get, post, put},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// Build the full router
///
/// Routes, relative to the configured listing path `{listing}`:
/// - GET /health, GET /healthz - Liveness probe
/// - GET {listing} - Cached invoice listing
/// - POST {listing} - Create an invoice
/// - POST {listing}/{id}/edit, PUT {listing}/{id} - Update an invoice
/// - POST {listing}/{id}/delete, DELETE {listing}/{id} - Delete an invoice
pub fn build_router(state: AppState, custom_routes: Vec<Router>) -> Router {
    let listing = state.actions.listing_path().to_string();

    let mut app = health_routes().merge(invoice_routes(&listing).with_state(state));

    for custom_router in custom_routes {
        app = app.merge(custom_router);
    }

    app.layer(TraceLayer::new_for_http())
}

fn invoice_routes(listing: &str) -> Router<AppState> {
    Router::new()
        .route(listing, get(list_invoices).post(create_invoice))
        .route(
            &format!("{}/{{id}}", listing),
            put(update_invoice).delete(delete_invoice),
        )
        .route(&format!("{}/{{id}}/edit", listing), post(update_invoice))
        .route(&format!("{}/{{id}}/delete", listing), post(delete_invoice))
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "invoice-actions"
    }))
}
