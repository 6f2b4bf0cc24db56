//! Receipt points HTTP service.
//!
//! Thin axum front end over [`tally_common`]: one route scores a submitted
//! receipt and records the result, the other resolves a previously issued
//! identifier. All state lives in a single [`PointsStore`] constructed at
//! startup and passed to handlers through [`AppState`] — there is no ambient
//! global storage.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use tally_common::points;
use tally_common::receipt::Receipt;
use tally_common::store::PointsStore;

/// Shared server state, constructed once in `main`.
pub struct AppState {
    pub store: PointsStore,
}

// ─── API types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ReceiptResponse {
    id: String,
}

#[derive(Serialize)]
struct PointsResponse {
    points: u64,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    receipts: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

// ─── Handlers ────────────────────────────────────────────────────────────────

async fn process_receipt_handler(
    State(state): State<Arc<AppState>>,
    Json(receipt): Json<Receipt>,
) -> Json<ReceiptResponse> {
    let points = points::score(&receipt);
    let id = state.store.record(points);
    tracing::info!(%id, points, retailer = %receipt.retailer, "receipt processed");
    Json(ReceiptResponse { id: id.0 })
}

async fn points_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.lookup(&id) {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            tracing::warn!(%id, "lookup for unknown receipt");
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    message: format!("Receipt with ID {id} not found"),
                }),
            ))
        }
    }
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.store.len(),
    })
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the service router with permissive CORS applied.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}/points", get(points_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}
