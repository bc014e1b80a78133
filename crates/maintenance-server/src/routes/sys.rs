//! Service routes: `/health`
//!
//! Liveness endpoint for load balancers and the CLI. Lives outside the
//! `/maintenance/` namespace but is registered in the route table like
//! everything else, so the table stays the single authority for every
//! served route.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use maintenance_core::route::RouteName;

use crate::routes::RouteEntry;
use crate::state::AppState;

/// Route declarations for the service group.
pub fn entries() -> Vec<RouteEntry> {
    vec![RouteEntry::get("/health", RouteName::Health, health)]
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: i64,
    pub routes: usize,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// `GET /health` — service liveness and build info.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let uptime = chrono::Utc::now() - state.started_at;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: uptime.num_seconds(),
        routes: state.routes.len(),
    })
}
