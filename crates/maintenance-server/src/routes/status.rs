//! Status-transition routes: `/maintenance/status/{pk}/*`
//!
//! One POST endpoint per transition. The transition rules themselves live
//! in the inventory backend; this layer names the transitions, types the
//! record identifier, and points the client back at the record.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use maintenance_core::route::RouteName;

use crate::error::AppError;
use crate::routes::RouteEntry;
use crate::state::AppState;

/// Route declarations for the status group.
pub fn entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::post(
            "/maintenance/status/{pk}/start/",
            RouteName::Start,
            start_maintenance,
        ),
        RouteEntry::post(
            "/maintenance/status/{pk}/complete/",
            RouteName::Complete,
            complete_maintenance,
        ),
        RouteEntry::post(
            "/maintenance/status/{pk}/cancel/",
            RouteName::Cancel,
            cancel_maintenance,
        ),
        RouteEntry::post(
            "/maintenance/status/{pk}/hold/",
            RouteName::Hold,
            hold_maintenance,
        ),
        RouteEntry::post(
            "/maintenance/status/{pk}/resume/",
            RouteName::Resume,
            resume_maintenance,
        ),
    ]
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub route: &'static str,
    pub maintenance_id: i64,
    pub links: BTreeMap<&'static str, String>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// `POST /maintenance/status/{pk}/start/`
async fn start_maintenance(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
) -> Result<(StatusCode, Json<TransitionResponse>), AppError> {
    transition(&state, RouteName::Start, pk)
}

/// `POST /maintenance/status/{pk}/complete/`
async fn complete_maintenance(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
) -> Result<(StatusCode, Json<TransitionResponse>), AppError> {
    transition(&state, RouteName::Complete, pk)
}

/// `POST /maintenance/status/{pk}/cancel/`
async fn cancel_maintenance(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
) -> Result<(StatusCode, Json<TransitionResponse>), AppError> {
    transition(&state, RouteName::Cancel, pk)
}

/// `POST /maintenance/status/{pk}/hold/`
async fn hold_maintenance(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
) -> Result<(StatusCode, Json<TransitionResponse>), AppError> {
    transition(&state, RouteName::Hold, pk)
}

/// `POST /maintenance/status/{pk}/resume/`
async fn resume_maintenance(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
) -> Result<(StatusCode, Json<TransitionResponse>), AppError> {
    transition(&state, RouteName::Resume, pk)
}

// ── Helpers ──────────────────────────────────────────────────────────

fn transition(
    state: &AppState,
    name: RouteName,
    pk: i64,
) -> Result<(StatusCode, Json<TransitionResponse>), AppError> {
    Ok((
        StatusCode::ACCEPTED,
        Json(TransitionResponse {
            route: name.as_str(),
            maintenance_id: pk,
            links: state.links(&[
                ("detail", RouteName::Detail, &[pk]),
                ("progress", RouteName::ApiProgress, &[pk]),
                ("list", RouteName::List, &[]),
            ])?,
        }),
    ))
}
