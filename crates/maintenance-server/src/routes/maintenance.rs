//! Core maintenance routes: `/maintenance/*`
//!
//! The main CRUD surface, the status-filtered list views, search and
//! filtering, and the bulk operations. Handlers validate input, extract
//! typed parameters, and answer with the endpoint envelope plus
//! reverse-resolved links; record persistence belongs to the inventory
//! backend, not this layer.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use maintenance_core::route::RouteName;

use crate::error::AppError;
use crate::routes::{reports, validate_status, RouteEntry};
use crate::state::AppState;

/// Route declarations for the core group.
pub fn entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::get("/maintenance/", RouteName::List, list_maintenance),
        RouteEntry::post("/maintenance/create/", RouteName::Create, create_maintenance),
        RouteEntry::get("/maintenance/{pk}/", RouteName::Detail, maintenance_detail),
        RouteEntry::post("/maintenance/{pk}/edit/", RouteName::Edit, edit_maintenance),
        RouteEntry::post(
            "/maintenance/{pk}/delete/",
            RouteName::Delete,
            delete_maintenance,
        ),
        RouteEntry::get("/maintenance/scheduled/", RouteName::Scheduled, scheduled_view),
        RouteEntry::get(
            "/maintenance/in-progress/",
            RouteName::InProgress,
            in_progress_view,
        ),
        RouteEntry::get("/maintenance/completed/", RouteName::Completed, completed_view),
        RouteEntry::get("/maintenance/overdue/", RouteName::Overdue, overdue_view),
        RouteEntry::get("/maintenance/cancelled/", RouteName::Cancelled, cancelled_view),
        RouteEntry::get("/maintenance/search/", RouteName::Search, search_maintenance),
        RouteEntry::get("/maintenance/filter/", RouteName::Filter, filter_maintenance),
        RouteEntry::post("/maintenance/bulk-update/", RouteName::BulkUpdate, bulk_update),
        RouteEntry::post("/maintenance/bulk-export/", RouteName::BulkExport, bulk_export),
    ]
}

// ── Request / Response types ─────────────────────────────────────────

/// Envelope for the list-style views.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub route: &'static str,
    /// Status filter this view applies, if any.
    pub status: Option<&'static str>,
    pub links: BTreeMap<&'static str, String>,
}

/// Envelope for a single maintenance record endpoint.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub route: &'static str,
    pub maintenance_id: i64,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub device_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub route: &'static str,
    pub device_id: i64,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub route: &'static str,
    pub query: Option<String>,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub status: Option<String>,
    pub device_id: Option<i64>,
    pub vendor: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub route: &'static str,
    pub status: Option<String>,
    pub device_id: Option<i64>,
    pub vendor: Option<String>,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkUpdateRequest {
    pub ids: Vec<i64>,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct BulkUpdateResponse {
    pub route: &'static str,
    pub ids: Vec<i64>,
    pub status: String,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkExportRequest {
    pub ids: Vec<i64>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// `GET /maintenance/` — the maintenance list view.
async fn list_maintenance(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ViewResponse>, AppError> {
    Ok(Json(ViewResponse {
        route: RouteName::List.as_str(),
        status: None,
        links: state.links(&[
            ("create", RouteName::Create, &[]),
            ("search", RouteName::Search, &[]),
            ("filter", RouteName::Filter, &[]),
            ("bulk_update", RouteName::BulkUpdate, &[]),
            ("bulk_export", RouteName::BulkExport, &[]),
            ("dashboard", RouteName::Dashboard, &[]),
        ])?,
    }))
}

/// `POST /maintenance/create/` — accept a new maintenance request.
async fn create_maintenance(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRequest>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    if body.device_id <= 0 {
        return Err(AppError::BadRequest(format!(
            "device_id must be positive, got {}",
            body.device_id
        )));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(CreateResponse {
            route: RouteName::Create.as_str(),
            device_id: body.device_id,
            links: state.links(&[
                ("list", RouteName::List, &[]),
                ("device", RouteName::DeviceMaintenance, &[body.device_id]),
            ])?,
        }),
    ))
}

/// `GET /maintenance/{pk}/` — detail view for one record.
async fn maintenance_detail(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
) -> Result<Json<RecordResponse>, AppError> {
    Ok(Json(RecordResponse {
        route: RouteName::Detail.as_str(),
        maintenance_id: pk,
        links: state.links(&[
            ("edit", RouteName::Edit, &[pk]),
            ("delete", RouteName::Delete, &[pk]),
            ("start", RouteName::Start, &[pk]),
            ("complete", RouteName::Complete, &[pk]),
            ("cancel", RouteName::Cancel, &[pk]),
            ("hold", RouteName::Hold, &[pk]),
            ("resume", RouteName::Resume, &[pk]),
            ("progress", RouteName::ApiProgress, &[pk]),
        ])?,
    }))
}

/// `POST /maintenance/{pk}/edit/` — accept an update to a record.
async fn edit_maintenance(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
) -> Result<(StatusCode, Json<RecordResponse>), AppError> {
    Ok((
        StatusCode::ACCEPTED,
        Json(RecordResponse {
            route: RouteName::Edit.as_str(),
            maintenance_id: pk,
            links: state.links(&[
                ("detail", RouteName::Detail, &[pk]),
                ("list", RouteName::List, &[]),
            ])?,
        }),
    ))
}

/// `POST /maintenance/{pk}/delete/` — accept a deletion.
async fn delete_maintenance(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
) -> Result<(StatusCode, Json<RecordResponse>), AppError> {
    Ok((
        StatusCode::ACCEPTED,
        Json(RecordResponse {
            route: RouteName::Delete.as_str(),
            maintenance_id: pk,
            links: state.links(&[("list", RouteName::List, &[])])?,
        }),
    ))
}

/// `GET /maintenance/scheduled/` — records awaiting their window.
async fn scheduled_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ViewResponse>, AppError> {
    status_view(&state, RouteName::Scheduled, "scheduled", &[
        ("calendar", RouteName::Calendar, &[]),
        ("upcoming", RouteName::Upcoming, &[]),
    ])
}

/// `GET /maintenance/in-progress/` — records currently being worked.
async fn in_progress_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ViewResponse>, AppError> {
    status_view(&state, RouteName::InProgress, "in_progress", &[(
        "dashboard",
        RouteName::Dashboard,
        &[],
    )])
}

/// `GET /maintenance/completed/` — finished records.
async fn completed_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ViewResponse>, AppError> {
    status_view(&state, RouteName::Completed, "completed", &[(
        "summary",
        RouteName::ReportSummary,
        &[],
    )])
}

/// `GET /maintenance/overdue/` — records past their window.
async fn overdue_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ViewResponse>, AppError> {
    status_view(&state, RouteName::Overdue, "overdue", &[
        ("overdue_count", RouteName::ApiOverdueCount, &[]),
        ("due_soon", RouteName::DueSoon, &[]),
    ])
}

/// `GET /maintenance/cancelled/` — cancelled records.
async fn cancelled_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ViewResponse>, AppError> {
    status_view(&state, RouteName::Cancelled, "cancelled", &[])
}

/// `GET /maintenance/search/?q=…` — free-text search view.
async fn search_maintenance(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    Ok(Json(SearchResponse {
        route: RouteName::Search.as_str(),
        query: query.q,
        links: state.links(&[
            ("list", RouteName::List, &[]),
            ("filter", RouteName::Filter, &[]),
        ])?,
    }))
}

/// `GET /maintenance/filter/?status=…&device_id=…&vendor=…` — criteria view.
async fn filter_maintenance(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<FilterResponse>, AppError> {
    if let Some(ref status) = query.status {
        validate_status(status)?;
    }

    Ok(Json(FilterResponse {
        route: RouteName::Filter.as_str(),
        status: query.status,
        device_id: query.device_id,
        vendor: query.vendor,
        links: state.links(&[
            ("list", RouteName::List, &[]),
            ("search", RouteName::Search, &[]),
        ])?,
    }))
}

/// `POST /maintenance/bulk-update/` — accept a status change for a
/// selection of records.
async fn bulk_update(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BulkUpdateRequest>,
) -> Result<(StatusCode, Json<BulkUpdateResponse>), AppError> {
    if body.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".to_owned()));
    }
    validate_status(&body.status)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(BulkUpdateResponse {
            route: RouteName::BulkUpdate.as_str(),
            ids: body.ids,
            status: body.status,
            links: state.links(&[("list", RouteName::List, &[])])?,
        }),
    ))
}

/// `POST /maintenance/bulk-export/` — export a selection as CSV.
async fn bulk_export(
    Json(body): Json<BulkExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    if body.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".to_owned()));
    }

    Ok(reports::csv_export())
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Shared envelope for the status-filtered views: every one links back to
/// the list view and carries its own extras.
fn status_view(
    state: &AppState,
    name: RouteName,
    status: &'static str,
    extra: &[(&'static str, RouteName, &[i64])],
) -> Result<Json<ViewResponse>, AppError> {
    let mut links = state.links(&[("list", RouteName::List, &[])])?;
    links.extend(state.links(extra)?);

    Ok(Json(ViewResponse {
        route: name.as_str(),
        status: Some(status),
        links,
    }))
}
