//! AJAX API routes: `/maintenance/api/*`
//!
//! Form validation, dynamic form data, status updates, calendar data, and
//! dashboard counters. These endpoints back the module's web pages; each
//! validates its input and answers a small typed payload.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maintenance_core::route::RouteName;

use crate::error::AppError;
use crate::routes::{reports, validate_status, RouteEntry};
use crate::state::AppState;

/// Route declarations for the API group.
pub fn entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::post(
            "/maintenance/api/validate-device/",
            RouteName::ApiValidateDevice,
            validate_device,
        ),
        RouteEntry::get(
            "/maintenance/api/suggest-cost/",
            RouteName::ApiSuggestCost,
            suggest_cost,
        ),
        RouteEntry::get(
            "/maintenance/api/vendor-search/",
            RouteName::ApiVendorSearch,
            vendor_search,
        ),
        RouteEntry::get(
            "/maintenance/api/device-info/{device_id}/",
            RouteName::ApiDeviceInfo,
            device_info,
        ),
        RouteEntry::get(
            "/maintenance/api/maintenance-history/{device_id}/",
            RouteName::ApiMaintenanceHistory,
            maintenance_history,
        ),
        RouteEntry::get(
            "/maintenance/api/cost-estimate/",
            RouteName::ApiCostEstimate,
            cost_estimate,
        ),
        RouteEntry::post(
            "/maintenance/api/{pk}/update-status/",
            RouteName::ApiUpdateStatus,
            update_status,
        ),
        RouteEntry::get(
            "/maintenance/api/{pk}/progress/",
            RouteName::ApiProgress,
            progress,
        ),
        RouteEntry::get(
            "/maintenance/api/calendar-events/",
            RouteName::ApiCalendarEvents,
            calendar_events,
        ),
        RouteEntry::get(
            "/maintenance/api/calendar-month/{year}/{month}/",
            RouteName::ApiMonthEvents,
            month_events,
        ),
        RouteEntry::get(
            "/maintenance/api/dashboard-stats/",
            RouteName::ApiDashboardStats,
            dashboard_stats,
        ),
        RouteEntry::get(
            "/maintenance/api/overdue-count/",
            RouteName::ApiOverdueCount,
            overdue_count,
        ),
        // quick-status is the inline-table variant of update-status and
        // keeps its own URL.
        RouteEntry::post(
            "/maintenance/api/{pk}/quick-status/",
            RouteName::QuickStatus,
            quick_status,
        ),
        RouteEntry::post(
            "/maintenance/api/api/check-device/",
            RouteName::CheckDevice,
            check_device,
        ),
        RouteEntry::get(
            "/maintenance/api/api/estimate-cost/",
            RouteName::EstimateCost,
            simple_cost_estimate,
        ),
        RouteEntry::get(
            "/maintenance/api/export/simple-csv/",
            RouteName::SimpleCsv,
            simple_csv,
        ),
    ]
}

// ── Request / Response types ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DeviceCheckRequest {
    pub device_id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeviceCheckResponse {
    pub route: &'static str,
    pub device_id: i64,
    /// Whether the identifier is well-formed. Existence is the inventory
    /// backend's call.
    pub valid: bool,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct CostQuery {
    pub device_id: Option<i64>,
    pub maintenance_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub route: &'static str,
    pub device_id: Option<i64>,
    pub maintenance_type: Option<String>,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct VendorSearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VendorSearchResponse {
    pub route: &'static str,
    pub query: Option<String>,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
pub struct DeviceResponse {
    pub route: &'static str,
    pub device_id: i64,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub route: &'static str,
    pub maintenance_id: i64,
    pub status: String,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub route: &'static str,
    pub maintenance_id: i64,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarEventsQuery {
    /// RFC 3339 range bounds sent by the calendar widget.
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalendarEventsResponse {
    pub route: &'static str,
    pub start: Option<String>,
    pub end: Option<String>,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
pub struct MonthEventsResponse {
    pub route: &'static str,
    pub year: i64,
    pub month: i64,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub route: &'static str,
    pub as_of: DateTime<Utc>,
    pub links: BTreeMap<&'static str, String>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// `POST /maintenance/api/validate-device/` — form-side device validation.
async fn validate_device(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DeviceCheckRequest>,
) -> Result<Json<DeviceCheckResponse>, AppError> {
    device_check(&state, RouteName::ApiValidateDevice, body.device_id)
}

/// `POST /maintenance/api/api/check-device/` — the lightweight check used
/// by the device pages.
async fn check_device(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DeviceCheckRequest>,
) -> Result<Json<DeviceCheckResponse>, AppError> {
    device_check(&state, RouteName::CheckDevice, body.device_id)
}

/// `GET /maintenance/api/suggest-cost/?maintenance_type=…`
async fn suggest_cost(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CostQuery>,
) -> Result<Json<CostResponse>, AppError> {
    cost_echo(&state, RouteName::ApiSuggestCost, query)
}

/// `GET /maintenance/api/cost-estimate/?device_id=…&maintenance_type=…`
async fn cost_estimate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CostQuery>,
) -> Result<Json<CostResponse>, AppError> {
    cost_echo(&state, RouteName::ApiCostEstimate, query)
}

/// `GET /maintenance/api/api/estimate-cost/` — the simplified estimate
/// endpoint the quick-action forms call.
async fn simple_cost_estimate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CostQuery>,
) -> Result<Json<CostResponse>, AppError> {
    cost_echo(&state, RouteName::EstimateCost, query)
}

/// `GET /maintenance/api/vendor-search/?q=…` — vendor autocomplete.
async fn vendor_search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VendorSearchQuery>,
) -> Result<Json<VendorSearchResponse>, AppError> {
    Ok(Json(VendorSearchResponse {
        route: RouteName::ApiVendorSearch.as_str(),
        query: query.q,
        links: state.links(&[("vendor_report", RouteName::ReportVendor, &[])])?,
    }))
}

/// `GET /maintenance/api/device-info/{device_id}/`
async fn device_info(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<i64>,
) -> Result<Json<DeviceResponse>, AppError> {
    Ok(Json(DeviceResponse {
        route: RouteName::ApiDeviceInfo.as_str(),
        device_id,
        links: state.links(&[
            ("history", RouteName::ApiMaintenanceHistory, &[device_id]),
            ("device", RouteName::DeviceMaintenance, &[device_id]),
        ])?,
    }))
}

/// `GET /maintenance/api/maintenance-history/{device_id}/`
async fn maintenance_history(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<i64>,
) -> Result<Json<DeviceResponse>, AppError> {
    Ok(Json(DeviceResponse {
        route: RouteName::ApiMaintenanceHistory.as_str(),
        device_id,
        links: state.links(&[
            ("device_info", RouteName::ApiDeviceInfo, &[device_id]),
            ("history_report", RouteName::ReportDeviceHistory, &[]),
        ])?,
    }))
}

/// `POST /maintenance/api/{pk}/update-status/`
async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<(StatusCode, Json<StatusUpdateResponse>), AppError> {
    status_update(&state, RouteName::ApiUpdateStatus, pk, body.status)
}

/// `POST /maintenance/api/{pk}/quick-status/`
async fn quick_status(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<(StatusCode, Json<StatusUpdateResponse>), AppError> {
    status_update(&state, RouteName::QuickStatus, pk, body.status)
}

/// `GET /maintenance/api/{pk}/progress/`
async fn progress(
    State(state): State<Arc<AppState>>,
    Path(pk): Path<i64>,
) -> Result<Json<ProgressResponse>, AppError> {
    Ok(Json(ProgressResponse {
        route: RouteName::ApiProgress.as_str(),
        maintenance_id: pk,
        links: state.links(&[
            ("detail", RouteName::Detail, &[pk]),
            ("update_status", RouteName::ApiUpdateStatus, &[pk]),
        ])?,
    }))
}

/// `GET /maintenance/api/calendar-events/?start=…&end=…`
async fn calendar_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CalendarEventsQuery>,
) -> Result<Json<CalendarEventsResponse>, AppError> {
    Ok(Json(CalendarEventsResponse {
        route: RouteName::ApiCalendarEvents.as_str(),
        start: query.start,
        end: query.end,
        links: state.links(&[("calendar", RouteName::Calendar, &[])])?,
    }))
}

/// `GET /maintenance/api/calendar-month/{year}/{month}/`
async fn month_events(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(i64, i64)>,
) -> Result<Json<MonthEventsResponse>, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(format!(
            "month must be 1-12, got {month}"
        )));
    }

    Ok(Json(MonthEventsResponse {
        route: RouteName::ApiMonthEvents.as_str(),
        year,
        month,
        links: state.links(&[
            ("calendar", RouteName::Calendar, &[]),
            ("events", RouteName::ApiCalendarEvents, &[]),
        ])?,
    }))
}

/// `GET /maintenance/api/dashboard-stats/`
async fn dashboard_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SnapshotResponse>, AppError> {
    snapshot(&state, RouteName::ApiDashboardStats, &[
        ("dashboard", RouteName::Dashboard, &[]),
        ("statistics", RouteName::Statistics, &[]),
    ])
}

/// `GET /maintenance/api/overdue-count/`
async fn overdue_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SnapshotResponse>, AppError> {
    snapshot(&state, RouteName::ApiOverdueCount, &[(
        "overdue",
        RouteName::Overdue,
        &[],
    )])
}

/// `GET /maintenance/api/export/simple-csv/` — single-request CSV export.
async fn simple_csv() -> impl IntoResponse {
    reports::csv_export()
}

// ── Helpers ──────────────────────────────────────────────────────────

fn device_check(
    state: &AppState,
    name: RouteName,
    device_id: i64,
) -> Result<Json<DeviceCheckResponse>, AppError> {
    let valid = device_id > 0;
    let links = if valid {
        state.links(&[("device", RouteName::DeviceMaintenance, &[device_id])])?
    } else {
        BTreeMap::new()
    };

    Ok(Json(DeviceCheckResponse {
        route: name.as_str(),
        device_id,
        valid,
        links,
    }))
}

fn cost_echo(
    state: &AppState,
    name: RouteName,
    query: CostQuery,
) -> Result<Json<CostResponse>, AppError> {
    Ok(Json(CostResponse {
        route: name.as_str(),
        device_id: query.device_id,
        maintenance_type: query.maintenance_type,
        links: state.links(&[("cost_report", RouteName::ReportCost, &[])])?,
    }))
}

fn status_update(
    state: &AppState,
    name: RouteName,
    pk: i64,
    status: String,
) -> Result<(StatusCode, Json<StatusUpdateResponse>), AppError> {
    validate_status(&status)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(StatusUpdateResponse {
            route: name.as_str(),
            maintenance_id: pk,
            status,
            links: state.links(&[("detail", RouteName::Detail, &[pk])])?,
        }),
    ))
}

fn snapshot(
    state: &AppState,
    name: RouteName,
    extra: &[(&'static str, RouteName, &[i64])],
) -> Result<Json<SnapshotResponse>, AppError> {
    Ok(Json(SnapshotResponse {
        route: name.as_str(),
        as_of: Utc::now(),
        links: state.links(extra)?,
    }))
}
