//! Quick-action routes: `/maintenance/actions/*`
//!
//! Entry points the device pages link to: per-device maintenance overview,
//! one-click scheduling, and issue reporting.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use maintenance_core::route::RouteName;

use crate::error::AppError;
use crate::routes::RouteEntry;
use crate::state::AppState;

/// Route declarations for the quick-actions group.
pub fn entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::get(
            "/maintenance/actions/device/{device_id}/",
            RouteName::DeviceMaintenance,
            device_maintenance,
        ),
        RouteEntry::post(
            "/maintenance/actions/quick-schedule/",
            RouteName::QuickSchedule,
            quick_schedule,
        ),
        RouteEntry::post(
            "/maintenance/actions/report-issue/",
            RouteName::ReportIssue,
            report_issue,
        ),
    ]
}

// ── Request / Response types ─────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DeviceMaintenanceResponse {
    pub route: &'static str,
    pub device_id: i64,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
pub struct QuickScheduleRequest {
    pub device_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReportIssueRequest {
    pub device_id: i64,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub route: &'static str,
    pub device_id: i64,
    pub links: BTreeMap<&'static str, String>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// `GET /maintenance/actions/device/{device_id}/` — per-device overview.
async fn device_maintenance(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<i64>,
) -> Result<Json<DeviceMaintenanceResponse>, AppError> {
    Ok(Json(DeviceMaintenanceResponse {
        route: RouteName::DeviceMaintenance.as_str(),
        device_id,
        links: state.links(&[
            ("device_info", RouteName::ApiDeviceInfo, &[device_id]),
            ("history", RouteName::ApiMaintenanceHistory, &[device_id]),
            ("quick_schedule", RouteName::QuickSchedule, &[]),
            ("report_issue", RouteName::ReportIssue, &[]),
        ])?,
    }))
}

/// `POST /maintenance/actions/quick-schedule/` — one-click scheduling.
async fn quick_schedule(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuickScheduleRequest>,
) -> Result<(StatusCode, Json<ActionResponse>), AppError> {
    if body.device_id <= 0 {
        return Err(AppError::BadRequest(format!(
            "device_id must be positive, got {}",
            body.device_id
        )));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(ActionResponse {
            route: RouteName::QuickSchedule.as_str(),
            device_id: body.device_id,
            links: state.links(&[
                ("device", RouteName::DeviceMaintenance, &[body.device_id]),
                ("schedule", RouteName::ScheduleCreate, &[]),
            ])?,
        }),
    ))
}

/// `POST /maintenance/actions/report-issue/` — report a device issue.
async fn report_issue(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ReportIssueRequest>,
) -> Result<(StatusCode, Json<ActionResponse>), AppError> {
    if body.device_id <= 0 {
        return Err(AppError::BadRequest(format!(
            "device_id must be positive, got {}",
            body.device_id
        )));
    }
    if body.description.as_deref().is_some_and(str::is_empty) {
        return Err(AppError::BadRequest(
            "description must not be empty when supplied".to_owned(),
        ));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(ActionResponse {
            route: RouteName::ReportIssue.as_str(),
            device_id: body.device_id,
            links: state.links(&[
                ("device", RouteName::DeviceMaintenance, &[body.device_id]),
                ("list", RouteName::List, &[]),
            ])?,
        }),
    ))
}
