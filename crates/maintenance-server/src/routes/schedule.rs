//! Scheduling routes: `/maintenance/schedule/*`
//!
//! Window creation, recurring schedules, and the calendar-oriented views.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use maintenance_core::route::RouteName;

use crate::error::AppError;
use crate::routes::RouteEntry;
use crate::state::AppState;

/// Route declarations for the schedule group.
pub fn entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::post(
            "/maintenance/schedule/",
            RouteName::ScheduleCreate,
            schedule_create,
        ),
        RouteEntry::post(
            "/maintenance/schedule/recurring/",
            RouteName::ScheduleRecurring,
            schedule_recurring,
        ),
        RouteEntry::get(
            "/maintenance/schedule/calendar/",
            RouteName::Calendar,
            calendar_view,
        ),
        RouteEntry::get(
            "/maintenance/schedule/upcoming/",
            RouteName::Upcoming,
            upcoming_view,
        ),
        RouteEntry::get(
            "/maintenance/schedule/due-soon/",
            RouteName::DueSoon,
            due_soon_view,
        ),
    ]
}

// ── Request / Response types ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub device_id: i64,
    /// RFC 3339 timestamp for the requested window, if the client already
    /// knows it.
    pub scheduled_for: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub route: &'static str,
    pub device_id: i64,
    pub scheduled_for: Option<String>,
    pub links: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleViewResponse {
    pub route: &'static str,
    pub links: BTreeMap<&'static str, String>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// `POST /maintenance/schedule/` — accept a scheduling request.
async fn schedule_create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleResponse>), AppError> {
    accept_schedule(&state, RouteName::ScheduleCreate, body)
}

/// `POST /maintenance/schedule/recurring/` — accept a recurring schedule.
async fn schedule_recurring(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleResponse>), AppError> {
    accept_schedule(&state, RouteName::ScheduleRecurring, body)
}

/// `GET /maintenance/schedule/calendar/` — the calendar view.
async fn calendar_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ScheduleViewResponse>, AppError> {
    Ok(Json(ScheduleViewResponse {
        route: RouteName::Calendar.as_str(),
        links: state.links(&[
            ("events", RouteName::ApiCalendarEvents, &[]),
            ("upcoming", RouteName::Upcoming, &[]),
            ("list", RouteName::List, &[]),
        ])?,
    }))
}

/// `GET /maintenance/schedule/upcoming/` — windows in the near future.
async fn upcoming_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ScheduleViewResponse>, AppError> {
    Ok(Json(ScheduleViewResponse {
        route: RouteName::Upcoming.as_str(),
        links: state.links(&[
            ("calendar", RouteName::Calendar, &[]),
            ("due_soon", RouteName::DueSoon, &[]),
        ])?,
    }))
}

/// `GET /maintenance/schedule/due-soon/` — windows about to lapse.
async fn due_soon_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ScheduleViewResponse>, AppError> {
    Ok(Json(ScheduleViewResponse {
        route: RouteName::DueSoon.as_str(),
        links: state.links(&[
            ("overdue", RouteName::Overdue, &[]),
            ("upcoming", RouteName::Upcoming, &[]),
        ])?,
    }))
}

// ── Helpers ──────────────────────────────────────────────────────────

fn accept_schedule(
    state: &AppState,
    name: RouteName,
    body: ScheduleRequest,
) -> Result<(StatusCode, Json<ScheduleResponse>), AppError> {
    if body.device_id <= 0 {
        return Err(AppError::BadRequest(format!(
            "device_id must be positive, got {}",
            body.device_id
        )));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(ScheduleResponse {
            route: name.as_str(),
            device_id: body.device_id,
            scheduled_for: body.scheduled_for,
            links: state.links(&[
                ("calendar", RouteName::Calendar, &[]),
                ("device", RouteName::DeviceMaintenance, &[body.device_id]),
            ])?,
        }),
    ))
}
