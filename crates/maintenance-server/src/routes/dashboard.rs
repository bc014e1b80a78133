//! Dashboard routes: `/maintenance/dashboard/*`
//!
//! The dashboard page plus its alerts and statistics panels. Each answers
//! with the envelope and the AJAX endpoints the page polls.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use maintenance_core::route::RouteName;

use crate::error::AppError;
use crate::routes::RouteEntry;
use crate::state::AppState;

/// Route declarations for the dashboard group.
pub fn entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::get(
            "/maintenance/dashboard/",
            RouteName::Dashboard,
            dashboard_view,
        ),
        RouteEntry::get(
            "/maintenance/dashboard/alerts/",
            RouteName::Alerts,
            alerts_view,
        ),
        RouteEntry::get(
            "/maintenance/dashboard/statistics/",
            RouteName::Statistics,
            statistics_view,
        ),
    ]
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub route: &'static str,
    pub links: BTreeMap<&'static str, String>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// `GET /maintenance/dashboard/` — the dashboard page.
async fn dashboard_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, AppError> {
    Ok(Json(PageResponse {
        route: RouteName::Dashboard.as_str(),
        links: state.links(&[
            ("alerts", RouteName::Alerts, &[]),
            ("statistics", RouteName::Statistics, &[]),
            ("stats", RouteName::ApiDashboardStats, &[]),
            ("overdue_count", RouteName::ApiOverdueCount, &[]),
            ("list", RouteName::List, &[]),
        ])?,
    }))
}

/// `GET /maintenance/dashboard/alerts/` — the alerts panel.
async fn alerts_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, AppError> {
    Ok(Json(PageResponse {
        route: RouteName::Alerts.as_str(),
        links: state.links(&[
            ("overdue", RouteName::Overdue, &[]),
            ("due_soon", RouteName::DueSoon, &[]),
            ("dashboard", RouteName::Dashboard, &[]),
        ])?,
    }))
}

/// `GET /maintenance/dashboard/statistics/` — the statistics panel.
async fn statistics_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, AppError> {
    Ok(Json(PageResponse {
        route: RouteName::Statistics.as_str(),
        links: state.links(&[
            ("stats", RouteName::ApiDashboardStats, &[]),
            ("trends", RouteName::ReportTrends, &[]),
            ("dashboard", RouteName::Dashboard, &[]),
        ])?,
    }))
}
