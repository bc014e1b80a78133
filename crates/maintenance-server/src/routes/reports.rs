//! Report and export routes: `/maintenance/reports/*`
//!
//! Report pages answer with the endpoint envelope; the CSV exports answer
//! `text/csv` with the export column header. Report computation belongs
//! to the analytics backend.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use maintenance_core::route::RouteName;

use crate::error::AppError;
use crate::routes::RouteEntry;
use crate::state::AppState;

/// Column header for maintenance-record CSV exports.
pub(crate) const EXPORT_CSV_HEADER: &str =
    "id,device_id,status,scheduled_for,started_at,completed_at,cost,vendor";

/// Route declarations for the reports group.
pub fn entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::get("/maintenance/reports/", RouteName::ReportsHome, reports_home),
        RouteEntry::get(
            "/maintenance/reports/summary/",
            RouteName::ReportSummary,
            report_summary,
        ),
        RouteEntry::get(
            "/maintenance/reports/cost-analysis/",
            RouteName::ReportCost,
            report_cost,
        ),
        RouteEntry::get(
            "/maintenance/reports/performance/",
            RouteName::ReportPerformance,
            report_performance,
        ),
        RouteEntry::get(
            "/maintenance/reports/vendor-analysis/",
            RouteName::ReportVendor,
            report_vendor,
        ),
        RouteEntry::get(
            "/maintenance/reports/device-history/",
            RouteName::ReportDeviceHistory,
            report_device_history,
        ),
        RouteEntry::get(
            "/maintenance/reports/trends/",
            RouteName::ReportTrends,
            report_trends,
        ),
        RouteEntry::get(
            "/maintenance/reports/export/pdf/",
            RouteName::ExportPdf,
            export_pdf,
        ),
        RouteEntry::get(
            "/maintenance/reports/export/excel/",
            RouteName::ExportExcel,
            export_excel,
        ),
        RouteEntry::get(
            "/maintenance/reports/export/csv/",
            RouteName::ExportCsv,
            export_csv,
        ),
    ]
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub route: &'static str,
    pub generated_at: DateTime<Utc>,
    pub links: BTreeMap<&'static str, String>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// `GET /maintenance/reports/` — the reports index.
async fn reports_home(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse>, AppError> {
    report(&state, RouteName::ReportsHome, &[
        ("summary", RouteName::ReportSummary, &[]),
        ("cost", RouteName::ReportCost, &[]),
        ("performance", RouteName::ReportPerformance, &[]),
        ("vendor", RouteName::ReportVendor, &[]),
        ("device_history", RouteName::ReportDeviceHistory, &[]),
        ("trends", RouteName::ReportTrends, &[]),
        ("export_csv", RouteName::ExportCsv, &[]),
        ("export_excel", RouteName::ExportExcel, &[]),
        ("export_pdf", RouteName::ExportPdf, &[]),
    ])
}

/// `GET /maintenance/reports/summary/`
async fn report_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse>, AppError> {
    report(&state, RouteName::ReportSummary, &[(
        "home",
        RouteName::ReportsHome,
        &[],
    )])
}

/// `GET /maintenance/reports/cost-analysis/`
async fn report_cost(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse>, AppError> {
    report(&state, RouteName::ReportCost, &[
        ("home", RouteName::ReportsHome, &[]),
        ("cost_estimate", RouteName::ApiCostEstimate, &[]),
    ])
}

/// `GET /maintenance/reports/performance/`
async fn report_performance(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse>, AppError> {
    report(&state, RouteName::ReportPerformance, &[(
        "home",
        RouteName::ReportsHome,
        &[],
    )])
}

/// `GET /maintenance/reports/vendor-analysis/`
async fn report_vendor(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse>, AppError> {
    report(&state, RouteName::ReportVendor, &[
        ("home", RouteName::ReportsHome, &[]),
        ("vendor_search", RouteName::ApiVendorSearch, &[]),
    ])
}

/// `GET /maintenance/reports/device-history/`
async fn report_device_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse>, AppError> {
    report(&state, RouteName::ReportDeviceHistory, &[(
        "home",
        RouteName::ReportsHome,
        &[],
    )])
}

/// `GET /maintenance/reports/trends/`
async fn report_trends(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse>, AppError> {
    report(&state, RouteName::ReportTrends, &[(
        "home",
        RouteName::ReportsHome,
        &[],
    )])
}

/// `GET /maintenance/reports/export/pdf/` — PDF export descriptor.
async fn export_pdf(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse>, AppError> {
    report(&state, RouteName::ExportPdf, &[(
        "export_csv",
        RouteName::ExportCsv,
        &[],
    )])
}

/// `GET /maintenance/reports/export/excel/` — Excel export descriptor.
async fn export_excel(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse>, AppError> {
    report(&state, RouteName::ExportExcel, &[(
        "export_csv",
        RouteName::ExportCsv,
        &[],
    )])
}

/// `GET /maintenance/reports/export/csv/` — full CSV export.
async fn export_csv() -> impl IntoResponse {
    csv_export()
}

// ── Helpers ──────────────────────────────────────────────────────────

/// A `text/csv` response carrying the export column header.
pub(crate) fn csv_export() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        format!("{EXPORT_CSV_HEADER}\n"),
    )
}

fn report(
    state: &AppState,
    name: RouteName,
    extra: &[(&'static str, RouteName, &[i64])],
) -> Result<Json<ReportResponse>, AppError> {
    Ok(Json(ReportResponse {
        route: name.as_str(),
        generated_at: Utc::now(),
        links: state.links(extra)?,
    }))
}
