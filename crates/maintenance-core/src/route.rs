//! Symbolic route names and HTTP methods for the maintenance module.
//!
//! Every endpoint the module serves has exactly one [`RouteName`]. The
//! string form (`as_str`) is the wire-stable identifier used in responses,
//! logs, and the CLI; the enum keeps reverse resolution type-checked.

use std::fmt;
use std::str::FromStr;

/// HTTP method a route answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic name of a maintenance-module route.
///
/// Names are unique across the module and stable: renaming a variant's
/// string form breaks every client that builds URLs from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    // Core maintenance views.
    List,
    Create,
    Detail,
    Edit,
    Delete,

    // Status-filtered list views.
    Scheduled,
    InProgress,
    Completed,
    Overdue,
    Cancelled,

    // Search and filtering.
    Search,
    Filter,

    // Bulk operations.
    BulkUpdate,
    BulkExport,

    // Scheduling.
    ScheduleCreate,
    ScheduleRecurring,
    Calendar,
    Upcoming,
    DueSoon,

    // Quick actions for device integration.
    DeviceMaintenance,
    QuickSchedule,
    ReportIssue,

    // Status transitions.
    Start,
    Complete,
    Cancel,
    Hold,
    Resume,

    // Reports and analytics.
    ReportsHome,
    ReportSummary,
    ReportCost,
    ReportPerformance,
    ReportVendor,
    ReportDeviceHistory,
    ReportTrends,
    ExportPdf,
    ExportExcel,
    ExportCsv,

    // Dashboard.
    Dashboard,
    Alerts,
    Statistics,

    // AJAX API endpoints.
    ApiValidateDevice,
    ApiSuggestCost,
    ApiVendorSearch,
    ApiDeviceInfo,
    ApiMaintenanceHistory,
    ApiCostEstimate,
    ApiUpdateStatus,
    ApiProgress,
    ApiCalendarEvents,
    ApiMonthEvents,
    ApiDashboardStats,
    ApiOverdueCount,
    QuickStatus,
    CheckDevice,
    EstimateCost,
    SimpleCsv,

    // Service health.
    Health,
}

impl RouteName {
    /// Every route name the module declares, in registration order.
    pub const ALL: &'static [Self] = &[
        Self::List,
        Self::Create,
        Self::Detail,
        Self::Edit,
        Self::Delete,
        Self::Scheduled,
        Self::InProgress,
        Self::Completed,
        Self::Overdue,
        Self::Cancelled,
        Self::Search,
        Self::Filter,
        Self::BulkUpdate,
        Self::BulkExport,
        Self::ScheduleCreate,
        Self::ScheduleRecurring,
        Self::Calendar,
        Self::Upcoming,
        Self::DueSoon,
        Self::DeviceMaintenance,
        Self::QuickSchedule,
        Self::ReportIssue,
        Self::Start,
        Self::Complete,
        Self::Cancel,
        Self::Hold,
        Self::Resume,
        Self::ReportsHome,
        Self::ReportSummary,
        Self::ReportCost,
        Self::ReportPerformance,
        Self::ReportVendor,
        Self::ReportDeviceHistory,
        Self::ReportTrends,
        Self::ExportPdf,
        Self::ExportExcel,
        Self::ExportCsv,
        Self::Dashboard,
        Self::Alerts,
        Self::Statistics,
        Self::ApiValidateDevice,
        Self::ApiSuggestCost,
        Self::ApiVendorSearch,
        Self::ApiDeviceInfo,
        Self::ApiMaintenanceHistory,
        Self::ApiCostEstimate,
        Self::ApiUpdateStatus,
        Self::ApiProgress,
        Self::ApiCalendarEvents,
        Self::ApiMonthEvents,
        Self::ApiDashboardStats,
        Self::ApiOverdueCount,
        Self::QuickStatus,
        Self::CheckDevice,
        Self::EstimateCost,
        Self::SimpleCsv,
        Self::Health,
    ];

    /// The wire-stable snake_case form of the name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Detail => "detail",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
            Self::Search => "search",
            Self::Filter => "filter",
            Self::BulkUpdate => "bulk_update",
            Self::BulkExport => "bulk_export",
            Self::ScheduleCreate => "schedule_create",
            Self::ScheduleRecurring => "schedule_recurring",
            Self::Calendar => "calendar",
            Self::Upcoming => "upcoming",
            Self::DueSoon => "due_soon",
            Self::DeviceMaintenance => "device_maintenance",
            Self::QuickSchedule => "quick_schedule",
            Self::ReportIssue => "report_issue",
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
            Self::Hold => "hold",
            Self::Resume => "resume",
            Self::ReportsHome => "reports_home",
            Self::ReportSummary => "report_summary",
            Self::ReportCost => "report_cost",
            Self::ReportPerformance => "report_performance",
            Self::ReportVendor => "report_vendor",
            Self::ReportDeviceHistory => "report_device_history",
            Self::ReportTrends => "report_trends",
            Self::ExportPdf => "export_pdf",
            Self::ExportExcel => "export_excel",
            Self::ExportCsv => "export_csv",
            Self::Dashboard => "dashboard",
            Self::Alerts => "alerts",
            Self::Statistics => "statistics",
            Self::ApiValidateDevice => "api_validate_device",
            Self::ApiSuggestCost => "api_suggest_cost",
            Self::ApiVendorSearch => "api_vendor_search",
            Self::ApiDeviceInfo => "api_device_info",
            Self::ApiMaintenanceHistory => "api_maintenance_history",
            Self::ApiCostEstimate => "api_cost_estimate",
            Self::ApiUpdateStatus => "api_update_status",
            Self::ApiProgress => "api_progress",
            Self::ApiCalendarEvents => "api_calendar_events",
            Self::ApiMonthEvents => "api_month_events",
            Self::ApiDashboardStats => "api_dashboard_stats",
            Self::ApiOverdueCount => "api_overdue_count",
            Self::QuickStatus => "quick_status",
            Self::CheckDevice => "check_device",
            Self::EstimateCost => "estimate_cost",
            Self::SimpleCsv => "simple_csv",
            Self::Health => "health",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error from parsing a route name that the module does not declare.
#[derive(Debug, thiserror::Error)]
#[error("unknown route name '{0}'")]
pub struct UnknownRouteName(pub String);

impl FromStr for RouteName {
    type Err = UnknownRouteName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRouteName(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn all_names_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for name in RouteName::ALL {
            assert!(seen.insert(name.as_str()), "duplicate name: {name}");
        }
    }

    #[test]
    fn string_form_round_trips() {
        for name in RouteName::ALL {
            let parsed: RouteName = name.as_str().parse().unwrap();
            assert_eq!(parsed, *name);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("no_such_route".parse::<RouteName>().is_err());
    }

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
