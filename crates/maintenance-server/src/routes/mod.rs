//! HTTP routes for the maintenance module.
//!
//! Routes are organized by prefix group, mirroring the module's URL
//! namespaces:
//! - `dashboard`: dashboard pages (`/maintenance/dashboard/*`)
//! - `maintenance`: core CRUD, status-filtered views, search, bulk ops
//! - `schedule`: scheduling views (`/maintenance/schedule/*`)
//! - `actions`: quick actions for device integration (`/maintenance/actions/*`)
//! - `status`: status transitions (`/maintenance/status/*`)
//! - `reports`: reports, analytics, and exports (`/maintenance/reports/*`)
//! - `api`: AJAX endpoints (`/maintenance/api/*`)
//! - `sys`: service health (`/health`)
//!
//! Each group declares its routes once, as [`RouteEntry`] values pairing a
//! path pattern and symbolic name with the handler. [`table`] and
//! [`router`] are both derived from those declarations, so the served
//! surface and the reversible route table cannot drift apart.

pub mod actions;
pub mod api;
pub mod dashboard;
pub mod maintenance;
pub mod reports;
pub mod schedule;
pub mod status;
pub mod sys;

use std::sync::Arc;

use axum::Router;
use axum::handler::Handler;
use axum::routing::{self, MethodRouter};

use maintenance_core::error::TableError;
use maintenance_core::pattern::Pattern;
use maintenance_core::route::{Method, RouteName};
use maintenance_core::table::{RouteDef, RouteTable};

use crate::error::AppError;
use crate::state::AppState;

/// Status tokens the module understands. These come from the
/// status-filtered views the module serves; transitions between them are
/// the inventory backend's concern.
pub const KNOWN_STATUSES: &[&str] = &[
    "scheduled",
    "in_progress",
    "completed",
    "overdue",
    "cancelled",
    "on_hold",
];

/// Validate a client-supplied status token.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] naming the accepted tokens.
pub fn validate_status(status: &str) -> Result<(), AppError> {
    if KNOWN_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "unknown status '{status}', expected one of: {}",
            KNOWN_STATUSES.join(", ")
        )))
    }
}

/// One declared route: the (path, handler, symbolic name) triple plus the
/// HTTP method it answers to.
pub struct RouteEntry {
    pub method: Method,
    pub path: &'static str,
    pub name: RouteName,
    service: MethodRouter<Arc<AppState>>,
}

impl RouteEntry {
    /// Declare a GET route.
    pub fn get<H, T>(path: &'static str, name: RouteName, handler: H) -> Self
    where
        H: Handler<T, Arc<AppState>>,
        T: 'static,
    {
        Self {
            method: Method::Get,
            path,
            name,
            service: routing::get(handler),
        }
    }

    /// Declare a POST route.
    pub fn post<H, T>(path: &'static str, name: RouteName, handler: H) -> Self
    where
        H: Handler<T, Arc<AppState>>,
        T: 'static,
    {
        Self {
            method: Method::Post,
            path,
            name,
            service: routing::post(handler),
        }
    }
}

/// All route declarations, in the module's canonical group order.
pub fn entries() -> Vec<RouteEntry> {
    let mut all = dashboard::entries();
    all.extend(maintenance::entries());
    all.extend(schedule::entries());
    all.extend(actions::entries());
    all.extend(status::entries());
    all.extend(reports::entries());
    all.extend(api::entries());
    all.extend(sys::entries());
    all
}

/// Build the route table from the declarations.
///
/// # Errors
///
/// Returns [`TableError`] on an invalid pattern or a duplicate
/// name/route — both abort startup.
pub fn table() -> Result<RouteTable, TableError> {
    let mut table = RouteTable::new();
    for entry in entries() {
        table.insert(RouteDef {
            name: entry.name,
            method: entry.method,
            pattern: Pattern::parse(entry.path)?,
        })?;
    }
    Ok(table)
}

/// Build the Axum router from the same declarations and attach the state.
pub fn router(state: Arc<AppState>) -> Router {
    let mut router = Router::new();
    for entry in entries() {
        router = router.route(entry.path, entry.service);
    }
    router.with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn table_builds_without_conflicts() {
        let table = table().unwrap();
        assert_eq!(table.len(), entries().len());
    }

    #[test]
    fn every_declared_name_is_registered() {
        let table = table().unwrap();
        for name in RouteName::ALL {
            assert!(table.get(*name).is_some(), "missing route: {name}");
        }
        assert_eq!(table.len(), RouteName::ALL.len());
    }

    #[test]
    fn reverse_then_resolve_round_trips_every_route() {
        let table = table().unwrap();
        for name in RouteName::ALL {
            let def = table.get(*name).unwrap();
            // Dummy positional arguments; any integers will do.
            let args: Vec<i64> = (1i64..).take(def.pattern.param_count()).collect();
            let url = table.reverse(*name, &args).unwrap();
            let m = table
                .resolve(&url)
                .unwrap_or_else(|| panic!("reverse of '{name}' produced unroutable '{url}'"));
            assert_eq!(m.def.name, *name, "round-trip mismatch for '{url}'");
        }
    }

    #[test]
    fn edit_path_resolves_with_pk() {
        let table = table().unwrap();
        let m = table.resolve("/maintenance/42/edit/").unwrap();
        assert_eq!(m.def.name, RouteName::Edit);
        assert_eq!(m.params, vec![("pk", 42)]);
    }

    #[test]
    fn calendar_month_path_resolves_with_year_and_month() {
        let table = table().unwrap();
        let m = table
            .resolve("/maintenance/api/calendar-month/2024/3/")
            .unwrap();
        assert_eq!(m.def.name, RouteName::ApiMonthEvents);
        assert_eq!(m.params, vec![("year", 2024), ("month", 3)]);
    }

    #[test]
    fn non_integer_pk_does_not_resolve() {
        let table = table().unwrap();
        assert!(table.resolve("/maintenance/abc/edit/").is_none());
    }

    #[test]
    fn status_validation() {
        assert!(validate_status("scheduled").is_ok());
        assert!(validate_status("on_hold").is_ok());
        assert!(validate_status("finished").is_err());
    }
}
