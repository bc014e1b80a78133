//! Shared application state for the maintenance server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It holds the built route table and the
//! process start time; the table is immutable once built and is read
//! concurrently without locking.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use maintenance_core::route::RouteName;
use maintenance_core::table::RouteTable;

use crate::error::AppError;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// The complete maintenance route table.
    pub routes: RouteTable,
    /// When the server came up (for health reporting).
    pub started_at: DateTime<Utc>,
}

impl AppState {
    #[must_use]
    pub fn new(routes: RouteTable) -> Self {
        Self {
            routes,
            started_at: Utc::now(),
        }
    }

    /// Reverse-resolve a single route into a concrete URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the name is missing from the
    /// table or the argument count is wrong — both are server bugs.
    pub fn link(&self, name: RouteName, args: &[i64]) -> Result<String, AppError> {
        Ok(self.routes.reverse(name, args)?)
    }

    /// Build a link map for a response body. Keys are the labels clients
    /// navigate by; values are reverse-resolved URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when any entry fails to reverse.
    pub fn links(
        &self,
        entries: &[(&'static str, RouteName, &[i64])],
    ) -> Result<BTreeMap<&'static str, String>, AppError> {
        let mut map = BTreeMap::new();
        for (label, name, args) in entries {
            map.insert(*label, self.link(*name, args)?);
        }
        Ok(map)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
