//! The maintenance route table.
//!
//! An ordered list of route definitions with a by-name index. The table is
//! built once at startup, validated as it grows, and then only read:
//! forward resolution for dispatch-style lookups, reverse resolution for
//! link generation.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ReverseError, TableError};
use crate::pattern::Pattern;
use crate::route::{Method, RouteName};

/// A single route: symbolic name, HTTP method, and path pattern.
#[derive(Debug, Clone)]
pub struct RouteDef {
    pub name: RouteName,
    pub method: Method,
    pub pattern: Pattern,
}

/// The result of forward resolution: the matched route and its extracted
/// integer parameters in pattern order.
#[derive(Debug)]
pub struct RouteMatch<'t> {
    pub def: &'t RouteDef,
    pub params: Vec<(&'t str, i64)>,
}

/// The full route table for the maintenance module.
#[derive(Debug, Default)]
pub struct RouteTable {
    defs: Vec<RouteDef>,
    by_name: HashMap<RouteName, usize>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route.
    ///
    /// # Errors
    ///
    /// - [`TableError::DuplicateName`] when the name is already registered.
    /// - [`TableError::DuplicateRoute`] when the same method and path are
    ///   already registered under another name.
    pub fn insert(&mut self, def: RouteDef) -> Result<(), TableError> {
        if self.by_name.contains_key(&def.name) {
            return Err(TableError::DuplicateName { name: def.name });
        }

        if let Some(existing) = self
            .defs
            .iter()
            .find(|d| d.method == def.method && d.pattern.as_str() == def.pattern.as_str())
        {
            return Err(TableError::DuplicateRoute {
                method: def.method,
                path: def.pattern.as_str().to_owned(),
                existing: existing.name,
            });
        }

        debug!(name = %def.name, method = %def.method, path = %def.pattern, "route registered");

        self.by_name.insert(def.name, self.defs.len());
        self.defs.push(def);
        Ok(())
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate the routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDef> {
        self.defs.iter()
    }

    /// Look up a route by name.
    #[must_use]
    pub fn get(&self, name: RouteName) -> Option<&RouteDef> {
        self.by_name.get(&name).map(|&i| &self.defs[i])
    }

    /// Resolve a concrete request path to a route.
    ///
    /// Deterministic: when several patterns match, the one with the most
    /// literal segments wins, and registration order breaks ties.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let mut best: Option<RouteMatch<'_>> = None;

        for def in &self.defs {
            if let Some(params) = def.pattern.matches(path) {
                let more_specific = best.as_ref().is_none_or(|b| {
                    def.pattern.literal_count() > b.def.pattern.literal_count()
                });
                if more_specific {
                    best = Some(RouteMatch { def, params });
                }
            }
        }

        best
    }

    /// Build the concrete URL for a named route, filling integer parameters
    /// positionally.
    ///
    /// # Errors
    ///
    /// - [`ReverseError::UnknownName`] when the name is not registered.
    /// - [`ReverseError::ArityMismatch`] when `args` does not match the
    ///   pattern's parameter count.
    pub fn reverse(&self, name: RouteName, args: &[i64]) -> Result<String, ReverseError> {
        let def = self
            .get(name)
            .ok_or(ReverseError::UnknownName { name })?;

        def.pattern
            .fill(args)
            .ok_or(ReverseError::ArityMismatch {
                name,
                expected: def.pattern.param_count(),
                actual: args.len(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn def(name: RouteName, method: Method, path: &str) -> RouteDef {
        RouteDef {
            name,
            method,
            pattern: Pattern::parse(path).unwrap(),
        }
    }

    #[test]
    fn insert_rejects_duplicate_name() {
        let mut table = RouteTable::new();
        table
            .insert(def(RouteName::List, Method::Get, "/maintenance/"))
            .unwrap();
        let err = table
            .insert(def(RouteName::List, Method::Get, "/elsewhere/"))
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicateName { .. }));
    }

    #[test]
    fn insert_rejects_duplicate_method_and_path() {
        let mut table = RouteTable::new();
        table
            .insert(def(RouteName::List, Method::Get, "/maintenance/"))
            .unwrap();
        let err = table
            .insert(def(RouteName::Search, Method::Get, "/maintenance/"))
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicateRoute { .. }));
    }

    #[test]
    fn same_path_different_method_is_allowed() {
        let mut table = RouteTable::new();
        table
            .insert(def(RouteName::List, Method::Get, "/maintenance/"))
            .unwrap();
        table
            .insert(def(RouteName::Create, Method::Post, "/maintenance/"))
            .unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn resolve_extracts_params() {
        let mut table = RouteTable::new();
        table
            .insert(def(RouteName::Edit, Method::Post, "/maintenance/{pk}/edit/"))
            .unwrap();

        let m = table.resolve("/maintenance/42/edit/").unwrap();
        assert_eq!(m.def.name, RouteName::Edit);
        assert_eq!(m.params, vec![("pk", 42)]);
    }

    #[test]
    fn resolve_prefers_more_literal_segments() {
        // A numeric literal could also match the parameter pattern; the
        // literal route must win regardless of registration order.
        let mut table = RouteTable::new();
        table
            .insert(def(RouteName::Detail, Method::Get, "/maintenance/{pk}/"))
            .unwrap();
        table
            .insert(def(RouteName::Scheduled, Method::Get, "/maintenance/7/"))
            .unwrap();

        let m = table.resolve("/maintenance/7/").unwrap();
        assert_eq!(m.def.name, RouteName::Scheduled);

        let m = table.resolve("/maintenance/8/").unwrap();
        assert_eq!(m.def.name, RouteName::Detail);
    }

    #[test]
    fn resolve_misses_on_unknown_path() {
        let mut table = RouteTable::new();
        table
            .insert(def(RouteName::List, Method::Get, "/maintenance/"))
            .unwrap();
        assert!(table.resolve("/inventory/").is_none());
    }

    #[test]
    fn reverse_round_trips() {
        let mut table = RouteTable::new();
        table
            .insert(def(RouteName::Edit, Method::Post, "/maintenance/{pk}/edit/"))
            .unwrap();

        let url = table.reverse(RouteName::Edit, &[42]).unwrap();
        assert_eq!(url, "/maintenance/42/edit/");
        let m = table.resolve(&url).unwrap();
        assert_eq!(m.def.name, RouteName::Edit);
    }

    #[test]
    fn reverse_unknown_name_errors() {
        let table = RouteTable::new();
        assert!(matches!(
            table.reverse(RouteName::List, &[]).unwrap_err(),
            ReverseError::UnknownName { .. }
        ));
    }

    #[test]
    fn reverse_arity_mismatch_errors() {
        let mut table = RouteTable::new();
        table
            .insert(def(RouteName::Edit, Method::Post, "/maintenance/{pk}/edit/"))
            .unwrap();
        assert!(matches!(
            table.reverse(RouteName::Edit, &[1, 2]).unwrap_err(),
            ReverseError::ArityMismatch { expected: 1, actual: 2, .. }
        ));
    }
}
