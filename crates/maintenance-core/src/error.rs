//! Error types for `maintenance-core`.
//!
//! Each error variant carries enough context to diagnose a bad route
//! declaration without a debugger. All of these surface at startup or in
//! tests — a running server never constructs a table.

use crate::route::{Method, RouteName};

/// Errors from parsing a path pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The pattern is empty or does not start with `/`.
    #[error("pattern '{pattern}' must start with '/'")]
    MissingLeadingSlash { pattern: String },

    /// A segment opens a `{` without closing it, or closes one it never
    /// opened.
    #[error("pattern '{pattern}' has an unbalanced brace in segment '{segment}'")]
    UnbalancedBrace { pattern: String, segment: String },

    /// A parameter segment is `{}` with no name inside.
    #[error("pattern '{pattern}' has a parameter with an empty name")]
    EmptyParamName { pattern: String },

    /// The same parameter name appears twice in one pattern.
    #[error("pattern '{pattern}' declares parameter '{name}' more than once")]
    DuplicateParam { pattern: String, name: String },
}

/// Errors from building a route table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A pattern failed to parse.
    #[error("route pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Two routes were registered under the same symbolic name.
    #[error("route name '{name}' is already registered")]
    DuplicateName { name: RouteName },

    /// Two routes were registered with the same method and path.
    #[error("route {method} '{path}' is already registered as '{existing}'")]
    DuplicateRoute {
        method: Method,
        path: String,
        existing: RouteName,
    },
}

/// Errors from reverse resolution (name + parameters → path).
#[derive(Debug, thiserror::Error)]
pub enum ReverseError {
    /// The name is not present in the table.
    #[error("no route registered under name '{name}'")]
    UnknownName { name: RouteName },

    /// The number of supplied parameters does not match the pattern.
    #[error("route '{name}' takes {expected} parameter(s), got {actual}")]
    ArityMismatch {
        name: RouteName,
        expected: usize,
        actual: usize,
    },
}
