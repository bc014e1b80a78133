//! PIMS maintenance module HTTP server.
//!
//! Wires the route table from `maintenance-core` into a running Axum
//! server. Every served route is declared exactly once, in its group's
//! module under [`routes`], and that single declaration drives both the
//! Axum router and the reversible route table handlers use for link
//! generation.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
