//! Route table for the PIMS maintenance module.
//!
//! Contains the path-pattern parser, the symbolic route-name registry, and
//! the route table with forward resolution (path → name + typed parameters)
//! and reverse resolution (name + parameters → path). This crate knows
//! nothing about HTTP servers; the `maintenance-server` crate binds each
//! table entry to its Axum handler.

pub mod error;
pub mod pattern;
pub mod route;
pub mod table;
