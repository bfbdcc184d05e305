//! HTTP middleware for request processing.
//!
//! Provides observability middleware applied at the router edge.

pub mod tracing;
