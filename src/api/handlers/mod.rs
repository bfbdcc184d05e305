//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod check;
pub mod health;

pub use check::check_handler;
pub use health::health_handler;
