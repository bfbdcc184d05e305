//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating validation,
//! dataset lookups, and auxiliary data gathering. Services provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::reliability_service::ReliabilityService`] - URL reliability evaluation

pub mod services;
