//! # News Source Checker
//!
//! A web service for checking the reliability of news sources, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities: source records, verdicts, registration data
//! - **Application Layer** ([`application`]) - Reliability evaluation orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Reference dataset and RDAP integration
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - URL checks against a curated dataset of flagged news domains
//! - Domain registration details via RDAP, with graceful degradation
//! - Social engagement signal sampling
//! - Structured logging and health reporting
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the service at a reference dataset (CSV)
//! export DATASET_PATH="data/unreliable_sources.csv"
//!
//! # Start the service
//! cargo run
//!
//! # Check a URL
//! curl "http://localhost:3000/check?url=https://example.com/article"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ReliabilityService;
    pub use crate::domain::entities::{Evaluation, RegistrationInfo, SourceRecord, Verdict};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
