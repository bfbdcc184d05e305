//! Infrastructure layer for external integrations.
//!
//! This layer provides concrete implementations for the data sources the
//! service consults: the on-disk reference dataset and the registration
//! data registries.
//!
//! # Modules
//!
//! - [`dataset`] - Reference dataset loading and in-memory lookup
//! - [`registration`] - Registration data retrieval (RDAP and no-op implementations)

pub mod dataset;
pub mod registration;
