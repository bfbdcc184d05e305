//! Utility functions shared across the application.
//!
//! - [`domain_extractor`] - URL-to-domain extraction and host normalization

pub mod domain_extractor;
