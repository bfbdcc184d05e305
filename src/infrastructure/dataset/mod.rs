//! Reference dataset of known unreliable news sources.
//!
//! Provides [`SourceCatalog`], an immutable in-memory table loaded from CSV
//! at startup. Load failures are fatal; the service never runs without a
//! well-formed dataset.

mod catalog;

pub use catalog::{DatasetError, SourceCatalog};
