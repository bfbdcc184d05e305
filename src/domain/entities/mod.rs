//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the
//! core concepts of the reliability checking service.
//!
//! # Entity Types
//!
//! - [`SourceRecord`] - A reference dataset entry for a flagged publisher
//! - [`Verdict`] - Outcome of a dataset lookup, with the matched record
//! - [`Evaluation`] - Everything gathered for one checked URL
//! - [`RegistrationInfo`] - Best-effort domain registration data
//! - [`SocialSignals`] - Simulated engagement counters
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod record;
pub mod registration;
pub mod signals;
pub mod verdict;

pub use record::SourceRecord;
pub use registration::RegistrationInfo;
pub use signals::{SIGNAL_CEILING, SocialSignals};
pub use verdict::{CLEAR_MESSAGE, Evaluation, FLAGGED_MESSAGE, Verdict};
