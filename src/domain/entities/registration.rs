//! Registration data gathered for a checked domain.

use std::collections::BTreeMap;

/// Result of a best-effort domain registration lookup.
///
/// Registration data is an auxiliary signal: every lookup outcome is
/// representable here and none of them fails the surrounding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationInfo {
    /// Registration data was retrieved. Values are display strings keyed by
    /// field name; fields absent from the registry response are omitted.
    Available(BTreeMap<String, String>),

    /// The lookup ran but produced no data (network failure, timeout,
    /// unknown domain, malformed registry response).
    Unavailable { reason: String },

    /// Lookups are turned off by configuration.
    Disabled,
}

impl RegistrationInfo {
    /// Creates an `Unavailable` marker with the given cause.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns true if registration fields were retrieved.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}
