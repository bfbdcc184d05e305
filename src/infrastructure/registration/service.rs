//! Registration lookup trait.

use crate::domain::entities::RegistrationInfo;
use async_trait::async_trait;

/// Trait for retrieving domain registration data.
///
/// Registration data is a best-effort auxiliary signal. Implementations must
/// be thread-safe and must never fail the surrounding request: every outcome,
/// including network errors and timeouts, is expressed as a
/// [`RegistrationInfo`] variant.
///
/// # Implementations
///
/// - [`crate::infrastructure::registration::RdapClient`] - RDAP registry client over HTTPS
/// - [`crate::infrastructure::registration::NullRegistrationLookup`] - No-op for disabled lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    /// Fetches registration data for a normalized domain.
    ///
    /// Returns [`RegistrationInfo::Unavailable`] on any failure; failures are
    /// logged by the implementation, never propagated.
    async fn fetch(&self, domain: &str) -> RegistrationInfo;

    /// Returns true if this implementation performs real lookups.
    ///
    /// Used by the health endpoint to report configuration without touching
    /// the network.
    fn is_enabled(&self) -> bool;
}
