//! No-op registration lookup for disabled lookups.

use super::service::RegistrationLookup;
use crate::domain::entities::RegistrationInfo;
use async_trait::async_trait;
use tracing::debug;

/// A registration lookup that never touches the network.
///
/// Installed when registration lookups are disabled by configuration. Every
/// fetch resolves immediately to [`RegistrationInfo::Disabled`], which the
/// response contract renders as `null`.
///
/// # Use Cases
///
/// - Offline or air-gapped deployments
/// - Test environments where outbound traffic is unwanted
pub struct NullRegistrationLookup;

impl NullRegistrationLookup {
    /// Creates a new NullRegistrationLookup instance.
    pub fn new() -> Self {
        debug!("Using NullRegistrationLookup (registration lookups disabled)");
        Self
    }
}

impl Default for NullRegistrationLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationLookup for NullRegistrationLookup {
    async fn fetch(&self, _domain: &str) -> RegistrationInfo {
        RegistrationInfo::Disabled
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
