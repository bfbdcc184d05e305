use std::sync::Arc;

use crate::application::services::ReliabilityService;
use crate::infrastructure::dataset::SourceCatalog;
use crate::infrastructure::registration::RegistrationLookup;

/// Shared application state injected into all handlers.
///
/// Holds only immutable data and stateless clients, so cloning per request
/// is cheap and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub reliability_service: Arc<ReliabilityService>,
    pub catalog: Arc<SourceCatalog>,
    pub registration: Arc<dyn RegistrationLookup>,
}

impl AppState {
    /// Builds the state, wiring the service to the shared catalog and
    /// registration client.
    pub fn new(catalog: Arc<SourceCatalog>, registration: Arc<dyn RegistrationLookup>) -> Self {
        let reliability_service = Arc::new(ReliabilityService::new(
            catalog.clone(),
            registration.clone(),
        ));

        Self {
            reliability_service,
            catalog,
            registration,
        }
    }
}
