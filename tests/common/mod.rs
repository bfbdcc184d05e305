#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use newscheck::domain::entities::{RegistrationInfo, SourceRecord};
use newscheck::infrastructure::dataset::SourceCatalog;
use newscheck::infrastructure::registration::{NullRegistrationLookup, RegistrationLookup};
use newscheck::state::AppState;

/// Reference records used across handler tests.
pub fn fixture_catalog() -> Arc<SourceCatalog> {
    Arc::new(SourceCatalog::from_records(vec![
        SourceRecord::new(
            "100percentfedup.com",
            "100 Percent Fed Up",
            "Low",
            "Extreme Right",
            "https://100percentfedup.com",
        ),
        SourceRecord::new(
            "dubious-news.com",
            "Dubious News",
            "Very Low",
            "Fake News",
            "https://dubious-news.com",
        ),
    ]))
}

pub fn empty_catalog() -> Arc<SourceCatalog> {
    Arc::new(SourceCatalog::from_records(Vec::new()))
}

/// Registration lookup stub returning a fixed response and counting calls.
pub struct ScriptedRegistrationLookup {
    response: RegistrationInfo,
    calls: AtomicUsize,
}

impl ScriptedRegistrationLookup {
    pub fn returning(response: RegistrationInfo) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrationLookup for ScriptedRegistrationLookup {
    async fn fetch(&self, _domain: &str) -> RegistrationInfo {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Registration fields as the RDAP client would flatten them.
pub fn sample_registration() -> RegistrationInfo {
    let mut fields = BTreeMap::new();
    fields.insert("domain".to_string(), "100percentfedup.com".to_string());
    fields.insert("registrar".to_string(), "GoDaddy.com, LLC".to_string());
    fields.insert("created".to_string(), "2012-05-21".to_string());
    fields.insert("expires".to_string(), "2026-05-21".to_string());
    RegistrationInfo::Available(fields)
}

/// State with the fixture catalog and the given registration lookup.
pub fn create_test_state(registration: Arc<dyn RegistrationLookup>) -> AppState {
    AppState::new(fixture_catalog(), registration)
}

/// State with registration lookups disabled.
pub fn create_disabled_state() -> AppState {
    AppState::new(fixture_catalog(), Arc::new(NullRegistrationLookup::new()))
}

/// State with no dataset records loaded.
pub fn create_empty_state() -> AppState {
    AppState::new(empty_catalog(), Arc::new(NullRegistrationLookup::new()))
}
