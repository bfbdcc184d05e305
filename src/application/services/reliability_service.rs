//! URL reliability evaluation service.

use std::sync::Arc;

use crate::domain::entities::{Evaluation, Verdict};
use crate::error::AppError;
use crate::infrastructure::dataset::SourceCatalog;
use crate::infrastructure::registration::RegistrationLookup;
use crate::utils::domain_extractor::extract_domain;
use serde_json::json;
use tracing::debug;

/// Service evaluating URLs against the reference dataset.
///
/// Orchestrates the full check pipeline: domain extraction, dataset lookup,
/// and registration enrichment. Holds no per-request state; the catalog is
/// immutable and the lookup client is stateless, so a single instance serves
/// all requests concurrently.
pub struct ReliabilityService {
    catalog: Arc<SourceCatalog>,
    registration: Arc<dyn RegistrationLookup>,
}

impl ReliabilityService {
    /// Creates a new reliability service.
    pub fn new(catalog: Arc<SourceCatalog>, registration: Arc<dyn RegistrationLookup>) -> Self {
        Self {
            catalog,
            registration,
        }
    }

    /// Evaluates a raw URL and gathers auxiliary signals for its domain.
    ///
    /// # Pipeline
    ///
    /// 1. Extract and normalize the domain; an invalid URL fails here, before
    ///    any dataset or network access
    /// 2. Exact-match lookup against the reference dataset
    /// 3. Best-effort registration lookup, performed for every verdict and
    ///    never able to fail the request
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed, uses a
    /// non-HTTP(S) scheme, or has no host.
    pub async fn check_url(&self, raw_url: &str) -> Result<Evaluation, AppError> {
        let domain = extract_domain(raw_url).map_err(|e| {
            AppError::bad_request("Invalid URL provided.", json!({ "reason": e.to_string() }))
        })?;

        let verdict = match self.catalog.lookup(&domain) {
            Some(record) => {
                debug!(%domain, publisher = %record.publisher_name, "Domain found in dataset");
                Verdict::flagged(record.clone())
            }
            None => {
                debug!(%domain, "Domain not in dataset");
                Verdict::clear()
            }
        };

        let registration = self.registration.fetch(&domain).await;

        Ok(Evaluation {
            domain,
            verdict,
            registration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{RegistrationInfo, SourceRecord};
    use crate::infrastructure::registration::MockRegistrationLookup;
    use std::collections::BTreeMap;

    fn test_catalog() -> Arc<SourceCatalog> {
        Arc::new(SourceCatalog::from_records(vec![SourceRecord::new(
            "dubious-news.com",
            "Dubious News",
            "Low",
            "Questionable",
            "https://ratings.example.org/dubious-news/",
        )]))
    }

    fn available_registration() -> RegistrationInfo {
        let mut fields = BTreeMap::new();
        fields.insert("registrar".to_string(), "Example Registrar".to_string());
        RegistrationInfo::Available(fields)
    }

    #[tokio::test]
    async fn test_check_url_flagged_domain() {
        let mut mock_lookup = MockRegistrationLookup::new();
        mock_lookup
            .expect_fetch()
            .withf(|domain| domain == "dubious-news.com")
            .times(1)
            .returning(|_| available_registration());

        let service = ReliabilityService::new(test_catalog(), Arc::new(mock_lookup));

        let result = service
            .check_url("https://dubious-news.com/breaking-story")
            .await;

        assert!(result.is_ok());
        let evaluation = result.unwrap();
        assert_eq!(evaluation.domain, "dubious-news.com");
        assert!(!evaluation.verdict.is_reliable);
        assert_eq!(
            evaluation.verdict.matched.unwrap().publisher_name,
            "Dubious News"
        );
        assert!(evaluation.registration.is_available());
    }

    #[tokio::test]
    async fn test_check_url_clean_domain() {
        let mut mock_lookup = MockRegistrationLookup::new();
        mock_lookup
            .expect_fetch()
            .withf(|domain| domain == "example.com")
            .times(1)
            .returning(|_| available_registration());

        let service = ReliabilityService::new(test_catalog(), Arc::new(mock_lookup));

        let result = service.check_url("https://www.example.com/").await;

        assert!(result.is_ok());
        let evaluation = result.unwrap();
        assert_eq!(evaluation.domain, "example.com");
        assert!(evaluation.verdict.is_reliable);
        assert!(evaluation.verdict.matched.is_none());
    }

    #[tokio::test]
    async fn test_check_url_invalid_performs_no_lookup() {
        let mut mock_lookup = MockRegistrationLookup::new();
        mock_lookup.expect_fetch().times(0);

        let service = ReliabilityService::new(test_catalog(), Arc::new(mock_lookup));

        let result = service.check_url("not-a-url").await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::Validation { message, .. } => {
                assert_eq!(message, "Invalid URL provided.");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_check_url_unsupported_scheme_performs_no_lookup() {
        let mut mock_lookup = MockRegistrationLookup::new();
        mock_lookup.expect_fetch().times(0);

        let service = ReliabilityService::new(test_catalog(), Arc::new(mock_lookup));

        let result = service.check_url("ftp://dubious-news.com/file").await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_check_url_registration_failure_keeps_verdict() {
        let mut mock_lookup = MockRegistrationLookup::new();
        mock_lookup
            .expect_fetch()
            .times(1)
            .returning(|_| RegistrationInfo::unavailable("timed out"));

        let service = ReliabilityService::new(test_catalog(), Arc::new(mock_lookup));

        let result = service.check_url("https://dubious-news.com/story").await;

        assert!(result.is_ok());
        let evaluation = result.unwrap();
        assert!(!evaluation.verdict.is_reliable);
        assert!(evaluation.verdict.matched.is_some());
        assert_eq!(
            evaluation.registration,
            RegistrationInfo::unavailable("timed out")
        );
    }

    #[tokio::test]
    async fn test_check_url_subdomain_does_not_match() {
        let mut mock_lookup = MockRegistrationLookup::new();
        mock_lookup
            .expect_fetch()
            .withf(|domain| domain == "news.dubious-news.com")
            .times(1)
            .returning(|_| RegistrationInfo::Disabled);

        let service = ReliabilityService::new(test_catalog(), Arc::new(mock_lookup));

        let result = service.check_url("https://news.dubious-news.com/x").await;

        assert!(result.is_ok());
        let evaluation = result.unwrap();
        assert_eq!(evaluation.domain, "news.dubious-news.com");
        assert!(evaluation.verdict.is_reliable);
    }

    #[tokio::test]
    async fn test_check_url_normalizes_before_lookup() {
        let mut mock_lookup = MockRegistrationLookup::new();
        mock_lookup
            .expect_fetch()
            .withf(|domain| domain == "dubious-news.com")
            .times(1)
            .returning(|_| RegistrationInfo::Disabled);

        let service = ReliabilityService::new(test_catalog(), Arc::new(mock_lookup));

        let result = service
            .check_url("HTTPS://WWW.DUBIOUS-NEWS.COM:443/story")
            .await;

        assert!(result.is_ok());
        let evaluation = result.unwrap();
        assert_eq!(evaluation.domain, "dubious-news.com");
        assert!(!evaluation.verdict.is_reliable);
    }
}
