//! Reliability verdict produced by evaluating a domain against the dataset.

use super::record::SourceRecord;
use super::registration::RegistrationInfo;

/// Message returned when the domain appears in the reference dataset.
pub const FLAGGED_MESSAGE: &str = "This website is in the list of known unreliable sources.";

/// Message returned when the domain has no dataset entry.
pub const CLEAR_MESSAGE: &str = "No flagged misinformation detected.";

/// Outcome of a dataset lookup for a single domain.
///
/// An absent dataset entry is a normal outcome, not an error: it produces a
/// reliable verdict with no matched record.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub is_reliable: bool,
    pub message: &'static str,
    pub matched: Option<SourceRecord>,
}

impl Verdict {
    /// Verdict for a domain found in the reference dataset.
    pub fn flagged(record: SourceRecord) -> Self {
        Self {
            is_reliable: false,
            message: FLAGGED_MESSAGE,
            matched: Some(record),
        }
    }

    /// Verdict for a domain with no dataset entry.
    pub fn clear() -> Self {
        Self {
            is_reliable: true,
            message: CLEAR_MESSAGE,
            matched: None,
        }
    }
}

/// Complete evaluation of one checked URL.
///
/// Bundles the normalized domain, the dataset verdict, and the best-effort
/// registration data gathered for the same domain.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub domain: String,
    pub verdict: Verdict,
    pub registration: RegistrationInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> SourceRecord {
        SourceRecord::new(
            "dubious-news.com",
            "Dubious News",
            "Low",
            "Questionable",
            "https://ratings.example.org/dubious-news/",
        )
    }

    #[test]
    fn test_flagged_verdict() {
        let verdict = Verdict::flagged(test_record());

        assert!(!verdict.is_reliable);
        assert_eq!(
            verdict.message,
            "This website is in the list of known unreliable sources."
        );
        assert!(verdict.matched.is_some());
        assert_eq!(verdict.matched.unwrap().domain, "dubious-news.com");
    }

    #[test]
    fn test_clear_verdict() {
        let verdict = Verdict::clear();

        assert!(verdict.is_reliable);
        assert_eq!(verdict.message, "No flagged misinformation detected.");
        assert!(verdict.matched.is_none());
    }
}
