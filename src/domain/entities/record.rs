//! Source record entity describing one known unreliable publisher.

/// A reference dataset entry for a flagged news source.
///
/// One record exists per domain. The `domain` field is the lookup key and is
/// stored in normalized form (lowercase, no leading `www.`). The remaining
/// fields are externally sourced rating strings and are carried verbatim;
/// their vocabulary is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub domain: String,
    pub publisher_name: String,
    pub factual_reporting: String,
    pub bias: String,
    pub source_url: String,
}

impl SourceRecord {
    /// Creates a new source record.
    pub fn new(
        domain: impl Into<String>,
        publisher_name: impl Into<String>,
        factual_reporting: impl Into<String>,
        bias: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            publisher_name: publisher_name.into(),
            factual_reporting: factual_reporting.into(),
            bias: bias.into(),
            source_url: source_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = SourceRecord::new(
            "dubious-news.com",
            "Dubious News",
            "Low",
            "Questionable",
            "https://ratings.example.org/dubious-news/",
        );

        assert_eq!(record.domain, "dubious-news.com");
        assert_eq!(record.publisher_name, "Dubious News");
        assert_eq!(record.factual_reporting, "Low");
        assert_eq!(record.bias, "Questionable");
        assert_eq!(record.source_url, "https://ratings.example.org/dubious-news/");
    }
}
