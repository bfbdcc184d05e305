//! Reference dataset loading and lookup.

use crate::domain::entities::SourceRecord;
use crate::utils::domain_extractor::normalize_host;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

/// Shape check applied to every dataset domain after normalization.
static DOMAIN_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.-]+$").unwrap());

/// Header columns every dataset file must carry. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 5] = [
    "domain",
    "publisher_name",
    "factual_reporting",
    "bias",
    "source_url",
];

/// Errors that can occur while loading the reference dataset.
///
/// All of these are fatal at startup: the service refuses to run without a
/// well-formed dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Invalid domain '{domain}' at line {line}")]
    InvalidDomain { domain: String, line: u64 },
}

/// One CSV row as it appears on disk, before hygiene is applied.
#[derive(Debug, Deserialize)]
struct RawRecord {
    domain: String,
    publisher_name: String,
    factual_reporting: String,
    bias: String,
    source_url: String,
}

/// Immutable in-memory table of known unreliable sources.
///
/// Built once at startup and shared across requests behind an `Arc`.
/// Lookups are exact matches on the normalized domain: no fuzzy matching and
/// no subdomain folding (`sub.example.com` does not match `example.com`).
/// Immutability makes concurrent lookups safe without locking.
#[derive(Debug)]
pub struct SourceCatalog {
    records: HashMap<String, SourceRecord>,
}

impl SourceCatalog {
    /// Loads the catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be opened, and the
    /// parsing errors documented on [`Self::from_reader`] otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_reader(BufReader::new(file))
    }

    /// Loads the catalog from any CSV byte stream.
    ///
    /// # Row Hygiene
    ///
    /// - Domains are trimmed, lowercased, and stripped of one leading `www.`
    ///   so stored keys match what the domain extractor produces
    /// - Empty domains and domains failing the shape check are rejected
    /// - Duplicate domains keep the first row; later rows are logged and skipped
    /// - A header-only file loads as an empty catalog with a warning
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::MissingColumn`] if a required header is absent,
    /// [`DatasetError::Parse`] for rows the CSV parser rejects, and
    /// [`DatasetError::InvalidDomain`] for rows whose domain fails hygiene.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| DatasetError::Parse {
            line: 1,
            message: e.to_string(),
        })?;

        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(DatasetError::MissingColumn(required));
            }
        }

        let mut records = HashMap::new();

        for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
            // Data rows start on line 2, after the header.
            let line = (index + 2) as u64;

            let raw = row.map_err(|e| DatasetError::Parse {
                line: e.position().map_or(line, |p| p.line()),
                message: e.to_string(),
            })?;

            let domain = normalize_host(raw.domain.trim());

            if domain.is_empty() || !DOMAIN_SHAPE_REGEX.is_match(&domain) {
                return Err(DatasetError::InvalidDomain {
                    domain: raw.domain,
                    line,
                });
            }

            if records.contains_key(&domain) {
                warn!(%domain, line, "Duplicate dataset domain, keeping first occurrence");
                continue;
            }

            records.insert(
                domain.clone(),
                SourceRecord::new(
                    domain,
                    raw.publisher_name.trim(),
                    raw.factual_reporting.trim(),
                    raw.bias.trim(),
                    raw.source_url.trim(),
                ),
            );
        }

        if records.is_empty() {
            warn!("Reference dataset contains no records, every domain will pass as reliable");
        }

        Ok(Self { records })
    }

    /// Builds a catalog directly from records, first occurrence winning.
    ///
    /// Record domains are expected in normalized form. Intended for tests and
    /// tooling that already hold structured data.
    pub fn from_records(items: Vec<SourceRecord>) -> Self {
        let mut records = HashMap::new();

        for record in items {
            records.entry(record.domain.clone()).or_insert(record);
        }

        Self { records }
    }

    /// Looks up a normalized domain, returning its record if flagged.
    ///
    /// The caller is responsible for normalization; keys are matched exactly.
    pub fn lookup(&self, domain: &str) -> Option<&SourceRecord> {
        self.records.get(domain)
    }

    /// Number of flagged domains in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records in unspecified order.
    pub fn records(&self) -> impl Iterator<Item = &SourceRecord> {
        self.records.values()
    }
}
