//! DTOs for the reliability check endpoint.

use crate::domain::entities::{Evaluation, RegistrationInfo, SocialSignals, SourceRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Query parameters for the reliability check endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckQuery {
    /// The article or site URL to evaluate (absolute, HTTP/HTTPS).
    #[validate(length(min = 1, max = 2048, message = "url must be between 1 and 2048 characters"))]
    pub url: String,
}

/// Full reliability report returned to the client.
///
/// `registration_info` is a string map on success, `{"error": reason}` when
/// the lookup failed, and `null` when lookups are disabled. `media_details`
/// is empty when the domain has no dataset entry.
#[derive(Debug, Serialize)]
pub struct ReliabilityReport {
    pub is_reliable: bool,
    pub message: String,
    pub domain: String,
    pub registration_info: Option<BTreeMap<String, String>>,
    pub media_details: BTreeMap<String, String>,
    pub auxiliary_signals: AuxiliarySignals,
}

/// Simulated engagement counters carried in every report.
#[derive(Debug, Serialize)]
pub struct AuxiliarySignals {
    pub twitter_shares: u32,
    pub facebook_shares: u32,
    pub reddit_mentions: u32,
}

impl From<SocialSignals> for AuxiliarySignals {
    fn from(signals: SocialSignals) -> Self {
        Self {
            twitter_shares: signals.twitter_shares,
            facebook_shares: signals.facebook_shares,
            reddit_mentions: signals.reddit_mentions,
        }
    }
}

impl ReliabilityReport {
    /// Assembles the outbound report from an evaluation and sampled signals.
    ///
    /// Pure composition: every decision was made upstream, this only shapes
    /// the payload.
    pub fn assemble(evaluation: Evaluation, signals: SocialSignals) -> Self {
        let Evaluation {
            domain,
            verdict,
            registration,
        } = evaluation;

        let media_details = verdict
            .matched
            .as_ref()
            .map(media_details)
            .unwrap_or_default();

        Self {
            is_reliable: verdict.is_reliable,
            message: verdict.message.to_string(),
            domain,
            registration_info: registration_details(registration),
            media_details,
            auxiliary_signals: signals.into(),
        }
    }
}

/// Projects the exposed subset of a matched record into the response.
///
/// Only these four fields leave the service; the rest of the record stays
/// internal.
fn media_details(record: &SourceRecord) -> BTreeMap<String, String> {
    let mut details = BTreeMap::new();
    details.insert("publisher_name".to_string(), record.publisher_name.clone());
    details.insert(
        "factual_reporting".to_string(),
        record.factual_reporting.clone(),
    );
    details.insert("bias".to_string(), record.bias.clone());
    details.insert("source_url".to_string(), record.source_url.clone());
    details
}

/// Maps registration data onto the wire shape (`map | null`).
fn registration_details(registration: RegistrationInfo) -> Option<BTreeMap<String, String>> {
    match registration {
        RegistrationInfo::Available(fields) => Some(fields),
        RegistrationInfo::Unavailable { reason } => {
            let mut fields = BTreeMap::new();
            fields.insert("error".to_string(), reason);
            Some(fields)
        }
        RegistrationInfo::Disabled => None,
    }
}
