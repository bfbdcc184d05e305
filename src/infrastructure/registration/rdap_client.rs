//! RDAP-backed registration lookup implementation.

use super::service::RegistrationLookup;
use crate::domain::entities::RegistrationInfo;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Registration lookup client speaking the RDAP protocol.
///
/// Queries `{base_url}/domain/{domain}` and flattens the registry document
/// into scalar display fields. The aggregator at `https://rdap.org` redirects
/// to the authoritative registry for each TLD; the client follows redirects
/// with reqwest's default policy.
///
/// Every request is bounded by the configured timeout so a slow registry
/// cannot stall the check pipeline.
pub struct RdapClient {
    http: reqwest::Client,
    base_url: String,
}

/// Top-level RDAP domain document. Only the fields flattened into the
/// response are deserialized; everything else is ignored.
#[derive(Debug, Deserialize)]
struct RdapDomain {
    #[serde(default)]
    handle: Option<String>,

    #[serde(rename = "ldhName", default)]
    ldh_name: Option<String>,

    #[serde(default)]
    status: Vec<String>,

    #[serde(default)]
    events: Vec<RdapEvent>,

    #[serde(default)]
    entities: Vec<RdapEntity>,

    #[serde(default)]
    port43: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: String,

    #[serde(rename = "eventDate")]
    event_date: String,
}

#[derive(Debug, Deserialize)]
struct RdapEntity {
    #[serde(default)]
    roles: Vec<String>,

    #[serde(rename = "vcardArray", default)]
    vcard_array: Option<Value>,
}

impl RdapClient {
    /// Creates a new RDAP client with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl RegistrationLookup for RdapClient {
    async fn fetch(&self, domain: &str) -> RegistrationInfo {
        let url = format!("{}/domain/{}", self.base_url, domain);
        debug!(%domain, "Fetching registration data");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%domain, error = %e, "Registration lookup request failed");
                return RegistrationInfo::unavailable(format!(
                    "Could not retrieve registration info: {}",
                    e
                ));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%domain, %status, "Registry returned error status");
            return RegistrationInfo::unavailable(format!(
                "Could not retrieve registration info: registry returned {}",
                status
            ));
        }

        match response.json::<RdapDomain>().await {
            Ok(document) => RegistrationInfo::Available(flatten_document(document)),
            Err(e) => {
                warn!(%domain, error = %e, "Malformed registry response");
                RegistrationInfo::unavailable(format!(
                    "Could not retrieve registration info: {}",
                    e
                ))
            }
        }
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Flattens an RDAP document into scalar display fields.
///
/// Absent fields are omitted from the map rather than rendered as empty
/// strings.
fn flatten_document(document: RdapDomain) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();

    if let Some(name) = document.ldh_name {
        fields.insert("domain".to_string(), name.to_ascii_lowercase());
    }

    if let Some(handle) = document.handle {
        fields.insert("handle".to_string(), handle);
    }

    if let Some(registrar) = registrar_name(&document.entities) {
        fields.insert("registrar".to_string(), registrar);
    }

    if !document.status.is_empty() {
        fields.insert("status".to_string(), document.status.join(", "));
    }

    for event in document.events {
        let key = match event.event_action.as_str() {
            "registration" => "created",
            "expiration" => "expires",
            "last changed" => "updated",
            _ => continue,
        };
        fields.insert(key.to_string(), format_event_date(&event.event_date));
    }

    if let Some(port43) = document.port43 {
        fields.insert("whois_server".to_string(), port43);
    }

    fields
}

/// Reformats an RDAP event date to `YYYY-MM-DD`, keeping the raw string when
/// it does not parse as RFC 3339.
fn format_event_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Pulls the registrar display name out of the jCard of the entity holding
/// the `registrar` role.
fn registrar_name(entities: &[RdapEntity]) -> Option<String> {
    let registrar = entities
        .iter()
        .find(|entity| entity.roles.iter().any(|role| role == "registrar"))?;

    let properties = registrar.vcard_array.as_ref()?.get(1)?.as_array()?;

    for property in properties {
        if let Some(entry) = property.as_array()
            && entry.first().and_then(Value::as_str) == Some("fn")
            && let Some(name) = entry.get(3).and_then(Value::as_str)
        {
            return Some(name.to_string());
        }
    }

    None
}
