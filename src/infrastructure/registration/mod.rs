//! Domain registration data retrieval.
//!
//! Provides a [`RegistrationLookup`] trait with two implementations:
//! - [`RdapClient`] - Production RDAP registry client
//! - [`NullRegistrationLookup`] - No-op implementation for disabled lookups

mod null_lookup;
mod rdap_client;
mod service;

pub use null_lookup::NullRegistrationLookup;
pub use rdap_client::RdapClient;
pub use service::RegistrationLookup;

#[cfg(test)]
pub use service::MockRegistrationLookup;
