//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional and fall back to defaults suitable for local
//! development:
//!
//! ```bash
//! export DATASET_PATH="data/unreliable_sources.csv"
//! export LISTEN="0.0.0.0:3000"
//! export RUST_LOG="info"
//! export LOG_FORMAT="text"              # or "json"
//! export RDAP_BASE_URL="https://rdap.org"
//! export REGISTRATION_LOOKUPS="true"    # "false" disables outbound lookups
//! export REGISTRATION_TIMEOUT_SECONDS="10"
//! ```

use anyhow::Result;
use std::env;

/// Dataset location used when `DATASET_PATH` is not set.
pub const DEFAULT_DATASET_PATH: &str = "data/unreliable_sources.csv";

/// RDAP aggregator used when `RDAP_BASE_URL` is not set.
pub const DEFAULT_RDAP_BASE_URL: &str = "https://rdap.org";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL of the RDAP service queried for registration data.
    pub rdap_base_url: String,
    /// When false, the service runs with registration lookups disabled and
    /// reports `registration_info: null` in every response.
    pub registration_lookups: bool,
    /// Per-request timeout for registration lookups in seconds.
    pub registration_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let dataset_path =
            env::var("DATASET_PATH").unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let rdap_base_url =
            env::var("RDAP_BASE_URL").unwrap_or_else(|_| DEFAULT_RDAP_BASE_URL.to_string());

        let registration_lookups = env::var("REGISTRATION_LOOKUPS")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let registration_timeout_seconds = env::var("REGISTRATION_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            dataset_path,
            listen_addr,
            log_level,
            log_format,
            rdap_base_url,
            registration_lookups,
            registration_timeout_seconds,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dataset_path` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `rdap_base_url` is not an HTTP(S) URL
    /// - `registration_timeout_seconds` is outside 1..=120
    pub fn validate(&self) -> Result<()> {
        if self.dataset_path.is_empty() {
            anyhow::bail!("DATASET_PATH must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.rdap_base_url.starts_with("http://")
            && !self.rdap_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "RDAP_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.rdap_base_url
            );
        }

        if self.registration_timeout_seconds == 0 || self.registration_timeout_seconds > 120 {
            anyhow::bail!(
                "REGISTRATION_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.registration_timeout_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Dataset path: {}", self.dataset_path);

        if self.registration_lookups {
            tracing::info!(
                "  Registration lookups: enabled ({}, timeout {}s)",
                self.rdap_base_url,
                self.registration_timeout_seconds
            );
        } else {
            tracing::info!("  Registration lookups: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            dataset_path: "data/unreliable_sources.csv".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            rdap_base_url: "https://rdap.org".to_string(),
            registration_lookups: true,
            registration_timeout_seconds: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test invalid RDAP base URL
        config.rdap_base_url = "rdap.org".to_string();
        assert!(config.validate().is_err());

        config.rdap_base_url = "https://rdap.org".to_string();

        // Test timeout bounds
        config.registration_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.registration_timeout_seconds = 121;
        assert!(config.validate().is_err());

        config.registration_timeout_seconds = 120;
        assert!(config.validate().is_ok());

        // Test empty dataset path
        config.dataset_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATASET_PATH");
            env::remove_var("LISTEN");
            env::remove_var("RDAP_BASE_URL");
            env::remove_var("REGISTRATION_LOOKUPS");
            env::remove_var("REGISTRATION_TIMEOUT_SECONDS");
        }

        let config = Config::from_env();

        assert_eq!(config.dataset_path, DEFAULT_DATASET_PATH);
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.rdap_base_url, DEFAULT_RDAP_BASE_URL);
        assert!(config.registration_lookups);
        assert_eq!(config.registration_timeout_seconds, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATASET_PATH", "/srv/sources.csv");
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("RDAP_BASE_URL", "https://rdap.example.net/");
            env::set_var("REGISTRATION_TIMEOUT_SECONDS", "30");
        }

        let config = Config::from_env();

        assert_eq!(config.dataset_path, "/srv/sources.csv");
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.rdap_base_url, "https://rdap.example.net/");
        assert_eq!(config.registration_timeout_seconds, 30);

        // Cleanup
        unsafe {
            env::remove_var("DATASET_PATH");
            env::remove_var("LISTEN");
            env::remove_var("RDAP_BASE_URL");
            env::remove_var("REGISTRATION_TIMEOUT_SECONDS");
        }
    }

    #[test]
    #[serial]
    fn test_registration_lookups_toggle() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REGISTRATION_LOOKUPS", "false");
        }
        assert!(!Config::from_env().registration_lookups);

        unsafe {
            env::set_var("REGISTRATION_LOOKUPS", "0");
        }
        assert!(!Config::from_env().registration_lookups);

        unsafe {
            env::set_var("REGISTRATION_LOOKUPS", "true");
        }
        assert!(Config::from_env().registration_lookups);

        // Unrecognized values keep lookups enabled
        unsafe {
            env::set_var("REGISTRATION_LOOKUPS", "yes");
        }
        assert!(Config::from_env().registration_lookups);

        // Cleanup
        unsafe {
            env::remove_var("REGISTRATION_LOOKUPS");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_falls_back_to_default() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REGISTRATION_TIMEOUT_SECONDS", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.registration_timeout_seconds, 10);

        // Cleanup
        unsafe {
            env::remove_var("REGISTRATION_TIMEOUT_SECONDS");
        }
    }
}
