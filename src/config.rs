//! Backing-store configuration.
//!
//! The connection endpoint is resolved exactly once at process start and
//! handed to the adapters as an explicit value. Nothing else in the crate
//! reads the process environment.

use std::env;
use thiserror::Error;

/// Environment variable naming the backing-store endpoint.
pub const ENDPOINT_VAR: &str = "DATABASE_URL";

/// Errors raised while resolving store configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint variable is unset or blank.
    #[error("missing backing-store endpoint: set {ENDPOINT_VAR}")]
    MissingEndpoint,
}

/// Configuration for the backing task store.
///
/// Constructed once at startup and passed into the table provisioner and
/// task store rather than read ambiently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    endpoint: String,
}

impl StoreConfig {
    /// Creates a configuration with an explicit endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Resolves the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEndpoint`] when [`ENDPOINT_VAR`] is
    /// unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = env::var(ENDPOINT_VAR).map_err(|_| ConfigError::MissingEndpoint)?;
        if endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        Ok(Self::new(endpoint))
    }

    /// Returns the backing-store endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
