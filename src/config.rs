//! Configuration for the coinkit client.

use crate::constants::{
    DEFAULT_BLOCKCHAIN_EXPLORER_BASE, DEFAULT_PAYMENT_GATEWAY_BASE, DEFAULT_PRICES_BASE,
};
use crate::error::{CoinKitError, Result};
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`crate::CoinKit`] client.
///
/// Hosting applications build this programmatically or deserialize it from
/// whatever source they choose; [`Config::from_toml_str`] is provided as a
/// convenience. Unrecognized keys are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bearer credential attached to every outbound request
    pub api_key: String,
    /// Per-service base URL overrides
    #[serde(default)]
    pub api_base: ApiBase,
}

impl Config {
    /// Create a config with the given API key and default base URLs.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: ApiBase::default(),
        }
    }

    /// Replace the base URL overrides.
    #[must_use]
    pub fn with_api_base(mut self, api_base: ApiBase) -> Self {
        self.api_base = api_base;
        self
    }

    /// Parse a config from a TOML document.
    ///
    /// # Errors
    /// Returns an error if the document is not valid TOML or fails
    /// validation.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config is usable.
    ///
    /// # Errors
    /// Returns an error if the API key is empty.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(CoinKitError::invalid_config(
                "api_key must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}

/// Optional base URL overrides for the three upstream services.
///
/// Each accessor falls back to the documented default when no override is
/// set. Trailing slashes are trimmed so endpoint paths can be appended
/// directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_gateway: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain_explorer: Option<String>,
}

impl ApiBase {
    /// Base URL of the price feed service.
    pub fn prices(&self) -> &str {
        base_or(&self.prices, DEFAULT_PRICES_BASE)
    }

    /// Base URL of the payment gateway service.
    pub fn payment_gateway(&self) -> &str {
        base_or(&self.payment_gateway, DEFAULT_PAYMENT_GATEWAY_BASE)
    }

    /// Base URL of the blockchain explorer service.
    pub fn blockchain_explorer(&self) -> &str {
        base_or(&self.blockchain_explorer, DEFAULT_BLOCKCHAIN_EXPLORER_BASE)
    }
}

fn base_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .map(|s| s.trim_end_matches('/'))
        .unwrap_or(default)
}
