//! Error types for the coinkit library.

use thiserror::Error;

/// Result type alias for coinkit operations.
pub type Result<T> = std::result::Result<T, CoinKitError>;

#[derive(Error, Debug)]
pub enum CoinKitError {
    #[error("Invalid amount '{0}'. Expected a positive finite number.")]
    InvalidAmount(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("{0}")]
    InvalidConfig(String),

    #[error("No wallet found for the requested sender address. Create a wallet first and use its public key as the from-address.")]
    UnknownWallet(String),

    #[error("Failed to {operation}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("Failed to send transaction")]
    Submission(#[source] TransportError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file format: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid hex encoding: {0}")]
    HexDecode(#[from] hex::FromHexError),

    // ==================== Key & Signature Errors ====================
    #[error("Key generation failed: {0}")]
    KeyGeneration(#[from] rsa::Error),

    #[error("Invalid private key encoding: {0}")]
    PrivateKeyEncoding(#[from] rsa::pkcs8::Error),

    #[error("Invalid public key encoding: {0}")]
    PublicKeyEncoding(#[from] rsa::pkcs8::spki::Error),

    #[error("Signing failed: {0}")]
    Signature(#[from] rsa::signature::Error),
}

impl CoinKitError {
    /// Create an invalid amount error
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    /// Create an invalid address error
    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::InvalidAddress(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Low-level failure of a single outbound HTTP call.
///
/// Wrapped into [`CoinKitError::Transport`] or [`CoinKitError::Submission`]
/// by the façade so callers see which high-level operation failed while the
/// underlying cause stays available through `std::error::Error::source`.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Network request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Deserialize(#[from] serde_json::Error),
}
