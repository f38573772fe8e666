//! Local argument validation for coinkit operations.
//!
//! Every façade operation validates its arguments here before any network
//! call is made, so malformed input never reaches the wire.

use crate::error::{CoinKitError, Result};

/// Validate a transaction or conversion amount.
///
/// Accepts any positive finite number. Rejects zero, negatives, NaN and
/// infinities.
pub fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoinKitError::invalid_amount(amount.to_string()));
    }
    Ok(())
}

/// Validate a single address (or token/crypto identifier).
///
/// Any non-empty string is accepted; addresses are opaque to this library.
pub fn validate_address(address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(CoinKitError::invalid_address(
            "address must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// Validate a pair of addresses in one call.
pub fn validate_addresses(from: &str, to: &str) -> Result<()> {
    validate_address(from)?;
    validate_address(to)
}
