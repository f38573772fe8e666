//! Transaction canonicalization and signing.
//!
//! The pipeline is linear: canonicalize → resolve sender wallet → sign.
//! Every stage short-circuits on failure, so a transaction whose sender is
//! unknown is never signed and never reaches the network.

use crate::crypto;
use crate::error::{CoinKitError, Result};
use crate::wallet::WalletStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The canonical content of a transaction.
///
/// Serialization order is fixed (`from`, `to`, `amount`) so that the payload
/// is byte-identical between signing and any later verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl TransactionPayload {
    /// Serialize this payload into its canonical JSON form.
    pub fn canonicalize(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A signed, submission-ready transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    /// Canonical JSON serialization of the transaction payload
    pub payload: String,
    /// Hex-encoded SHA-256/RSA signature over the payload bytes
    pub signature: String,
}

impl TransactionEnvelope {
    /// Decode the canonical payload back into its structured form.
    pub fn decode_payload(&self) -> Result<TransactionPayload> {
        Ok(serde_json::from_str(&self.payload)?)
    }
}

/// Produce a signed transaction envelope.
///
/// Resolves `from` in the wallet store and signs the canonical payload with
/// that wallet's private key. Pure CPU work over already-resident key
/// material; performs no I/O.
///
/// # Errors
/// Returns [`CoinKitError::UnknownWallet`] when `from` matches no wallet in
/// the store. No fallback key is ever used.
pub fn sign(
    store: &WalletStore,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<TransactionEnvelope> {
    let payload = TransactionPayload {
        from: from.to_string(),
        to: to.to_string(),
        amount,
    }
    .canonicalize()?;

    let wallet = store
        .find_by_address(from)
        .ok_or_else(|| CoinKitError::UnknownWallet(from.to_string()))?;

    let signature = crypto::sign_payload(&wallet.private_key, payload.as_bytes())?;
    debug!(payload_len = payload.len(), "transaction signed");

    Ok(TransactionEnvelope { payload, signature })
}

/// Check an envelope's signature against a sender's public key.
///
/// Submission does not require this; it exists so signatures are checkable
/// without leaving the process.
pub fn verify(public_key_pem: &str, envelope: &TransactionEnvelope) -> Result<bool> {
    crypto::verify_payload(
        public_key_pem,
        envelope.payload.as_bytes(),
        &envelope.signature,
    )
}
