//! In-memory wallet storage.
//!
//! A wallet is an RSA keypair; its public key PEM doubles as its address.
//! Wallets live only for the lifetime of the store that created them. There
//! is no persistence and no key rotation.

use crate::crypto;
use crate::error::Result;
use std::fmt;

/// A local wallet: an RSA keypair in PEM encoding.
///
/// The private key never leaves the process and is redacted from `Debug`
/// output.
#[derive(Clone)]
pub struct Wallet {
    /// SPKI PEM encoding of the public key; used as the wallet's address
    pub public_key: String,
    /// PKCS#8 PEM encoding of the matching private key
    pub private_key: String,
}

impl Wallet {
    /// Generate a wallet with a fresh keypair.
    pub fn generate() -> Result<Self> {
        let (private_key, public_key) = crypto::generate_keypair()?;
        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// The wallet's address (its public key PEM).
    pub fn address(&self) -> &str {
        &self.public_key
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Holds the wallets created during this process's lifetime and resolves an
/// address back to its keypair.
///
/// The store is append-only: [`WalletStore::create`] is the only mutation.
/// Each generated public key is unique, so the address is an unambiguous
/// lookup key.
#[derive(Debug, Default)]
pub struct WalletStore {
    wallets: Vec<Wallet>,
}

impl WalletStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh wallet, add it to the store and return a copy.
    ///
    /// # Errors
    /// Propagates key-generation failure (entropy/resource exhaustion).
    pub fn create(&mut self) -> Result<Wallet> {
        let wallet = Wallet::generate()?;
        self.wallets.push(wallet.clone());
        Ok(wallet)
    }

    /// Look up a wallet by its address (public key PEM).
    ///
    /// A missing wallet is not an error at this layer; callers decide how to
    /// escalate `None`.
    pub fn find_by_address(&self, address: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.public_key == address)
    }

    /// Number of wallets in the store.
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    /// True if no wallet has been created yet.
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_adds_wallet_to_store() {
        let mut store = WalletStore::new();
        assert!(store.is_empty());

        let wallet = store.create().unwrap();
        assert_eq!(store.len(), 1);

        let found = store.find_by_address(&wallet.public_key).unwrap();
        assert_eq!(found.public_key, wallet.public_key);
        assert_eq!(found.private_key, wallet.private_key);
    }

    #[test]
    fn test_created_wallets_have_unique_addresses() {
        let mut store = WalletStore::new();
        let w1 = store.create().unwrap();
        let w2 = store.create().unwrap();

        assert_ne!(w1.public_key, w2.public_key);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_by_address_unknown() {
        let mut store = WalletStore::new();
        store.create().unwrap();

        assert!(store.find_by_address("unknown-address").is_none());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let mut store = WalletStore::new();
        let wallet = store.create().unwrap();

        let debug_str = format!("{wallet:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("BEGIN PRIVATE KEY"));
    }
}
