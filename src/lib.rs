//! coinkit - aggregated cryptocurrency API client with local wallet signing
//!
//! This library bundles several cryptocurrency HTTP APIs (price feed, payment
//! gateway, blockchain explorer) behind one façade and keeps an in-memory set
//! of RSA wallets used to sign outgoing transactions before submission.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod client;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod http;
pub mod transaction;
pub mod utils;
pub mod wallet;

pub use client::CoinKit;
pub use config::{ApiBase, Config};
pub use error::{CoinKitError, Result, TransportError};
pub use http::{ApiTransport, HttpClient, HttpClientBuilder};
pub use transaction::{sign, verify, TransactionEnvelope, TransactionPayload};
pub use wallet::{Wallet, WalletStore};
