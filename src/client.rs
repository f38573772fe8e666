//! High-level client façade.
//!
//! [`CoinKit`] routes each operation to one endpoint of one of the three
//! configured upstream services (price feed, payment gateway, blockchain
//! explorer). Arguments are validated locally before anything touches the
//! network, and every transport failure is mapped to an error naming the
//! operation that failed.

use crate::config::Config;
use crate::error::{CoinKitError, Result, TransportError};
use crate::http::{ApiTransport, HttpClientBuilder};
use crate::transaction::{self, TransactionEnvelope};
use crate::utils::{validate_address, validate_addresses, validate_amount};
use crate::wallet::{Wallet, WalletStore};
use futures::future::try_join_all;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

#[derive(Deserialize)]
struct BalanceResponse {
    balance: f64,
}

/// Aggregated client for the price feed, payment gateway and blockchain
/// explorer services, plus the local wallet store used by [`CoinKit::send_crypto`].
///
/// # Example
/// ```no_run
/// # use coinkit::{CoinKit, Config};
/// # async fn example() -> coinkit::Result<()> {
/// let mut kit = CoinKit::new(Config::new("my-api-key"))?;
/// let wallet = kit.create_wallet()?;
/// let receipt = kit
///     .send_crypto(wallet.address(), "recipient-address", 10.0)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct CoinKit {
    config: Config,
    transport: Box<dyn ApiTransport>,
    wallets: WalletStore,
}

impl std::fmt::Debug for CoinKit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinKit")
            .field("config", &self.config)
            .field("wallets", &self.wallets)
            .finish_non_exhaustive()
    }
}

impl CoinKit {
    /// Create a client with the production HTTP transport.
    ///
    /// # Errors
    /// Returns an error if the config is invalid (empty API key) or the HTTP
    /// client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let transport = HttpClientBuilder::new(config.api_key.clone())
            .build()
            .map_err(Self::transport_err("initialize the HTTP client"))?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client with a caller-supplied transport.
    ///
    /// Used by tests and by hosts that bring their own HTTP stack.
    pub fn with_transport(config: Config, transport: impl ApiTransport + 'static) -> Self {
        Self {
            config,
            transport: Box::new(transport),
            wallets: WalletStore::new(),
        }
    }

    /// The wallet store owned by this client.
    pub fn wallet_store(&self) -> &WalletStore {
        &self.wallets
    }

    fn transport_err(operation: &'static str) -> impl FnOnce(TransportError) -> CoinKitError {
        move |source| {
            error!(operation, cause = %source, "upstream call failed");
            CoinKitError::Transport { operation, source }
        }
    }

    // ==================== Portfolio Tracker ====================

    /// Fetch current prices for the given crypto identifiers.
    pub async fn get_real_time_prices(&self, cryptos: &[&str]) -> Result<Value> {
        for crypto in cryptos {
            validate_address(crypto)?;
        }
        let url = format!("{}/prices", self.config.api_base.prices());
        let list = cryptos.join(",");
        self.transport
            .get_json(&url, &[("cryptos", list.as_str())])
            .await
            .map_err(Self::transport_err("fetch real-time prices"))
    }

    /// Sum the balances of the given addresses.
    ///
    /// Balance lookups run in parallel with no ordering guarantee among
    /// themselves. If any lookup fails the whole call fails; no partial sum
    /// is returned.
    pub async fn get_portfolio_value(&self, addresses: &[&str]) -> Result<f64> {
        for address in addresses {
            validate_address(address)?;
        }

        let urls: Vec<String> = addresses
            .iter()
            .map(|address| self.explorer_url(&format!("address/{address}/balance")))
            .collect();
        let lookups = urls.iter().map(|url| self.transport.get_json(url, &[]));

        let responses = try_join_all(lookups)
            .await
            .map_err(Self::transport_err("fetch portfolio value"))?;

        let mut total = 0.0;
        for response in responses {
            let parsed: BalanceResponse = serde_json::from_value(response)
                .map_err(TransportError::from)
                .map_err(Self::transport_err("fetch portfolio value"))?;
            total += parsed.balance;
        }
        Ok(total)
    }

    // ==================== Crypto Wallet ====================

    /// Generate a fresh wallet and add it to this client's store.
    pub fn create_wallet(&mut self) -> Result<Wallet> {
        self.wallets.create()
    }

    /// Sign a transaction with the sender's local wallet and submit it to the
    /// explorer.
    ///
    /// Submission never starts when signing fails; in particular an unknown
    /// `from` address surfaces as [`CoinKitError::UnknownWallet`] without any
    /// network contact.
    pub async fn send_crypto(&self, from: &str, to: &str, amount: f64) -> Result<Value> {
        validate_addresses(from, to)?;
        validate_amount(amount)?;

        let envelope = transaction::sign(&self.wallets, from, to, amount)?;
        self.submit_transaction(&envelope).await
    }

    /// Submit a signed transaction envelope to the explorer.
    pub async fn submit_transaction(&self, envelope: &TransactionEnvelope) -> Result<Value> {
        let url = self.explorer_url("transaction/send");
        let body = serde_json::to_value(envelope)?;
        self.transport.post_json(&url, &body).await.map_err(|source| {
            error!(cause = %source, "transaction submission failed");
            CoinKitError::Submission(source)
        })
    }

    // ==================== Payment Gateway ====================

    /// Forward a payment to the gateway's processing endpoint.
    pub async fn process_payment(&self, from: &str, to: &str, amount: f64) -> Result<Value> {
        validate_addresses(from, to)?;
        validate_amount(amount)?;

        let url = format!("{}/process", self.config.api_base.payment_gateway());
        let body = json!({ "fromAddress": from, "toAddress": to, "amount": amount });
        self.transport
            .post_json(&url, &body)
            .await
            .map_err(Self::transport_err("process payment"))
    }

    /// Convert a crypto amount into fiat via the price feed.
    pub async fn convert_to_fiat(&self, crypto: &str, amount: f64) -> Result<Value> {
        validate_address(crypto)?;
        validate_amount(amount)?;

        let url = format!("{}/convert", self.config.api_base.prices());
        let amount_param = amount.to_string();
        self.transport
            .get_json(&url, &[("crypto", crypto), ("amount", amount_param.as_str())])
            .await
            .map_err(Self::transport_err("convert to fiat"))
    }

    // ==================== Decentralized Exchange ====================

    /// Swap one token for another.
    pub async fn swap(&self, from_token: &str, to_token: &str, amount: f64) -> Result<Value> {
        validate_addresses(from_token, to_token)?;
        validate_amount(amount)?;

        let url = self.explorer_url("swap");
        let body = json!({ "fromToken": from_token, "toToken": to_token, "amount": amount });
        self.transport
            .post_json(&url, &body)
            .await
            .map_err(Self::transport_err("swap tokens"))
    }

    /// Add liquidity for a token.
    pub async fn add_liquidity(&self, token: &str, amount: f64) -> Result<Value> {
        validate_address(token)?;
        validate_amount(amount)?;

        let url = self.explorer_url("liquidity/add");
        let body = json!({ "token": token, "amount": amount });
        self.transport
            .post_json(&url, &body)
            .await
            .map_err(Self::transport_err("add liquidity"))
    }

    /// Remove liquidity for a token.
    pub async fn remove_liquidity(&self, token: &str, amount: f64) -> Result<Value> {
        validate_address(token)?;
        validate_amount(amount)?;

        let url = self.explorer_url("liquidity/remove");
        let body = json!({ "token": token, "amount": amount });
        self.transport
            .post_json(&url, &body)
            .await
            .map_err(Self::transport_err("remove liquidity"))
    }

    // ==================== Lending & Borrowing ====================

    /// Lend a crypto amount.
    pub async fn lend(&self, crypto: &str, amount: f64) -> Result<Value> {
        validate_address(crypto)?;
        validate_amount(amount)?;

        let url = self.explorer_url("lend");
        let body = json!({ "crypto": crypto, "amount": amount });
        self.transport
            .post_json(&url, &body)
            .await
            .map_err(Self::transport_err("lend crypto"))
    }

    /// Borrow a crypto amount against collateral.
    pub async fn borrow(&self, crypto: &str, amount: f64, collateral: f64) -> Result<Value> {
        validate_address(crypto)?;
        validate_amount(amount)?;
        validate_amount(collateral)?;

        let url = self.explorer_url("borrow");
        let body = json!({ "crypto": crypto, "amount": amount, "collateral": collateral });
        self.transport
            .post_json(&url, &body)
            .await
            .map_err(Self::transport_err("borrow crypto"))
    }

    /// Fetch current lending/borrowing interest rates.
    pub async fn get_rates(&self) -> Result<Value> {
        let url = self.explorer_url("rates");
        self.transport
            .get_json(&url, &[])
            .await
            .map_err(Self::transport_err("fetch interest rates"))
    }

    // ==================== Blockchain Explorer ====================

    /// Fetch the details of a transaction by hash.
    pub async fn get_transaction_details(&self, tx_hash: &str) -> Result<Value> {
        validate_address(tx_hash)?;

        let url = self.explorer_url(&format!("transaction/{tx_hash}"));
        self.transport
            .get_json(&url, &[])
            .await
            .map_err(Self::transport_err("fetch transaction details"))
    }

    /// Fetch the balance of a single address.
    pub async fn get_address_balance(&self, address: &str) -> Result<Value> {
        validate_address(address)?;

        let url = self.explorer_url(&format!("address/{address}/balance"));
        self.transport
            .get_json(&url, &[])
            .await
            .map_err(Self::transport_err("fetch address balance"))
    }

    fn explorer_url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.api_base.blockchain_explorer())
    }
}
