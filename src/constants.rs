//! Constants shared across the coinkit library.

/// Default base URL for the price feed service
pub const DEFAULT_PRICES_BASE: &str = "https://api.cryptocurrencyprices.com";

/// Default base URL for the payment gateway service
pub const DEFAULT_PAYMENT_GATEWAY_BASE: &str = "https://api.paymentgateway.com";

/// Default base URL for the blockchain explorer service
pub const DEFAULT_BLOCKCHAIN_EXPLORER_BASE: &str = "https://api.blockchainexplorer.com";

/// RSA modulus size for generated wallet keypairs
pub const RSA_KEY_BITS: usize = 2048;
