//! Ariomex REST API endpoint table.
//!
//! Every supported operation is a fixed [`Endpoint`]: path, verb and whether
//! it must be signed.

/// Base URL for the Ariomex REST API.
pub const ARIOMEX_BASE_URL: &str = "https://api.ariomex.com";

/// HTTP verbs used by the Ariomex API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Parameters in the query string.
    Get,
    /// Parameters in a JSON body.
    Post,
    /// Parameters in the query string.
    Delete,
}

impl HttpMethod {
    /// Whether parameters travel in a JSON body rather than the query string.
    pub fn sends_body(self) -> bool {
        !matches!(self, Self::Get | Self::Delete)
    }

    /// The verb name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an endpoint needs the API key and signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// No authentication.
    Public,
    /// Signed with the API secret.
    Private,
}

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Path under the base URL.
    pub path: &'static str,
    /// HTTP verb.
    pub method: HttpMethod,
    /// Authentication requirement.
    pub access: Access,
}

impl Endpoint {
    /// Create an endpoint descriptor.
    pub const fn new(path: &'static str, method: HttpMethod, access: Access) -> Self {
        Self {
            path,
            method,
            access,
        }
    }

    /// Whether the request must carry a timestamp, API key and signature.
    pub fn requires_auth(&self) -> bool {
        self.access == Access::Private
    }
}

const fn public_get(path: &'static str) -> Endpoint {
    Endpoint::new(path, HttpMethod::Get, Access::Public)
}

const fn private_get(path: &'static str) -> Endpoint {
    Endpoint::new(path, HttpMethod::Get, Access::Private)
}

const fn private_post(path: &'static str) -> Endpoint {
    Endpoint::new(path, HttpMethod::Post, Access::Private)
}

const fn private_delete(path: &'static str) -> Endpoint {
    Endpoint::new(path, HttpMethod::Delete, Access::Private)
}

/// Market data endpoints (no authentication required).
pub mod general {
    use super::{Endpoint, public_get};

    /// API description document.
    pub const SWAGGER: Endpoint = public_get("/v1/public/swagger");
    /// Connectivity check.
    pub const PING: Endpoint = public_get("/v1/public/ping");
    /// Server time.
    pub const TIME: Endpoint = public_get("/v1/public/time");
    /// Market rules and symbols.
    pub const EXCHANGE_INFO: Endpoint = public_get("/v1/public/exchange_info");
    /// Coin and network details.
    pub const COINS_INFO: Endpoint = public_get("/v1/public/coins_info");
    /// Order book depth.
    pub const ORDERBOOK: Endpoint = public_get("/v1/public/orderbook");
    /// Recent public trades.
    pub const LAST_TRADES: Endpoint = public_get("/v1/public/last_trades");
    /// Latest prices.
    pub const LAST_PRICES: Endpoint = public_get("/v1/public/last_prices");
    /// OHLC candles.
    pub const CANDLESTICKS: Endpoint = public_get("/v1/public/candlesticks");
}

/// Account endpoints.
pub mod account {
    use super::{Endpoint, private_get, private_post};

    /// Account profile.
    pub const INFO: Endpoint = private_get("/v1/private/account/info");
    /// Balances per coin.
    pub const GET_BALANCE: Endpoint = private_get("/v1/private/account/get_balance");
    /// Small balances eligible for conversion.
    pub const GET_DUST_BALANCE: Endpoint = private_get("/v1/private/account/get_dust_balance");
    /// Convert dust balances.
    pub const CONVERT_DUST_BALANCE: Endpoint =
        private_post("/v1/private/account/convert_dust_balance");
}

/// Wallet endpoints.
pub mod wallet {
    use super::{Endpoint, private_get, private_post};

    /// Create deposit addresses.
    pub const GENERATE_DEPOSIT_ADDRESS: Endpoint =
        private_post("/v1/private/wallet/generate_deposit_address");
    /// List deposit addresses.
    pub const GET_DEPOSIT_ADDRESS: Endpoint =
        private_get("/v1/private/wallet/get_deposit_address");
    /// Withdraw toman to a registered IBAN.
    pub const WITHDRAW_IRT: Endpoint = private_post("/v1/private/wallet/withdraw_irt");
    /// Withdraw crypto to a registered address.
    pub const WITHDRAW_CRYPTO: Endpoint = private_post("/v1/private/wallet/withdraw_crypto");
    /// List registered withdrawal addresses.
    pub const GET_WITHDRAW_ADDRESS: Endpoint =
        private_get("/v1/private/wallet/get_withdraw_address");
}

/// Bank account endpoints.
pub mod bank {
    use super::{Endpoint, private_get, private_post};

    /// Register a bank card.
    pub const SET_CARD: Endpoint = private_post("/v1/private/bank/set_card");
    /// Register an IBAN.
    pub const SET_IBAN: Endpoint = private_post("/v1/private/bank/set_iban");
    /// List registered bank accounts.
    pub const GET_ACCOUNTS: Endpoint = private_get("/v1/private/bank/get_accounts");
}

/// History endpoints.
pub mod history {
    use super::{Endpoint, private_get};

    /// Toman deposits.
    pub const DEPOSIT_IRT: Endpoint = private_get("/v1/private/history/deposit/irt");
    /// Crypto deposits.
    pub const DEPOSIT_CRYPTO: Endpoint = private_get("/v1/private/history/deposit/crypto");
    /// Toman withdrawals.
    pub const WITHDRAWALS_IRT: Endpoint = private_get("/v1/private/history/withdrawals/irt");
    /// Crypto withdrawals.
    pub const WITHDRAWALS_CRYPTO: Endpoint =
        private_get("/v1/private/history/withdrawals/crypto");
    /// Orders.
    pub const ORDERS: Endpoint = private_get("/v1/private/history/orders");
    /// Trades.
    pub const TRADES: Endpoint = private_get("/v1/private/history/trades");
}

/// Order endpoints.
pub mod order {
    use super::{Endpoint, private_delete, private_post};

    /// Limit buy.
    pub const LIMIT_BUY: Endpoint = private_post("/v1/private/order/limit/buy");
    /// Limit sell.
    pub const LIMIT_SELL: Endpoint = private_post("/v1/private/order/limit/sell");
    /// Market buy.
    pub const MARKET_BUY: Endpoint = private_post("/v1/private/order/market/buy");
    /// Market sell.
    pub const MARKET_SELL: Endpoint = private_post("/v1/private/order/market/sell");
    /// Stop-loss and take-profit pair.
    pub const SL_TP: Endpoint = private_post("/v1/private/order/sltp/sl_tp");
    /// Stop-loss only.
    pub const SL: Endpoint = private_post("/v1/private/order/sltp/sl");
    /// Stop-limit buy.
    pub const STOPLIMIT_BUY: Endpoint = private_post("/v1/private/order/stoplimit/buy");
    /// Stop-limit sell.
    pub const STOPLIMIT_SELL: Endpoint = private_post("/v1/private/order/stoplimit/sell");
    /// Cancel one order.
    pub const CANCEL: Endpoint = private_delete("/v1/private/order/cancel");
    /// Cancel all orders.
    pub const CANCEL_ALL: Endpoint = private_delete("/v1/private/order/cancel_all");
}
