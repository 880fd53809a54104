//! History endpoints.
//!
//! All filters are optional. Unset filters are left out of the request; the
//! server applies its own defaults.

use serde_json::Value;

use crate::error::AriomexError;
use crate::rest::AriomexClient;
use crate::rest::endpoints::history;
use crate::rest::params::Params;
use crate::types::OrderSide;

/// Filters for toman deposit and withdrawal history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryRequest {
    /// Start of the time range.
    pub from: Option<i64>,
    /// End of the time range.
    pub to: Option<i64>,
    /// Status as the API names it.
    pub status: Option<String>,
    /// Page number.
    pub page: Option<u32>,
    /// Rows per page.
    pub max_rows_per_page: Option<u32>,
}

impl HistoryRequest {
    /// Restrict to a time range.
    pub fn range(mut self, from: i64, to: i64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Restrict to one status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Select a page.
    pub fn page(mut self, page: u32, max_rows_per_page: u32) -> Self {
        self.page = Some(page);
        self.max_rows_per_page = Some(max_rows_per_page);
        self
    }
}

impl From<&HistoryRequest> for Params {
    fn from(req: &HistoryRequest) -> Self {
        Params::new()
            .with_opt("from", req.from)
            .with_opt("to", req.to)
            .with_opt("status", req.status.as_ref())
            .with_opt("page", req.page)
            .with_opt("maxRowsPerPage", req.max_rows_per_page)
    }
}

/// Filters for crypto deposit and withdrawal history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CryptoHistoryRequest {
    /// Coin symbol.
    pub symbol: Option<String>,
    /// Network.
    pub network: Option<String>,
    /// Time range, status and paging.
    pub filter: HistoryRequest,
}

impl CryptoHistoryRequest {
    /// Restrict to one coin.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Restrict to one network.
    pub fn network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }
}

impl From<&CryptoHistoryRequest> for Params {
    fn from(req: &CryptoHistoryRequest) -> Self {
        Params::new()
            .with_opt("symbol", req.symbol.as_ref())
            .with_opt("network", req.network.as_ref())
            .with_opt("from", req.filter.from)
            .with_opt("to", req.filter.to)
            .with_opt("status", req.filter.status.as_ref())
            .with_opt("page", req.filter.page)
            .with_opt("maxRowsPerPage", req.filter.max_rows_per_page)
    }
}

/// Filters for order history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdersHistoryRequest {
    /// Market symbol.
    pub symbol: Option<String>,
    /// A single order.
    pub order_id: Option<String>,
    /// Order type as the API names it.
    pub order_type: Option<String>,
    /// Buy or sell.
    pub side: Option<OrderSide>,
    /// Time range, status and paging.
    pub filter: HistoryRequest,
}

impl From<&OrdersHistoryRequest> for Params {
    fn from(req: &OrdersHistoryRequest) -> Self {
        Params::new()
            .with_opt("symbol", req.symbol.as_ref())
            .with_opt("orderId", req.order_id.as_ref())
            .with_opt("type", req.order_type.as_ref())
            .with_opt("side", req.side.map(|side| side.as_str()))
            .with_opt("from", req.filter.from)
            .with_opt("to", req.filter.to)
            .with_opt("status", req.filter.status.as_ref())
            .with_opt("page", req.filter.page)
            .with_opt("maxRowsPerPage", req.filter.max_rows_per_page)
    }
}

/// Filters for trade history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradesHistoryRequest {
    /// Market symbol.
    pub symbol: Option<String>,
    /// Buy or sell.
    pub side: Option<OrderSide>,
    /// Start of the time range.
    pub from: Option<i64>,
    /// End of the time range.
    pub to: Option<i64>,
    /// Page number.
    pub page: Option<u32>,
    /// Rows per page.
    pub max_rows_per_page: Option<u32>,
}

impl From<&TradesHistoryRequest> for Params {
    fn from(req: &TradesHistoryRequest) -> Self {
        Params::new()
            .with_opt("symbol", req.symbol.as_ref())
            .with_opt("side", req.side.map(|side| side.as_str()))
            .with_opt("from", req.from)
            .with_opt("to", req.to)
            .with_opt("page", req.page)
            .with_opt("maxRowsPerPage", req.max_rows_per_page)
    }
}

fn to_params<R>(request: Option<&R>) -> Params
where
    for<'a> Params: From<&'a R>,
{
    match request {
        Some(req) => Params::from(req),
        None => Params::new(),
    }
}

impl AriomexClient {
    /// Get toman deposit history.
    pub async fn get_irt_deposits(
        &self,
        request: Option<&HistoryRequest>,
    ) -> Result<Value, AriomexError> {
        self.dispatch(history::DEPOSIT_IRT, to_params(request)).await
    }

    /// Get crypto deposit history.
    pub async fn get_crypto_deposits(
        &self,
        request: Option<&CryptoHistoryRequest>,
    ) -> Result<Value, AriomexError> {
        self.dispatch(history::DEPOSIT_CRYPTO, to_params(request))
            .await
    }

    /// Get toman withdrawal history.
    pub async fn get_irt_withdrawals(
        &self,
        request: Option<&HistoryRequest>,
    ) -> Result<Value, AriomexError> {
        self.dispatch(history::WITHDRAWALS_IRT, to_params(request))
            .await
    }

    /// Get crypto withdrawal history.
    pub async fn get_crypto_withdrawals(
        &self,
        request: Option<&CryptoHistoryRequest>,
    ) -> Result<Value, AriomexError> {
        self.dispatch(history::WITHDRAWALS_CRYPTO, to_params(request))
            .await
    }

    /// Get order history.
    pub async fn get_orders(
        &self,
        request: Option<&OrdersHistoryRequest>,
    ) -> Result<Value, AriomexError> {
        self.dispatch(history::ORDERS, to_params(request)).await
    }

    /// Get trade history.
    pub async fn get_trades(
        &self,
        request: Option<&TradesHistoryRequest>,
    ) -> Result<Value, AriomexError> {
        self.dispatch(history::TRADES, to_params(request)).await
    }
}
