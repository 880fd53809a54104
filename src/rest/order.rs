//! Order endpoints.
//!
//! Placement is POST with a JSON body; cancellation is DELETE with a query
//! string. Both are signed over the query-string form of the parameters.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::AriomexError;
use crate::rest::AriomexClient;
use crate::rest::endpoints::{Endpoint, order};
use crate::rest::params::Params;
use crate::types::OrderSide;

impl AriomexClient {
    /// Place a limit buy order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ariomex_api_client::rest::AriomexClient;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = AriomexClient::with_credentials("key", "secret");
    ///     let response = client
    ///         .set_limit_buy("BTCUSDT", Decimal::from(50000), Decimal::from_str("0.01")?)
    ///         .await?;
    ///     println!("{response}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn set_limit_buy(
        &self,
        symbol: &str,
        price: Decimal,
        volume: Decimal,
    ) -> Result<Value, AriomexError> {
        self.set_limit(OrderSide::Buy, symbol, price, volume).await
    }

    /// Place a limit sell order.
    pub async fn set_limit_sell(
        &self,
        symbol: &str,
        price: Decimal,
        volume: Decimal,
    ) -> Result<Value, AriomexError> {
        self.set_limit(OrderSide::Sell, symbol, price, volume).await
    }

    /// Place a limit order on either side.
    pub async fn set_limit(
        &self,
        side: OrderSide,
        symbol: &str,
        price: Decimal,
        volume: Decimal,
    ) -> Result<Value, AriomexError> {
        let endpoint = pick(side, order::LIMIT_BUY, order::LIMIT_SELL);
        let params = Params::new()
            .with("symbol", symbol)
            .with("price", price)
            .with("volume", volume);
        self.dispatch(endpoint, params).await
    }

    /// Place a market buy order spending `total` of the quote coin.
    pub async fn set_market_buy(&self, symbol: &str, total: Decimal) -> Result<Value, AriomexError> {
        let params = Params::new().with("symbol", symbol).with("total", total);
        self.dispatch(order::MARKET_BUY, params).await
    }

    /// Place a market sell order for `volume` of the base coin.
    pub async fn set_market_sell(&self, symbol: &str, volume: Decimal) -> Result<Value, AriomexError> {
        let params = Params::new().with("symbol", symbol).with("volume", volume);
        self.dispatch(order::MARKET_SELL, params).await
    }

    /// Place a stop-loss and take-profit pair.
    pub async fn set_sl_tp(
        &self,
        symbol: &str,
        volume: Decimal,
        sl_price: Decimal,
        tp_price: Decimal,
    ) -> Result<Value, AriomexError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("volume", volume)
            .with("sl_price", sl_price)
            .with("tp_price", tp_price);
        self.dispatch(order::SL_TP, params).await
    }

    /// Place a stop-loss order.
    pub async fn set_sl(
        &self,
        symbol: &str,
        volume: Decimal,
        sl_price: Decimal,
    ) -> Result<Value, AriomexError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("volume", volume)
            .with("sl_price", sl_price);
        self.dispatch(order::SL, params).await
    }

    /// Place a stop-limit buy order.
    pub async fn set_stoplimit_buy(
        &self,
        symbol: &str,
        volume: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Result<Value, AriomexError> {
        self.set_stoplimit(OrderSide::Buy, symbol, volume, price, stop_price)
            .await
    }

    /// Place a stop-limit sell order.
    pub async fn set_stoplimit_sell(
        &self,
        symbol: &str,
        volume: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Result<Value, AriomexError> {
        self.set_stoplimit(OrderSide::Sell, symbol, volume, price, stop_price)
            .await
    }

    /// Place a stop-limit order on either side.
    pub async fn set_stoplimit(
        &self,
        side: OrderSide,
        symbol: &str,
        volume: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Result<Value, AriomexError> {
        let endpoint = pick(side, order::STOPLIMIT_BUY, order::STOPLIMIT_SELL);
        let params = Params::new()
            .with("symbol", symbol)
            .with("volume", volume)
            .with("price", price)
            .with("stop", stop_price);
        self.dispatch(endpoint, params).await
    }

    /// Cancel one order.
    pub async fn cancel_order(&self, symbol: &str, order_uuid: &str) -> Result<Value, AriomexError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("order_uuid", order_uuid);
        self.dispatch(order::CANCEL, params).await
    }

    /// Cancel all open orders, optionally only in one market.
    pub async fn cancel_all_orders(&self, symbol: Option<&str>) -> Result<Value, AriomexError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.dispatch(order::CANCEL_ALL, params).await
    }
}

fn pick(side: OrderSide, buy: Endpoint, sell: Endpoint) -> Endpoint {
    match side {
        OrderSide::Buy => buy,
        OrderSide::Sell => sell,
    }
}
