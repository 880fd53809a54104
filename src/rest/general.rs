//! Public market data endpoints (no authentication required).

use serde_json::Value;

use crate::error::AriomexError;
use crate::rest::AriomexClient;
use crate::rest::endpoints::general;
use crate::rest::params::Params;

impl AriomexClient {
    /// Get the API description document.
    pub async fn swagger(&self) -> Result<Value, AriomexError> {
        self.dispatch(general::SWAGGER, Params::new()).await
    }

    /// Check connectivity.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ariomex_api_client::rest::AriomexClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = AriomexClient::new();
    ///     let pong = client.ping().await?;
    ///     println!("{pong}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn ping(&self) -> Result<Value, AriomexError> {
        self.dispatch(general::PING, Params::new()).await
    }

    /// Get the server time.
    pub async fn time(&self) -> Result<Value, AriomexError> {
        self.dispatch(general::TIME, Params::new()).await
    }

    /// Get market rules, for one symbol or all of them.
    pub async fn exchange_info(&self, symbol: Option<&str>) -> Result<Value, AriomexError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.dispatch(general::EXCHANGE_INFO, params).await
    }

    /// Get coin and network details, for one coin or all of them.
    pub async fn coins_info(&self, symbol: Option<&str>) -> Result<Value, AriomexError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.dispatch(general::COINS_INFO, params).await
    }

    /// Get the order book.
    pub async fn orderbook(&self, symbol: Option<&str>) -> Result<Value, AriomexError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.dispatch(general::ORDERBOOK, params).await
    }

    /// Get recent public trades.
    pub async fn last_trades(&self, symbol: Option<&str>) -> Result<Value, AriomexError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.dispatch(general::LAST_TRADES, params).await
    }

    /// Get latest prices.
    pub async fn last_prices(&self, symbol: Option<&str>) -> Result<Value, AriomexError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.dispatch(general::LAST_PRICES, params).await
    }

    /// Get OHLC candles.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Market symbol (e.g., "BTCUSDT").
    /// * `resolution` - Candle resolution as the API names it.
    /// * `from` / `to` - Optional time range bounds.
    pub async fn candlesticks(
        &self,
        symbol: &str,
        resolution: &str,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Value, AriomexError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("resolution", resolution)
            .with_opt("from", from)
            .with_opt("to", to);
        self.dispatch(general::CANDLESTICKS, params).await
    }
}
