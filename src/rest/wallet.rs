//! Wallet endpoints.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::AriomexError;
use crate::rest::AriomexClient;
use crate::rest::endpoints::wallet;
use crate::rest::params::Params;

impl AriomexClient {
    /// Generate deposit addresses.
    pub async fn generate_deposit_address(&self) -> Result<Value, AriomexError> {
        self.dispatch(wallet::GENERATE_DEPOSIT_ADDRESS, Params::new())
            .await
    }

    /// Get deposit addresses.
    pub async fn get_deposit_address(&self) -> Result<Value, AriomexError> {
        self.dispatch(wallet::GET_DEPOSIT_ADDRESS, Params::new()).await
    }

    /// Withdraw toman to a registered IBAN.
    pub async fn withdraw_irt(&self, amount: Decimal, iban_uuid: &str) -> Result<Value, AriomexError> {
        let params = Params::new()
            .with("amount", amount)
            .with("iban_uuid", iban_uuid);
        self.dispatch(wallet::WITHDRAW_IRT, params).await
    }

    /// Withdraw crypto to a registered address.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Coin symbol (e.g., "USDT").
    /// * `network` - Network to withdraw on.
    /// * `amount` - Amount to withdraw.
    /// * `address_uuid` - Identifier of a registered withdrawal address.
    /// * `memo` - Optional memo or tag; omitted when `None`.
    pub async fn withdraw_crypto(
        &self,
        symbol: &str,
        network: &str,
        amount: Decimal,
        address_uuid: &str,
        memo: Option<&str>,
    ) -> Result<Value, AriomexError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("network", network)
            .with("amount", amount)
            .with("address_uuid", address_uuid)
            .with_opt("memo", memo);
        self.dispatch(wallet::WITHDRAW_CRYPTO, params).await
    }

    /// Get registered withdrawal addresses.
    pub async fn get_withdraw_addresses(&self) -> Result<Value, AriomexError> {
        self.dispatch(wallet::GET_WITHDRAW_ADDRESS, Params::new()).await
    }
}
