//! Account endpoints.

use serde_json::Value;

use crate::error::AriomexError;
use crate::rest::AriomexClient;
use crate::rest::endpoints::account;
use crate::rest::params::Params;

impl AriomexClient {
    /// Get the account profile.
    pub async fn get_account_info(&self) -> Result<Value, AriomexError> {
        self.dispatch(account::INFO, Params::new()).await
    }

    /// Get balances for every coin.
    pub async fn get_balance(&self) -> Result<Value, AriomexError> {
        self.dispatch(account::GET_BALANCE, Params::new()).await
    }

    /// Get small balances that can be converted.
    pub async fn get_dust_balance(&self) -> Result<Value, AriomexError> {
        self.dispatch(account::GET_DUST_BALANCE, Params::new()).await
    }

    /// Convert the dust balances of the given coins.
    ///
    /// The list is sent as a JSON array; it is signed comma-joined.
    pub async fn convert_dust_balance<S: AsRef<str>>(
        &self,
        coins_list: &[S],
    ) -> Result<Value, AriomexError> {
        let coins: Vec<&str> = coins_list.iter().map(AsRef::as_ref).collect();
        let params = Params::new().with("coinsList", coins);
        self.dispatch(account::CONVERT_DUST_BALANCE, params).await
    }
}
