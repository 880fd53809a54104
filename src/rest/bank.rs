//! Bank account endpoints.

use serde_json::Value;

use crate::error::AriomexError;
use crate::rest::AriomexClient;
use crate::rest::endpoints::bank;
use crate::rest::params::Params;

impl AriomexClient {
    /// Register a bank card.
    pub async fn set_bank_card(&self, card_number: &str) -> Result<Value, AriomexError> {
        let params = Params::new().with("cardNumber", card_number);
        self.dispatch(bank::SET_CARD, params).await
    }

    /// Register an IBAN.
    pub async fn set_bank_iban(&self, iban: &str) -> Result<Value, AriomexError> {
        let params = Params::new().with("iban", iban);
        self.dispatch(bank::SET_IBAN, params).await
    }

    /// List registered bank cards and IBANs.
    pub async fn get_bank_accounts(&self) -> Result<Value, AriomexError> {
        self.dispatch(bank::GET_ACCOUNTS, Params::new()).await
    }
}
