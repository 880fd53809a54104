//! Ariomex REST API client.
//!
//! [`AriomexClient`] exposes one method per remote operation. The methods are
//! split by resource group:
//! - general: public market data
//! - account, wallet, bank: account management
//! - history: deposit, withdrawal, order and trade history
//! - order: placing and cancelling orders
//!
//! Each method maps to a fixed [`Endpoint`] and an ordered [`Params`] list and
//! goes through [`AriomexClient::dispatch`].

mod account;
mod bank;
mod client;
pub mod endpoints;
mod general;
pub mod history;
mod order;
mod params;
pub mod request;
mod wallet;

pub use client::{AriomexClient, AriomexClientBuilder, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT};
pub use endpoints::{ARIOMEX_BASE_URL, Access, Endpoint, HttpMethod};
pub use history::{CryptoHistoryRequest, HistoryRequest, OrdersHistoryRequest, TradesHistoryRequest};
pub use params::{ParamValue, Params};
