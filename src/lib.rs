//! # Ariomex Client
//!
//! An async Rust client library for the Ariomex exchange REST API.
//!
//! ## Features
//!
//! - Market data, account, wallet, bank, history and order endpoints
//! - HMAC-SHA256 request signing for private endpoints
//! - Responses returned verbatim as `serde_json::Value`
//! - Exact decimal parameters with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ariomex_api_client::rest::AriomexClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AriomexClient::new();
//!     let pong = client.ping().await?;
//!     println!("Ping: {pong}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::AriomexError;
pub use rest::{AriomexClient, AriomexClientBuilder, Params};
pub use types::OrderSide;

/// Result type alias using AriomexError
pub type Result<T> = std::result::Result<T, AriomexError>;
