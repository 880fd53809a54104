//! Example: Account queries and order placement.
//!
//! Reads `ARIOMEX_API_KEY` and `ARIOMEX_API_SECRET` (a `.env` file works too).
//! Set `ARIOMEX_PLACE_ORDER=1` to actually place and cancel the order.
//!
//! Run with: cargo run --example private_trading

use std::str::FromStr;
use std::sync::Arc;

use ariomex_api_client::auth::EnvCredentials;
use ariomex_api_client::rest::{AriomexClient, OrdersHistoryRequest};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(credentials) = EnvCredentials::try_from_env() else {
        eprintln!("Set ARIOMEX_API_KEY and ARIOMEX_API_SECRET to run this example.");
        return Ok(());
    };
    let client = AriomexClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    println!("=== Balance ===");
    println!("{}", client.get_balance().await?);

    println!("\n=== Recent Orders ===");
    let request = OrdersHistoryRequest {
        symbol: Some("BTCUSDT".to_string()),
        ..Default::default()
    };
    println!("{}", client.get_orders(Some(&request)).await?);

    if std::env::var("ARIOMEX_PLACE_ORDER").ok().as_deref() == Some("1") {
        println!("\n=== Limit Buy ===");
        let placed = client
            .set_limit_buy("BTCUSDT", Decimal::from(10000), Decimal::from_str("0.0001")?)
            .await?;
        println!("{placed}");

        println!("\n=== Cancel All ===");
        println!("{}", client.cancel_all_orders(Some("BTCUSDT")).await?);
    }

    Ok(())
}
