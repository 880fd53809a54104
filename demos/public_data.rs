//! Example: Fetching public market data from Ariomex.
//!
//! No credentials are needed for these endpoints.
//!
//! Run with: cargo run --example public_data

use ariomex_api_client::rest::AriomexClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = AriomexClient::new();

    println!("=== Ping ===");
    println!("{}", client.ping().await?);

    println!("\n=== Server Time ===");
    println!("{}", client.time().await?);

    println!("\n=== Exchange Info (BTCUSDT) ===");
    println!("{}", client.exchange_info(Some("BTCUSDT")).await?);

    println!("\n=== Order Book (BTCUSDT) ===");
    println!("{}", client.orderbook(Some("BTCUSDT")).await?);

    println!("\n=== Last Prices ===");
    println!("{}", client.last_prices(None).await?);

    println!("\n=== Candlesticks (BTCUSDT, 60) ===");
    let candles = client.candlesticks("BTCUSDT", "60", None, None).await?;
    println!("{candles}");

    Ok(())
}
