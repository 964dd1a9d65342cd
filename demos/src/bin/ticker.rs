//! Demo 1: Public market snapshot
//!
//! Showcases: unauthenticated calls, mode selection
//!
//! Run: BUTTERCOIN_MODE=sandbox cargo run --bin ticker

use buttercoin_rest::ButtercoinClient;
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = ButtercoinClient::from_env()?;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  BUTTERCOIN MARKET ({})", client.mode()).cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let ticker = client.get_ticker(None).await?;
    println!("{} Ticker", "✓".green());
    println!("{}", serde_json::to_string_pretty(&ticker)?);

    let book = client.get_order_book(None).await?;
    let bids = book.get("bids").and_then(|b| b.as_array()).map_or(0, Vec::len);
    let asks = book.get("asks").and_then(|a| a.as_array()).map_or(0, Vec::len);
    println!("{} Orderbook: {} bids, {} asks", "✓".green(), bids, asks);

    let trades = client.get_trade_history(None).await?;
    let count = trades.as_array().map_or(0, Vec::len);
    println!("{} {} recent trades", "✓".green(), count);

    Ok(())
}
