//! Demo 2: Authenticated account summary
//!
//! Showcases: signed requests, error classification
//!
//! Run: BUTTERCOIN_API_KEY=... BUTTERCOIN_API_SECRET=... BUTTERCOIN_MODE=sandbox \
//!      cargo run --bin account_summary

use buttercoin_rest::{ButtercoinClient, RestError};
use colored::*;
use serde_json::json;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = ButtercoinClient::from_env()?;
    if !client.has_credentials() {
        println!(
            "{} Set BUTTERCOIN_API_KEY and BUTTERCOIN_API_SECRET to run this demo",
            "✗".red()
        );
        return Ok(());
    }

    match client.get_key(None).await {
        Ok(permissions) => println!("{} Key permissions: {}", "✓".green(), permissions),
        Err(RestError::Api { message, .. }) => {
            error!("Key rejected");
            println!("{} {}", "✗".red(), message);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let balances = client.get_balances(None).await?;
    println!("{} Balances: {}", "✓".green(), balances);

    let address = client.get_deposit_address(None).await?;
    println!("{} Deposit address: {}", "✓".green(), address);

    let query = json!({"status": "opened"});
    let open_orders = client
        .get_orders(query.as_object().cloned(), None)
        .await?;
    let count = open_orders.as_array().map_or(0, Vec::len);
    println!("{} {} open orders", "✓".green(), count);

    Ok(())
}
