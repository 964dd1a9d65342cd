//! REST API client for the Buttercoin exchange
//!
//! # Features
//!
//! - **Market Data**: Ticker, orderbook, trade history (public)
//! - **Account**: Key permissions, balances, deposit address
//! - **Orders**: Query, create, cancel
//! - **Transactions**: Query, deposit, withdraw, send bitcoin, cancel
//!
//! # Authentication
//!
//! Private endpoints require an API key and secret. Requests are signed with
//! HMAC-SHA256 (see `buttercoin-auth`) over a millisecond timestamp and the
//! request URL, and must reach the server within 5 minutes of that timestamp.
//!
//! # Responses
//!
//! Successful calls are classified by HTTP status into an [`ApiResponse`]:
//! JSON payloads (200), email confirmation required (201), the `Location` of
//! a created resource (202) or a bare success (204). Everything else is a
//! [`RestError`].
//!
//! # Example
//!
//! ```no_run
//! use buttercoin_rest::{ButtercoinClient, ClientConfig, Credentials, Mode};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::new("my-key", "my-secret")?;
//!     let client = ButtercoinClient::new(
//!         ClientConfig::new().with_credentials(creds).with_mode(Mode::Sandbox),
//!     )?;
//!
//!     let order = json!({
//!         "instrument": "BTC_USD",
//!         "side": "buy",
//!         "orderType": "limit",
//!         "price": "700.00",
//!         "quantity": "5"
//!     });
//!     let created = client
//!         .create_order(order.as_object().cloned().unwrap_or_default(), None)
//!         .await?;
//!     println!("Order at {:?}", created.location());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Retries
//!
//! The client never retries. Wrap calls externally if you need resilience.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use buttercoin_auth::{Credentials, HttpVerb};
pub use client::ButtercoinClient;
pub use config::{ClientConfig, MinTlsVersion, Mode};
pub use error::{RestError, RestResult};
pub use transport::{encode_query, Transport};
pub use types::{ApiResponse, Body, RequestDescriptor};
