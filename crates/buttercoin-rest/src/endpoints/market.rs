//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::endpoints::{into_payload, nested_field};
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::RequestDescriptor;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Get the ticker: last price, current bid and current ask
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, timestamp: Option<u64>) -> RestResult<Value> {
        debug!("Fetching ticker");
        let request = RequestDescriptor::get("ticker")
            .with_timestamp(timestamp)
            .public();
        into_payload(self.transport.request(request).await?)
    }

    /// Get the order book with all current bids and asks
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, timestamp: Option<u64>) -> RestResult<Value> {
        debug!("Fetching orderbook");
        let request = RequestDescriptor::get("orderbook")
            .with_timestamp(timestamp)
            .public();
        into_payload(self.transport.request(request).await?)
    }

    /// Get the most recent trades
    #[instrument(skip(self))]
    pub async fn get_trade_history(&self, timestamp: Option<u64>) -> RestResult<Value> {
        debug!("Fetching trade history");
        let request = RequestDescriptor::get("trades")
            .with_timestamp(timestamp)
            .public();
        nested_field(self.transport.request(request).await?, "trades")
    }
}
