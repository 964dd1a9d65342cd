//! Order endpoints
//!
//! These endpoints require authentication. Order creation answers with the
//! `Location` of the new order (202); cancellation answers 204.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::endpoints::{into_payload, nested_field, path_from_url};
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{ApiResponse, Body, RequestDescriptor};

/// Order endpoints
pub struct OrderEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> OrderEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Query orders matching the given parameters
    ///
    /// # Arguments
    /// * `query` - Query parameters (e.g. `status`, `side`, `orderType`),
    ///   sent as the query string
    #[instrument(skip(self, query))]
    pub async fn get_orders(&self, query: Body, timestamp: Option<u64>) -> RestResult<Value> {
        debug!(params = query.len(), "Querying orders");
        let request = RequestDescriptor::get("orders")
            .with_body(query)
            .with_timestamp(timestamp);
        nested_field(self.transport.request(request).await?, "results")
    }

    /// Get a single order by id
    #[instrument(skip(self))]
    pub async fn get_order_by_id(&self, order_id: &str, timestamp: Option<u64>) -> RestResult<Value> {
        let request =
            RequestDescriptor::get(format!("orders/{}", order_id)).with_timestamp(timestamp);
        into_payload(self.transport.request(request).await?)
    }

    /// Get a single order from the URL returned by [`Self::create_order`]
    #[instrument(skip(self))]
    pub async fn get_order_by_url(&self, url: &str, timestamp: Option<u64>) -> RestResult<Value> {
        let path = path_from_url(url, "orders/")?;
        let request = RequestDescriptor::get(path).with_timestamp(timestamp);
        into_payload(self.transport.request(request).await?)
    }

    /// Create a new order
    ///
    /// # Returns
    /// Normally [`ApiResponse::Accepted`] carrying the new order's URL
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: Body, timestamp: Option<u64>) -> RestResult<ApiResponse> {
        debug!("Creating order");
        let request = RequestDescriptor::post("orders")
            .with_body(order)
            .with_timestamp(timestamp);
        self.transport.request(request).await
    }

    /// Cancel an open order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str, timestamp: Option<u64>) -> RestResult<ApiResponse> {
        debug!("Cancelling order");
        let request =
            RequestDescriptor::delete(format!("orders/{}", order_id)).with_timestamp(timestamp);
        self.transport.request(request).await
    }
}
