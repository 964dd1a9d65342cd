//! Funding transaction endpoints
//!
//! These endpoints require authentication. Withdrawals and sends may answer
//! 201 when the account requires email confirmation.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::endpoints::{into_payload, nested_field, path_from_url};
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{ApiResponse, Body, RequestDescriptor};

/// Funding transaction endpoints
pub struct TransactionEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> TransactionEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Query transactions matching the given parameters
    #[instrument(skip(self, query))]
    pub async fn get_transactions(&self, query: Body, timestamp: Option<u64>) -> RestResult<Value> {
        debug!(params = query.len(), "Querying transactions");
        let request = RequestDescriptor::get("transactions")
            .with_body(query)
            .with_timestamp(timestamp);
        nested_field(self.transport.request(request).await?, "results")
    }

    /// Get a single transaction by id
    #[instrument(skip(self))]
    pub async fn get_transaction_by_id(
        &self,
        transaction_id: &str,
        timestamp: Option<u64>,
    ) -> RestResult<Value> {
        let request = RequestDescriptor::get(format!("transactions/{}", transaction_id))
            .with_timestamp(timestamp);
        into_payload(self.transport.request(request).await?)
    }

    /// Get a single transaction from its URL
    #[instrument(skip(self))]
    pub async fn get_transaction_by_url(
        &self,
        url: &str,
        timestamp: Option<u64>,
    ) -> RestResult<Value> {
        let path = path_from_url(url, "transactions/")?;
        let request = RequestDescriptor::get(path).with_timestamp(timestamp);
        into_payload(self.transport.request(request).await?)
    }

    /// Deposit a fiat currency
    #[instrument(skip(self, data))]
    pub async fn create_deposit(&self, data: Body, timestamp: Option<u64>) -> RestResult<ApiResponse> {
        debug!("Creating deposit");
        self.post("transactions/deposit", data, timestamp).await
    }

    /// Withdraw a fiat currency
    #[instrument(skip(self, data))]
    pub async fn create_withdrawal(
        &self,
        data: Body,
        timestamp: Option<u64>,
    ) -> RestResult<ApiResponse> {
        debug!("Creating withdrawal");
        self.post("transactions/withdraw", data, timestamp).await
    }

    /// Send bitcoin to an address
    #[instrument(skip(self, data))]
    pub async fn send_bitcoin(&self, data: Body, timestamp: Option<u64>) -> RestResult<ApiResponse> {
        debug!("Sending bitcoin");
        self.post("transactions/send", data, timestamp).await
    }

    /// Cancel a pending transaction
    #[instrument(skip(self))]
    pub async fn cancel_transaction(
        &self,
        transaction_id: &str,
        timestamp: Option<u64>,
    ) -> RestResult<ApiResponse> {
        let request = RequestDescriptor::delete(format!("transactions/{}", transaction_id))
            .with_timestamp(timestamp);
        self.transport.request(request).await
    }

    async fn post(&self, path: &str, data: Body, timestamp: Option<u64>) -> RestResult<ApiResponse> {
        let request = RequestDescriptor::post(path)
            .with_body(data)
            .with_timestamp(timestamp);
        self.transport.request(request).await
    }
}
