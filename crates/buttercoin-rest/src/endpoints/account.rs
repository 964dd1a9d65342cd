//! Account endpoints
//!
//! These endpoints require authentication.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::endpoints::{into_payload, nested_field};
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::RequestDescriptor;

/// Account endpoints
pub struct AccountEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Get the permissions granted to the API key
    #[instrument(skip(self))]
    pub async fn get_key(&self, timestamp: Option<u64>) -> RestResult<Value> {
        debug!("Fetching key permissions");
        let request = RequestDescriptor::get("key").with_timestamp(timestamp);
        nested_field(self.transport.request(request).await?, "permissions")
    }

    /// Get the balances associated with the account
    #[instrument(skip(self))]
    pub async fn get_balances(&self, timestamp: Option<u64>) -> RestResult<Value> {
        debug!("Fetching balances");
        let request = RequestDescriptor::get("account/balances").with_timestamp(timestamp);
        into_payload(self.transport.request(request).await?)
    }

    /// Get the bitcoin deposit address of the account
    #[instrument(skip(self))]
    pub async fn get_deposit_address(&self, timestamp: Option<u64>) -> RestResult<Value> {
        debug!("Fetching deposit address");
        let request = RequestDescriptor::get("account/depositAddress").with_timestamp(timestamp);
        nested_field(self.transport.request(request).await?, "address")
    }
}
