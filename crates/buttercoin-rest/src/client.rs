//! Main REST client implementation

use serde_json::Value;

use crate::config::{ClientConfig, Mode};
use crate::endpoints::{AccountEndpoints, MarketEndpoints, OrderEndpoints, TransactionEndpoints};
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{ApiResponse, Body, RequestDescriptor};

/// Buttercoin REST API client
///
/// Holds no global state: build one explicitly and share it (it is cheap to
/// clone and safe to use from many tasks).
///
/// # Example
///
/// ```no_run
/// use buttercoin_rest::{ButtercoinClient, ClientConfig, Mode};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = ButtercoinClient::new(ClientConfig::new().with_mode(Mode::Sandbox))?;
///     let ticker = client.get_ticker(None).await?;
///
///     // Credentials and mode from BUTTERCOIN_* environment variables
///     let auth_client = ButtercoinClient::from_env()?;
///     let balances = auth_client.get_balances(None).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ButtercoinClient {
    transport: Transport,
}

impl ButtercoinClient {
    /// Create a client from configuration
    pub fn new(config: ClientConfig) -> RestResult<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Create a client configured from the environment
    pub fn from_env() -> RestResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.transport.has_credentials()
    }

    pub fn mode(&self) -> Mode {
        self.transport.mode()
    }

    /// Underlying transport, for calls without a dedicated method
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Send an arbitrary request
    pub async fn request(&self, request: RequestDescriptor) -> RestResult<ApiResponse> {
        self.transport.request(request).await
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.transport)
    }

    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.transport)
    }

    pub fn orders(&self) -> OrderEndpoints<'_> {
        OrderEndpoints::new(&self.transport)
    }

    pub fn transactions(&self) -> TransactionEndpoints<'_> {
        TransactionEndpoints::new(&self.transport)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get the ticker
    pub async fn get_ticker(&self, timestamp: Option<u64>) -> RestResult<Value> {
        self.market().get_ticker(timestamp).await
    }

    /// Get the order book
    pub async fn get_order_book(&self, timestamp: Option<u64>) -> RestResult<Value> {
        self.market().get_order_book(timestamp).await
    }

    /// Get recent trades (the `trades` field of the response)
    pub async fn get_trade_history(&self, timestamp: Option<u64>) -> RestResult<Value> {
        self.market().get_trade_history(timestamp).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get the API key's permissions
    pub async fn get_key(&self, timestamp: Option<u64>) -> RestResult<Value> {
        self.account().get_key(timestamp).await
    }

    /// Get account balances
    pub async fn get_balances(&self, timestamp: Option<u64>) -> RestResult<Value> {
        self.account().get_balances(timestamp).await
    }

    /// Get the bitcoin deposit address
    pub async fn get_deposit_address(&self, timestamp: Option<u64>) -> RestResult<Value> {
        self.account().get_deposit_address(timestamp).await
    }

    // ========================================================================
    // Private Order Endpoints
    // ========================================================================

    /// Query orders (the `results` field of the response)
    pub async fn get_orders(&self, query: Option<Body>, timestamp: Option<u64>) -> RestResult<Value> {
        self.orders()
            .get_orders(query.unwrap_or_default(), timestamp)
            .await
    }

    /// Get an order by id
    pub async fn get_order_by_id(&self, order_id: &str, timestamp: Option<u64>) -> RestResult<Value> {
        self.orders().get_order_by_id(order_id, timestamp).await
    }

    /// Get an order by its URL
    pub async fn get_order_by_url(&self, url: &str, timestamp: Option<u64>) -> RestResult<Value> {
        self.orders().get_order_by_url(url, timestamp).await
    }

    /// Create an order
    pub async fn create_order(&self, order: Body, timestamp: Option<u64>) -> RestResult<ApiResponse> {
        self.orders().create_order(order, timestamp).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, order_id: &str, timestamp: Option<u64>) -> RestResult<ApiResponse> {
        self.orders().cancel_order(order_id, timestamp).await
    }

    // ========================================================================
    // Private Transaction Endpoints
    // ========================================================================

    /// Query transactions (the `results` field of the response)
    pub async fn get_transactions(
        &self,
        query: Option<Body>,
        timestamp: Option<u64>,
    ) -> RestResult<Value> {
        self.transactions()
            .get_transactions(query.unwrap_or_default(), timestamp)
            .await
    }

    /// Get a transaction by id
    pub async fn get_transaction_by_id(
        &self,
        transaction_id: &str,
        timestamp: Option<u64>,
    ) -> RestResult<Value> {
        self.transactions()
            .get_transaction_by_id(transaction_id, timestamp)
            .await
    }

    /// Get a transaction by its URL
    pub async fn get_transaction_by_url(
        &self,
        url: &str,
        timestamp: Option<u64>,
    ) -> RestResult<Value> {
        self.transactions().get_transaction_by_url(url, timestamp).await
    }

    /// Deposit fiat
    pub async fn create_deposit(&self, data: Body, timestamp: Option<u64>) -> RestResult<ApiResponse> {
        self.transactions().create_deposit(data, timestamp).await
    }

    /// Withdraw fiat
    pub async fn create_withdrawal(
        &self,
        data: Body,
        timestamp: Option<u64>,
    ) -> RestResult<ApiResponse> {
        self.transactions().create_withdrawal(data, timestamp).await
    }

    /// Send bitcoin
    pub async fn send_bitcoin(&self, data: Body, timestamp: Option<u64>) -> RestResult<ApiResponse> {
        self.transactions().send_bitcoin(data, timestamp).await
    }

    /// Cancel a transaction
    pub async fn cancel_transaction(
        &self,
        transaction_id: &str,
        timestamp: Option<u64>,
    ) -> RestResult<ApiResponse> {
        self.transactions()
            .cancel_transaction(transaction_id, timestamp)
            .await
    }
}
