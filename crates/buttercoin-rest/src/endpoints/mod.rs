//! API endpoint implementations
//!
//! Each group borrows the shared [`Transport`](crate::Transport) and maps a
//! method onto a fixed verb and path.

pub mod account;
pub mod market;
pub mod orders;
pub mod transactions;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use orders::OrderEndpoints;
pub use transactions::TransactionEndpoints;

use serde_json::Value;

use crate::error::{RestError, RestResult};
use crate::types::ApiResponse;

/// Require a 200 response and return its JSON
pub(crate) fn into_payload(response: ApiResponse) -> RestResult<Value> {
    match response {
        ApiResponse::Success(value) => Ok(value),
        other => Err(RestError::Parse(format!(
            "Expected a JSON body, got HTTP {} response",
            other.status()
        ))),
    }
}

/// Require a 200 response and return one top-level field of it
pub(crate) fn nested_field(response: ApiResponse, field: &str) -> RestResult<Value> {
    match into_payload(response)? {
        Value::Object(mut map) => map
            .remove(field)
            .ok_or_else(|| RestError::Parse(format!("Missing `{}` in response", field))),
        _ => Err(RestError::Parse(format!(
            "Expected an object containing `{}`",
            field
        ))),
    }
}

/// Path of a resource URL, starting at the last `marker` (e.g. `orders/`)
pub(crate) fn path_from_url(url: &str, marker: &str) -> RestResult<String> {
    url.rfind(marker)
        .map(|pos| url[pos..].to_string())
        .ok_or_else(|| {
            RestError::InvalidParameter(format!("URL does not contain `{}`: {}", marker, url))
        })
}
