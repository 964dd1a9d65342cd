//! Error types for REST API operations

use buttercoin_auth::AuthError;
use serde_json::Value;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Authenticated call attempted without an API key and secret
    #[error("Public Key and Secret Key are required for this operation")]
    MissingCredentials,

    /// The API rejected the request (HTTP status >= 400)
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Full error text, including trace identifiers
        message: String,
        /// Raw `errors` array from the response body
        errors: Vec<Value>,
        /// Server-side stack trace identifier
        stacktrace_id: Option<String>,
        /// Server-side unique request identifier
        unique_id: Option<String>,
    },

    /// Network-level failure (timeout, DNS, TLS, connection refused)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Status code outside the documented set
    #[error("Unclassified response with HTTP status {status}")]
    UnclassifiedResponse {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Credential loading failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Build an API error from the JSON body of a >= 400 response
    ///
    /// The first entry of `errors` supplies the message; `stacktrace_id` and
    /// `unique_id` (snake or camel case) are appended when present.
    pub fn from_error_body(status: u16, body: &Value) -> Self {
        let errors = body
            .get("errors")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let primary = errors
            .first()
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");

        let stacktrace_id = id_field(body, &["stacktrace_id", "stacktraceId"]);
        let unique_id = id_field(body, &["unique_id", "uniqueId"]);

        let mut message = format!(
            "Error from Buttercoin API. Details:\n Message: {}",
            primary
        );
        if let Some(id) = &stacktrace_id {
            message.push_str(&format!("\nStacktrace ID: {}", id));
        }
        if let Some(id) = &unique_id {
            message.push_str(&format!("\nUnique ID: {}", id));
        }

        Self::Api {
            status,
            message,
            errors,
            stacktrace_id,
            unique_id,
        }
    }

    /// HTTP status associated with this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::UnclassifiedResponse { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server reported a business error
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this error was raised before any network I/O because the
    /// client is misconfigured
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingCredentials | Self::Auth(_))
    }

    /// Check if this error is a network-level failure
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Identifier fields may be strings or numbers
fn id_field(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match body.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
