//! Request and response types

use buttercoin_auth::HttpVerb;
use serde_json::{Map, Value};

/// Request parameters, kept in insertion order
///
/// Order matters: the serialized form is signed byte for byte.
pub type Body = Map<String, Value>;

/// Message returned for 201 responses
pub const CONFIRMATION_REQUIRED_MESSAGE: &str = "This operation requires email confirmation";
/// Message returned for 204 responses
pub const NO_CONTENT_MESSAGE: &str = "This operation has completed successfully";

/// Classified result of a successful (< 400) API call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 200: parsed JSON body
    Success(Value),
    /// 201: the operation is pending email confirmation
    ConfirmationRequired { status: u16, message: String },
    /// 202: URL of the created resource, from the `Location` header
    Accepted(String),
    /// 204: completed, no body
    NoContent { status: u16, message: String },
}

impl ApiResponse {
    pub(crate) fn confirmation_required() -> Self {
        Self::ConfirmationRequired {
            status: 201,
            message: CONFIRMATION_REQUIRED_MESSAGE.to_string(),
        }
    }

    pub(crate) fn no_content() -> Self {
        Self::NoContent {
            status: 204,
            message: NO_CONTENT_MESSAGE.to_string(),
        }
    }

    /// HTTP status this response was classified from
    pub fn status(&self) -> u16 {
        match self {
            Self::Success(_) => 200,
            Self::ConfirmationRequired { status, .. } | Self::NoContent { status, .. } => *status,
            Self::Accepted(_) => 202,
        }
    }

    /// JSON payload of a 200 response
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Consume into the JSON payload of a 200 response
    pub fn into_payload(self) -> Option<Value> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// `Location` URL of a 202 response
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Accepted(url) => Some(url.as_str()),
            _ => None,
        }
    }

    /// Fixed message for 201/204 responses
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::ConfirmationRequired { message, .. } | Self::NoContent { message, .. } => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

/// A single API call, built per request
///
/// Fields are only set through the constructors and `with_*` methods and are
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    verb: HttpVerb,
    /// Path below the version segment, e.g. `orders/123`
    path: String,
    body: Body,
    /// Milliseconds since epoch; current time when `None`
    timestamp: Option<u64>,
    authenticate: bool,
}

impl RequestDescriptor {
    /// Authenticated request with an empty body
    pub fn new(verb: HttpVerb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            body: Body::new(),
            timestamp: None,
            authenticate: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpVerb::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpVerb::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpVerb::Delete, path)
    }

    /// Set the body; ignored for DELETE
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn with_timestamp(mut self, timestamp: Option<u64>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Mark as an unauthenticated call
    pub fn public(mut self) -> Self {
        self.authenticate = false;
        self
    }

    pub fn verb(&self) -> HttpVerb {
        self.verb
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn timestamp(&self) -> Option<u64> {
        self.timestamp
    }

    pub fn authenticate(&self) -> bool {
        self.authenticate
    }
}
