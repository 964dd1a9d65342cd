//! HMAC-SHA256 request signing
//!
//! Buttercoin signature algorithm:
//! 1. `url` = full request URL (including any GET query string)
//! 2. For POST with a non-empty body, append the body JSON to `url`
//! 3. message = decimal timestamp + `url`
//! 4. HMAC-SHA256(secret, base64(message))
//! 5. Base64 encode the digest
//!
//! The server HMACs the base64 text of the message, not the raw bytes, so
//! step 4 must stay a double encoding.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::trace;

use crate::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// HTTP verbs accepted by the Buttercoin API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Delete,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `true` when a serialized body carries no entries
fn body_is_empty(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.is_empty() || trimmed == "{}"
}

/// Build the exact string that gets base64-encoded and signed
///
/// `body` is the serialized JSON that will be sent on the wire. It only
/// participates for POST requests.
pub fn canonical_message(verb: HttpVerb, url: &str, timestamp: u64, body: &str) -> String {
    let mut message = timestamp.to_string();
    message.push_str(url);
    if verb == HttpVerb::Post && !body_is_empty(body) {
        message.push_str(body);
    }
    message
}

/// Compute the `X-Buttercoin-Signature` value for a request
///
/// # Arguments
/// * `verb` - HTTP verb of the request
/// * `path` - API path (e.g. `orders`); the server does not fold it into the
///   signature separately, it is already part of `url`
/// * `url` - Full request URL, exactly as it will be sent
/// * `timestamp` - Milliseconds since epoch, must be within 5 minutes of
///   server time
/// * `body` - Serialized JSON body, byte-identical to the request payload
/// * `secret` - API secret
///
/// # Returns
/// Base64-encoded HMAC-SHA256 digest
pub fn sign(
    verb: HttpVerb,
    path: &str,
    url: &str,
    timestamp: u64,
    body: &str,
    secret: &[u8],
) -> String {
    trace!(%verb, path, timestamp, "computing request signature");

    let message = canonical_message(verb, url, timestamp, body);
    let encoded = BASE64.encode(message.as_bytes());

    // cannot fail: HMAC accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(encoded.as_bytes());

    BASE64.encode(mac.finalize().into_bytes())
}

/// Request signer bound to one request
///
/// A signature is only valid for the exact verb, URL, body and timestamp it
/// was derived from, so a signer is built per request.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    verb: HttpVerb,
    path: String,
    url: String,
    timestamp: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(
        credentials: &'a Credentials,
        verb: HttpVerb,
        path: impl Into<String>,
        url: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            credentials,
            verb,
            path: path.into(),
            url: url.into(),
            timestamp,
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Get the timestamp this request is signed with
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Sign the request with the given serialized body
    pub fn sign(&self, body: &str) -> String {
        self.credentials
            .sign(self.verb, &self.path, &self.url, self.timestamp, body)
    }
}
