//! Request construction, signing, dispatch and response classification
//!
//! Every endpoint call goes through [`Transport::request`]. The transport owns
//! the HTTP client and the immutable credentials/base URL, so it is safe to
//! share across tasks; each call is signed with its own timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

use buttercoin_auth::{Credentials, HttpVerb, RequestSigner};
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::redirect::Policy;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use crate::config::{ClientConfig, Mode};
use crate::error::{RestError, RestResult};
use crate::types::{ApiResponse, Body, RequestDescriptor};

/// Access key header
pub const ACCESS_KEY_HEADER: &str = "X-Buttercoin-Access-Key";
/// Signature header
pub const SIGNATURE_HEADER: &str = "X-Buttercoin-Signature";
/// Timestamp header
pub const DATE_HEADER: &str = "X-Buttercoin-Date";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Render a body value the way it appears in a query string
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Encode a body as a URL query string, preserving entry order
///
/// Standard form encoding, except `:` stays literal so ISO timestamps like
/// `2024-01-01T00:00:00` pass through unchanged.
pub fn encode_query(body: &Body) -> RestResult<String> {
    let pairs: Vec<(&str, String)> = body
        .iter()
        .map(|(key, value)| (key.as_str(), query_value(value)))
        .collect();

    let encoded = serde_urlencoded::to_string(&pairs)
        .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

    Ok(encoded.replace("%3A", ":"))
}

/// Authenticated HTTP transport for the Buttercoin API
///
/// Redirects are not followed, so 3xx statuses reach [`Transport::classify`].
#[derive(Clone)]
pub struct Transport {
    http_client: Client,
    credentials: Option<Credentials>,
    mode: Mode,
    base_url: String,
    api_version: String,
}

impl Transport {
    /// Build a transport from configuration
    pub fn new(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(
                config
                    .user_agent
                    .as_deref()
                    .unwrap_or(concat!("buttercoin-rest/", env!("CARGO_PKG_VERSION"))),
            )
            .min_tls_version(config.min_tls_version.to_reqwest())
            .redirect(Policy::none())
            .build()?;

        let base_url = config.resolved_base_url().to_string();

        info!(mode = %config.mode, base_url = %base_url, "Created Buttercoin transport");

        Ok(Self {
            http_client,
            credentials: config.credentials,
            mode: config.mode,
            base_url,
            api_version: config.api_version,
        })
    }

    /// Check if the transport can make authenticated calls
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a call: `{base}/{version}/{path}`, plus the query string
    /// for a GET with parameters
    pub fn build_url(&self, verb: HttpVerb, path: &str, body: &Body) -> RestResult<String> {
        let mut url = format!(
            "{}/{}/{}",
            self.base_url,
            self.api_version,
            path.trim_start_matches('/')
        );

        if verb == HttpVerb::Get && !body.is_empty() {
            url.push('?');
            url.push_str(&encode_query(body)?);
        }

        Ok(url)
    }

    /// Build, sign, send and classify one request
    ///
    /// Fails with [`RestError::MissingCredentials`] before any network I/O if
    /// the call is authenticated and the transport has no credentials.
    #[instrument(skip(self, request), fields(verb = %request.verb(), path = %request.path()))]
    pub async fn request(&self, request: RequestDescriptor) -> RestResult<ApiResponse> {
        let credentials = if request.authenticate() {
            Some(
                self.credentials
                    .as_ref()
                    .ok_or(RestError::MissingCredentials)?,
            )
        } else {
            None
        };

        let verb = request.verb();
        let url = self.build_url(verb, request.path(), request.body())?;
        let timestamp = request.timestamp().unwrap_or_else(now_millis);

        // Serialized once: these exact bytes are both signed and sent
        let payload = match verb {
            HttpVerb::Post => Some(
                serde_json::to_string(request.body())
                    .map_err(|e| RestError::InvalidParameter(e.to_string()))?,
            ),
            HttpVerb::Get | HttpVerb::Delete => None,
        };

        let mut builder = match verb {
            HttpVerb::Get => self.http_client.get(&url),
            HttpVerb::Post => self.http_client.post(&url),
            HttpVerb::Delete => self.http_client.delete(&url),
        };

        if let Some(credentials) = credentials {
            let signer = RequestSigner::new(credentials, verb, request.path(), &url, timestamp);
            let signature = signer.sign(payload.as_deref().unwrap_or_default());
            builder = builder
                .header(ACCESS_KEY_HEADER, signer.api_key())
                .header(SIGNATURE_HEADER, signature)
                .header(DATE_HEADER, signer.timestamp().to_string());
        }

        if credentials.is_some() || payload.is_some() {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        if let Some(payload) = payload {
            builder = builder.body(payload);
        }

        debug!(url = %url, timestamp, authenticated = credentials.is_some(), "Sending request");

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;

        debug!(status, "Received response");

        Self::classify(status, location.as_deref(), &body)
    }

    /// Map an HTTP status (plus `Location` header and raw body) to a result
    ///
    /// | Status | Result |
    /// |---|---|
    /// | 200 | `Success` with the parsed body |
    /// | 201 | `ConfirmationRequired` |
    /// | 202 | `Accepted` with the `Location` header |
    /// | 204 | `NoContent` |
    /// | >= 400 | `RestError::Api` |
    /// | anything else | `RestError::UnclassifiedResponse` |
    pub fn classify(status: u16, location: Option<&str>, body: &[u8]) -> RestResult<ApiResponse> {
        match status {
            200 => serde_json::from_slice(body)
                .map(ApiResponse::Success)
                .map_err(|e| RestError::Parse(format!("Invalid JSON in 200 response: {}", e))),
            201 => Ok(ApiResponse::confirmation_required()),
            202 => location
                .map(|url| ApiResponse::Accepted(url.to_string()))
                .ok_or_else(|| RestError::Parse("202 response without Location header".to_string())),
            204 => Ok(ApiResponse::no_content()),
            s if s >= 400 => {
                let value = serde_json::from_slice::<Value>(body).unwrap_or_else(|_| {
                    let text = String::from_utf8_lossy(body);
                    if text.trim().is_empty() {
                        Value::Null
                    } else {
                        json!({ "errors": [{ "message": text.trim() }] })
                    }
                });
                let err = RestError::from_error_body(s, &value);
                warn!(status = s, error = %err, "API returned an error");
                Err(err)
            }
            s => {
                warn!(status = s, "Unclassified response status");
                Err(RestError::UnclassifiedResponse { status: s })
            }
        }
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("mode", &self.mode)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}
