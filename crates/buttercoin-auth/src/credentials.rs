//! API credentials for Buttercoin's authenticated endpoints
//!
//! The secret is stored using the `secrecy` crate, so it is zeroized on drop
//! and never shows up in `Debug` output. Access goes through
//! `expose_secret()` at the single point where the HMAC key is built.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthError, AuthResult};
use crate::signer::{sign, HttpVerb};

/// Environment variable holding the public access key
pub const API_KEY_ENV: &str = "BUTTERCOIN_API_KEY";
/// Environment variable holding the signing secret
pub const API_SECRET_ENV: &str = "BUTTERCOIN_API_SECRET";

/// API key and secret pair
pub struct Credentials {
    /// Public access key, sent as `X-Buttercoin-Access-Key`
    api_key: String,
    /// HMAC secret (zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create credentials from an API key and secret
    ///
    /// Both values must be non-empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BUTTERCOIN_API_KEY` and `BUTTERCOIN_API_SECRET`.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Like [`Credentials::from_env`], but `None` when either variable is
    /// missing or empty instead of an error
    pub fn from_env_optional() -> Option<Self> {
        Self::from_env().ok()
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request with this credential's secret
    ///
    /// See [`crate::sign`] for the algorithm.
    pub fn sign(
        &self,
        verb: HttpVerb,
        path: &str,
        url: &str,
        timestamp: u64,
        body: &str,
    ) -> String {
        sign(
            verb,
            path,
            url,
            timestamp,
            body,
            self.api_secret.expose_secret().as_bytes(),
        )
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
