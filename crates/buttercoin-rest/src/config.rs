//! Client configuration

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use buttercoin_auth::Credentials;
use tracing::debug;

/// Environment variable selecting production or sandbox
pub const MODE_ENV: &str = "BUTTERCOIN_MODE";

/// Default API version segment
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default request timeout (the ceiling the service documents for POSTs)
pub const DEFAULT_TIMEOUT_SECS: u64 = 305;

/// Which Buttercoin deployment to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Live exchange (default)
    #[default]
    Production,
    /// Sandbox with test funds
    Sandbox,
}

impl Mode {
    /// Base URL for this mode
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.buttercoin.com",
            Self::Sandbox => "https://sandbox.buttercoin.com",
        }
    }

    /// Parse a mode name; anything other than exactly `production` is the
    /// sandbox
    pub fn from_name(name: &str) -> Self {
        if name == "production" {
            Self::Production
        } else {
            Self::Sandbox
        }
    }
}

impl FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Sandbox => f.write_str("sandbox"),
        }
    }
}

/// Minimum TLS version for the HTTPS connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinTlsVersion {
    #[default]
    Tls12,
    Tls13,
}

impl MinTlsVersion {
    pub(crate) fn to_reqwest(self) -> reqwest::tls::Version {
        match self {
            Self::Tls12 => reqwest::tls::Version::TLS_1_2,
            Self::Tls13 => reqwest::tls::Version::TLS_1_3,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional; without them only public calls work)
    pub credentials: Option<Credentials>,
    /// Production or sandbox
    pub mode: Mode,
    /// API version path segment
    pub api_version: String,
    /// Overrides the mode's base URL (proxies, mock servers)
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Minimum TLS version
    pub min_tls_version: MinTlsVersion,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            mode: Mode::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            min_tls_version: MinTlsVersion::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from the environment
    ///
    /// Reads `BUTTERCOIN_API_KEY` / `BUTTERCOIN_API_SECRET` (both optional)
    /// and `BUTTERCOIN_MODE` (defaults to `production`).
    pub fn from_env() -> Self {
        let mode = std::env::var(MODE_ENV)
            .map(|m| Mode::from_name(&m))
            .unwrap_or_default();
        let credentials = Credentials::from_env_optional();

        debug!(%mode, has_credentials = credentials.is_some(), "Loaded configuration from environment");

        Self {
            credentials,
            mode,
            ..Self::default()
        }
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set API version segment
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set minimum TLS version
    pub fn with_min_tls_version(mut self, version: MinTlsVersion) -> Self {
        self.min_tls_version = version;
        self
    }

    /// Base URL requests are sent to, without a trailing slash
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.mode.base_url())
            .trim_end_matches('/')
    }
}
