//! Client configuration

/// Client configuration for connecting to the purchases backend
///
/// The base URL is assembled from two deployment values: the API host and a
/// port suffix that is concatenated verbatim (e.g. `http://10.0.0.5` +
/// `:5099`). Both come from the environment in deployed builds.
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PURCHASES_API_URL | http://localhost | API host |
/// | PURCHASES_API_PORT | (empty) | port suffix, including the colon |
/// | PURCHASES_API_TIMEOUT | 30 | request timeout in seconds |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host (e.g. "http://localhost")
    pub api_url: String,
    /// Port suffix appended verbatim to the host (e.g. ":5099")
    pub port_suffix: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            port_suffix: String::new(),
            timeout: 30,
        }
    }

    /// Load the configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("PURCHASES_API_URL")
                .unwrap_or_else(|_| "http://localhost".into()),
            port_suffix: std::env::var("PURCHASES_API_PORT").unwrap_or_default(),
            timeout: std::env::var("PURCHASES_API_TIMEOUT")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the port suffix
    pub fn with_port_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.port_suffix = suffix.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Full base URL (host + port suffix)
    pub fn base_url(&self) -> String {
        format!("{}{}", self.api_url, self.port_suffix)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost")
    }
}
