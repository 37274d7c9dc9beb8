//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

/// Default base URL of the cat image service.
pub const DEFAULT_CAT_API_BASE_URL: &str = "https://api.thecatapi.com/v1";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API key sent to the upstream as `x-api-key` (unset = no header)
    pub cat_api_key: Option<String>,
    /// Upstream base URL, e.g. `https://api.thecatapi.com/v1`
    pub cat_api_base_url: Url,

    /// Interface to bind the HTTP server on
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,

    /// Transport-level timeout for a single upstream call
    pub upstream_timeout: Duration,
    /// How long a handler waits for a dispatch before answering 504
    pub dispatch_deadline: Duration,

    /// CORS allowed origins (`*` for any). `None` disables the CORS layer.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the raw value of a variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = non_empty("CAT_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_CAT_API_BASE_URL.to_string());
        let cat_api_base_url = Url::parse(&base_url)
            .with_context(|| format!("CAT_API_BASE_URL is not a valid URL: {}", base_url))?;
        if cat_api_base_url.cannot_be_a_base() || !matches!(cat_api_base_url.scheme(), "http" | "https") {
            bail!("CAT_API_BASE_URL must be an http(s) URL: {}", base_url);
        }

        let server_port = non_empty("SERVER_PORT")
            .or_else(|| non_empty("PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("SERVER_PORT must be a valid port number")?;

        let upstream_timeout = parse_secs(non_empty("UPSTREAM_TIMEOUT_SECS"), 10)
            .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;
        let dispatch_deadline = parse_secs(non_empty("DISPATCH_DEADLINE_SECS"), 15)
            .context("DISPATCH_DEADLINE_SECS must be a whole number of seconds")?;

        let cors_allowed_origins = non_empty("CORS_ALLOWED_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Ok(Self {
            cat_api_key: non_empty("CAT_API_KEY"),
            cat_api_base_url,
            server_host: non_empty("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            upstream_timeout,
            dispatch_deadline,
            cors_allowed_origins,
        })
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_secs(raw: Option<String>, default: u64) -> Result<Duration> {
    let secs = match raw {
        Some(raw) => raw.parse::<u64>()?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}
