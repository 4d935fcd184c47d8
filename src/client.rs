//! Main client for interacting with the dataset API

use crate::error::{Error, Result};
use bon::bon;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::time::Duration;

/// SDK version for User-Agent header
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default timeout for API requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Main client for interacting with the dataset API
///
/// Cheap to share behind an `Arc`; every operation is a single stateless round trip.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    pub(crate) base_url: Url,
    pub(crate) token: Option<String>,
    pub(crate) user_agent: String,
    pub(crate) http: ClientWithMiddleware,
}

#[bon]
impl DatasetClient {
    /// Create a new client
    ///
    /// Pass `http_client` to plug in a `reqwest-middleware` stack (retries, logging).
    /// When it is set, `timeout` and `connect_timeout` are ignored since they belong
    /// to the inner `reqwest::Client`.
    #[builder]
    pub fn new(
        #[builder(into, default = String::from(DEFAULT_BASE_URL))] base_url: String,
        #[builder(into)] token: Option<String>,
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
        #[builder(into)] user_agent: Option<String>,
        http_client: Option<ClientWithMiddleware>,
    ) -> Result<Self> {
        let base_url = parse_base_url(&base_url)?;

        let http = match http_client {
            Some(client) => client,
            None => {
                let client = reqwest::Client::builder()
                    .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
                    .connect_timeout(connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
                    .pool_max_idle_per_host(10)
                    .pool_idle_timeout(Duration::from_secs(90))
                    .build()
                    .map_err(|e| {
                        Error::Configuration(format!("Failed to build HTTP client: {}", e))
                    })?;
                reqwest_middleware::ClientBuilder::new(client).build()
            }
        };

        let user_agent = user_agent.unwrap_or_else(|| format!("{}/{} (Rust)", SDK_NAME, SDK_VERSION));

        Ok(Self {
            base_url,
            token,
            user_agent,
            http,
        })
    }

    /// Create a new client from environment variables
    ///
    /// Reads from:
    /// - `DATASET_API_BASE_URL`: Optional base URL (defaults to `http://localhost:8080/api`)
    /// - `DATASET_API_TOKEN`: Optional token sent in the `AUTHORIZATION` header
    pub fn from_env() -> Result<Self> {
        use std::env;

        let base_url =
            env::var("DATASET_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = env::var("DATASET_API_TOKEN").ok().filter(|t| !t.is_empty());

        Self::builder()
            .base_url(base_url)
            .maybe_token(token)
            .build()
    }

    /// Base URL every request path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// User-Agent sent with every request
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| Error::Configuration(format!("Invalid base URL '{}': {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "Base URL '{}' cannot carry a path",
            raw
        )));
    }
    Ok(url)
}
