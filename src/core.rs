use governor::{
    Quota, RateLimiter, clock::DefaultClock, middleware::NoOpMiddleware, state::InMemoryState,
    state::NotKeyed,
};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use std::sync::Arc;

use super::config::JobBankConfig;
use super::error::{JobBankError, Result};

/// Accept header the site's own front end sends to the ajax endpoints.
const ACCEPT_JSON: &str = "application/json, text/plain, */*";

/// Number of characters of an unexpected body kept in error messages.
const PREVIEW_CHARS: usize = 200;

type Governor = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

#[derive(Debug, Clone)]
pub struct JobBank {
    /// HTTP client for making requests
    pub(crate) client: reqwest::Client,

    /// Token bucket pacing requests issued through this client
    pub(crate) rate_limiter: Arc<Governor>,

    /// Scheme and host, without a trailing slash
    pub(crate) base_url: String,
}

/// HTTP client for the 104 job bank company endpoints.
///
/// `JobBank` is the entry point of the crate. It owns a configured `reqwest` client that
/// presents itself as a browser (the ajax endpoints expect an `Accept` header listing JSON and
/// a browser `User-Agent`) and paces its own requests so that repeated calls through one client
/// stay at the polite crawl rate of one request every two seconds.
///
/// Requests are never retried. A network failure, a 404, or any other non-success status is
/// returned to the caller as is, and deciding whether to try again is left to them.
///
/// # Examples
///
/// ```rust
/// # use jobbank::JobBank;
/// let client = JobBank::new("Mozilla/5.0 (X11; Linux x86_64)")?;
/// # Ok::<(), jobbank::JobBankError>(())
/// ```
///
/// With custom configuration:
///
/// ```rust
/// # use jobbank::{JobBank, JobBankConfig};
/// # use std::time::Duration;
/// let config = JobBankConfig {
///     timeout: Duration::from_secs(60),
///     ..JobBankConfig::default()
/// };
/// let client = JobBank::with_config(config)?;
/// # Ok::<(), jobbank::JobBankError>(())
/// ```
impl JobBank {
    /// Creates a new client with the default pacing, timeout and base URL.
    ///
    /// # Arguments
    ///
    /// * `user_agent` - The `User-Agent` header sent with every request.
    pub fn new(user_agent: &str) -> Result<Self> {
        let config = JobBankConfig {
            user_agent: user_agent.to_string(),
            ..JobBankConfig::default()
        };
        Self::with_config(config)
    }

    /// Creates a client from a full configuration.
    ///
    /// Use this to point the client at a different host (a mock server in tests), to
    /// lengthen the timeout, or to change the request interval.
    ///
    /// # Errors
    ///
    /// Returns `JobBankError::ConfigError` if the user agent is not a valid header value,
    /// the request interval is zero, the base URL is empty, or the HTTP client cannot be built.
    pub fn with_config(config: JobBankConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| JobBankError::ConfigError(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                JobBankError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        let quota = Quota::with_period(config.request_interval).ok_or_else(|| {
            JobBankError::ConfigError("Request interval must be greater than zero".to_string())
        })?;
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(JobBankError::ConfigError(
                "Base URL must not be empty".to_string(),
            ));
        }

        Ok(JobBank {
            client,
            rate_limiter,
            base_url,
        })
    }

    /// Fetches text content from a URL.
    ///
    /// Waits for the pacing bucket, issues a single GET and returns the body of a successful
    /// response. When `referer` is given it is sent as the `Referer` header; the company
    /// endpoints answer with an error page when it is missing.
    ///
    /// # Content-Type Validation
    ///
    /// The site occasionally serves an HTML page (a maintenance notice or a bot challenge)
    /// with status 200. A `text/html` response whose body does not look like JSON is turned
    /// into `UnexpectedContentType` so that callers see a decode failure instead of a
    /// confusing JSON syntax error.
    ///
    /// # Errors
    ///
    /// * `JobBankError::RequestError` - Network, DNS, TLS or timeout failure
    /// * `JobBankError::NotFound` - HTTP 404
    /// * `JobBankError::UnexpectedStatus` - Any other non-success status, with a body preview
    /// * `JobBankError::UnexpectedContentType` - An HTML page where JSON was expected
    pub async fn get(&self, url: &str, referer: Option<&str>) -> Result<String> {
        self.rate_limiter.until_ready().await;

        let mut request = self.client.get(url);
        if let Some(referer) = referer {
            request = request.header(REFERER, referer);
        }

        tracing::debug!(url, referer, "sending request");
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(JobBankError::NotFound);
        }

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(JobBankError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
                preview: error_body.chars().take(PREVIEW_CHARS).collect(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|val| val.to_str().ok())
            .map(str::to_lowercase);

        let body = response.text().await?;

        if let Some(ct) = content_type.filter(|ct| ct.contains("text/html")) {
            let trimmed = body.trim_start();
            if trimmed.starts_with('{') || trimmed.starts_with('[') {
                tracing::warn!(
                    "Received text/html content-type, but content appears to be JSON: {}",
                    url
                );
                return Ok(body);
            }
            return Err(JobBankError::UnexpectedContentType {
                url: url.to_string(),
                expected_pattern: "application/json".to_string(),
                got_content_type: ct,
                content_preview: body.chars().take(PREVIEW_CHARS).collect(),
            });
        }

        tracing::debug!(url, bytes = body.len(), "response received");
        Ok(body)
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
