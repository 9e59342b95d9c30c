use std::time::Duration;

/// Browser user agent sent by default; the content endpoint rejects obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Base URL of the 104 job bank site.
pub const DEFAULT_BASE_URL: &str = "https://www.104.com.tw";

/// Configuration for the JobBank client
#[derive(Debug, Clone)]
pub struct JobBankConfig {
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Minimum spacing between two requests issued by the same client
    pub request_interval: Duration,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Scheme and host the company endpoints are resolved against
    pub base_url: String,
}

impl Default for JobBankConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_interval: Duration::from_secs(2),
            timeout: Duration::from_secs(30),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl JobBankConfig {
    /// Creates a new JobBankConfig with custom settings
    ///
    /// # Basic usage
    ///
    /// ```rust
    /// use jobbank::{JobBank, JobBankConfig};
    /// use std::time::Duration;
    /// let config = JobBankConfig::new(
    ///     "Mozilla/5.0 (X11; Linux x86_64)",
    ///     Duration::from_secs(2),
    ///     Duration::from_secs(30),
    ///     None,
    /// );
    /// let client = JobBank::with_config(config)?;
    /// # Ok::<(), jobbank::JobBankError>(())
    /// ```
    pub fn new(
        user_agent: impl Into<String>,
        request_interval: Duration,
        timeout: Duration,
        base_url: Option<String>,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            request_interval,
            timeout,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}
