use std::env;
use std::time::Duration;

pub const FOOTBALL_DATA_BASE_URL: &str = "https://api.football-data.org/v4";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for football-data.org.
///
/// Built once at startup and handed to `MatchDataProvider::new`; nothing
/// reads the environment after that.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Sent as `X-Auth-Token`. An empty token is allowed; the provider will
    /// reject it and the fetcher falls back to synthetic fixtures.
    pub api_token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: FOOTBALL_DATA_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env() -> Self {
        let config = Self::new(env::var("FOOTBALL_DATA_API_KEY").unwrap_or_default());
        if !config.has_token() {
            tracing::warn!("FOOTBALL_DATA_API_KEY not set — provider requests will be unauthenticated");
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_token(&self) -> bool {
        !self.api_token.is_empty()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ProviderConfig::default();
        assert_eq!(cfg.base_url, "https://api.football-data.org/v4");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert!(!cfg.has_token());
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let cfg = ProviderConfig::new("abc").with_base_url("http://127.0.0.1:9000/");
        assert_eq!(cfg.base_url, "http://127.0.0.1:9000");
        assert!(cfg.has_token());
    }
}
