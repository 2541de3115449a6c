use std::time::Duration;

/// Default timeout for plain JSON calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for calls that carry PDF uploads
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Client configuration. Built once at startup and never mutated.
///
/// Both in production and under `trunk serve` the backend is reached through
/// the same origin under `/api` (the dev server proxies it, see `Trunk.toml`).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub default_headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub upload_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            default_headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            timeout: DEFAULT_TIMEOUT,
            upload_timeout: UPLOAD_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Build a full URL from an endpoint path like "/test/"
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let config = ClientConfig::default();
        assert_eq!(config.url("/test/"), "/api/test/");
        assert_eq!(config.url("requests/1/"), "/api/requests/1/");

        let config = ClientConfig {
            base_url: "http://127.0.0.1:8000/api/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.url("/test/"), "http://127.0.0.1:8000/api/test/");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.upload_timeout, Duration::from_secs(300));
        assert_eq!(
            config.default_headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }
}
