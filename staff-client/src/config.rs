//! Client configuration

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log directory
pub const DEFAULT_LOG_DIR: &str = "./logs";

/// Client configuration for connecting to the staff API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory for the rolling log file
    pub log_dir: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            log_dir: DEFAULT_LOG_DIR.to_string(),
        }
    }

    /// 从环境变量加载配置
    ///
    /// | 环境变量 | 默认值 |
    /// |----------|--------|
    /// | STAFF_API_URL | http://localhost:5000 |
    /// | STAFF_CLIENT_TIMEOUT | 30 |
    /// | STAFF_CLIENT_LOG_DIR | ./logs |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source (environment or a test map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("STAFF_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: lookup("STAFF_CLIENT_TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            log_dir: lookup("STAFF_CLIENT_LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: std::collections::HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_env_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.log_dir, DEFAULT_LOG_DIR);
    }

    #[test]
    fn test_env_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("STAFF_API_URL", "http://10.0.0.5:5000"),
            ("STAFF_CLIENT_TIMEOUT", "7"),
            ("STAFF_CLIENT_LOG_DIR", "/tmp/staff"),
        ]));
        assert_eq!(config.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.timeout, 7);
        assert_eq!(config.log_dir, "/tmp/staff");

        let config = ClientConfig::from_lookup(lookup(&[("STAFF_CLIENT_TIMEOUT", "soon")]));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://127.0.0.1:9000").with_timeout(5);
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.log_dir, DEFAULT_LOG_DIR);
    }
}
