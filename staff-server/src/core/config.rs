/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 5000 | HTTP 服务端口 |
/// | STORE_PATH | data/employees.redb | 文档存储文件，`:memory:` 使用内存存储 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录，存在时写入滚动文件 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// PORT=8080 STORE_PATH=:memory: cargo run -p staff-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 文档存储位置
    pub store_path: String,
    /// 默认日志级别
    pub log_level: String,
    /// 日志目录 (可选)
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
}

/// Sentinel `STORE_PATH` selecting the in-memory store
pub const MEMORY_STORE: &str = ":memory:";

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置 (环境变量或测试用映射)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            http_port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            store_path: lookup("STORE_PATH")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "data/employees.redb".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, store_path: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.store_path = store_path.into();
        config
    }

    /// 是否使用内存存储
    pub fn is_memory_store(&self) -> bool {
        self.store_path == MEMORY_STORE
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
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
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.http_port, 5000);
        assert_eq!(config.store_path, "data/employees.redb");
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[("PORT", "abc"), ("STORE_PATH", "")]));
        assert_eq!(config.http_port, 5000);
        assert_eq!(config.store_path, "data/employees.redb");

        let config = Config::from_lookup(lookup(&[("PORT", "70000")]));
        assert_eq!(config.http_port, 5000);
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("STORE_PATH", MEMORY_STORE),
            ("LOG_LEVEL", "debug"),
            ("LOG_DIR", "/var/log/staff"),
            ("ENVIRONMENT", "production"),
        ]));
        assert_eq!(config.http_port, 8080);
        assert!(config.is_memory_store());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/staff"));
        assert!(config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides(0, MEMORY_STORE);
        assert_eq!(config.http_port, 0);
        assert!(config.is_memory_store());
    }
}
