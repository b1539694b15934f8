use std::sync::Arc;

use crate::core::{Config, Result};
use crate::store::{EmployeeStore, MemoryStore, open_store};

/// 服务器状态 - 请求处理器共享的句柄
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<dyn EmployeeStore> | 员工文档存储 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 文档存储
    pub store: Arc<dyn EmployeeStore>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    pub fn new(config: Config, store: Arc<dyn EmployeeStore>) -> Self {
        Self { config, store }
    }

    /// 根据配置打开存储并初始化状态
    pub fn initialize(config: &Config) -> Result<Self> {
        let store = open_store(config)?;
        Ok(Self::new(config.clone(), store))
    }

    /// 内存存储状态 (测试用)
    pub fn in_memory() -> Self {
        let config = Config::with_overrides(0, crate::core::config::MEMORY_STORE);
        Self::new(config, Arc::new(MemoryStore::new()))
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
