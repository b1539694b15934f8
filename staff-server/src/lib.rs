//! Staff Server - 员工目录 HTTP API
//!
//! # 架构概述
//!
//! 一个薄的校验转发层：HTTP 路由 → 仓储 → 文档存储。
//!
//! - **HTTP API** (`api`): 四个员工路由和健康检查
//! - **仓储** (`repository`): employeeId 查重、记录组装
//! - **存储** (`store`): 文档集合接口，内存与 redb 两种实现
//!
//! # 模块结构
//!
//! ```text
//! staff-server/src/
//! ├── core/          # 配置、状态、服务器、启动错误
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── repository/    # 业务层
//! ├── store/         # 文档存储
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod repository;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use store::{EmployeeStore, MemoryStore, RedbStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env，初始化日志 (生产环境输出 JSON)
///
/// 返回加载后的配置
pub fn setup_environment() -> Config {
    // .env 缺失不是错误
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    config
}
