//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工管理接口

pub mod employees;
pub mod health;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::middleware::logging_middleware;

/// Build the Axum router with state and middleware applied
pub fn build_app(state: ServerState) -> Router {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(employees::router())
        .with_state(state)
        // 任意来源均可调用 (无认证层)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
}
