//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/employees | GET | 列出全部员工 |
//! | /api/employees | POST | 新建员工 |
//! | /api/employees/{id} | PUT | 更新员工 (employeeId 不可改) |
//! | /api/employees/{id} | DELETE | 删除员工 |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/employees", get(handler::list).post(handler::create))
        .route(
            "/api/employees/{id}",
            put(handler::update).delete(handler::delete),
        )
}
