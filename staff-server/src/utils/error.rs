//! 统一错误处理
//!
//! 两级错误：
//!
//! | 分类 | 状态码 | 响应体 |
//! |------|--------|--------|
//! | 输入错误 (Validation / Conflict) | 400 | `{ "message" }` |
//! | 操作失败 (Operation) | 500 | `{ "message", "error" }` |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回输入错误
//! Err(AppError::validation("Missing required fields: name"))
//!
//! // 包装存储失败
//! repo.find_all().await.map_err(|e| AppError::operation("Error fetching employees", e))?;
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorBody;
use tracing::error;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 输入错误 (400) ==========
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Resource already exists: {0}")]
    /// 资源冲突，返回 400
    Conflict(String),

    // ========== 系统错误 (500) ==========
    #[error("{message}: {detail}")]
    /// 存储操作失败 (500)，detail 透传给调用方
    Operation { message: String, detail: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Wrap an underlying failure under a route-level message
    pub fn operation(message: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self::Operation {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Operation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => ErrorBody::message(msg),
            AppError::Operation { message, detail } => {
                error!(target: "store", error = %detail, "{}", message);
                ErrorBody::with_error(message, detail)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        AppError::Validation("Invalid request body".to_string())
    }
}
