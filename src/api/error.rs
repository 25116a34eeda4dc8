// ==========================================
// 航天发射任务追踪系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/仓储错误为用户友好的错误消息
// ==========================================

use crate::engine::error::EngineError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求校验错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 业务错误
    // ==========================================
    /// 目标天体不在参考目录（调用方可修正后重试）
    #[error("目标天体未找到: {0}")]
    UnknownTarget(String),

    // ==========================================
    // 内部错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

// 引擎错误 → API 错误
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownTarget(name) => ApiError::UnknownTarget(name),
            EngineError::Ingestion(msg) => ApiError::InternalError(msg),
            EngineError::Repository(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

// 仓储错误 → API 错误
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
