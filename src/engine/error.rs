// ==========================================
// 航天发射任务追踪系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 目录摄取失败（请求失败/非 2xx/解析失败/批次内任一写入失败）
    ///
    /// 启动期致命：进程宁可启动失败，也不带着半装载的目录运行。
    /// 批次无部分成功协议，单条坏记录与请求级失败同类上报。
    #[error("发射目录摄取失败: {0}")]
    Ingestion(String),

    /// 排期请求引用的目标天体不在参考目录中（上报调用方，非致命）
    #[error("目标天体未找到: {0}")]
    UnknownTarget(String),

    /// 仓储层错误透传
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
