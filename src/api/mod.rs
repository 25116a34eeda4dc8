// ==========================================
// 航天发射任务追踪系统 - API 层
// ==========================================
// 职责: 业务接口与边界校验（路由/编解码在系统外部）
// ==========================================

pub mod error;
pub mod launch_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use launch_api::{LaunchApi, SchedulePayload};
