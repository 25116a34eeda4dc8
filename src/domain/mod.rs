// ==========================================
// 航天发射任务追踪系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod launch;
pub mod planet;

// 重导出核心类型
pub use launch::{AbortOutcome, Launch, ScheduleRequest, DEFAULT_CUSTOMERS, DEFAULT_FLIGHT_NUMBER};
pub use planet::Planet;
