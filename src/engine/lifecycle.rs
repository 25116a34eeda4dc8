// ==========================================
// 航天发射任务追踪系统 - 发射任务生命周期引擎
// ==========================================
// 职责: 存在性检查、分页列表、中止流转
// ==========================================

use crate::domain::launch::{AbortOutcome, Launch};
use crate::engine::error::EngineResult;
use crate::repository::launch_repo::LaunchRepository;
use std::sync::Arc;
use tracing::info;

// ==========================================
// LaunchLifecycle - 生命周期引擎
// ==========================================

/// 发射任务生命周期引擎
///
/// 状态机（单任务）: Scheduled(upcoming=true) → Aborted(upcoming=false, success=false)，
/// 单向且幂等。“不存在”按正常结果（false/零计数）上报，不作为错误。
pub struct LaunchLifecycle {
    launch_repo: Arc<LaunchRepository>,
}

impl LaunchLifecycle {
    /// 创建新的生命周期引擎实例
    pub fn new(launch_repo: Arc<LaunchRepository>) -> Self {
        Self { launch_repo }
    }

    /// 飞行编号是否存在
    pub fn exists(&self, flight_number: i64) -> EngineResult<bool> {
        Ok(self.launch_repo.exists(flight_number)?)
    }

    /// 分页列表（flight_number 升序，内部存储标识不出引擎）
    ///
    /// # 参数
    /// - skip: 跳过的记录数
    /// - limit: 返回上限；<= 0 表示不限制
    pub fn list(&self, skip: i64, limit: i64) -> EngineResult<Vec<Launch>> {
        Ok(self.launch_repo.list(skip, limit)?)
    }

    /// 中止发射任务（单向，幂等重放安全）
    ///
    /// # 返回
    /// - AbortOutcome: 原始 matched/modified 计数；
    ///   “不存在”与“已中止”的区分留给调用方
    pub fn abort(&self, flight_number: i64) -> EngineResult<AbortOutcome> {
        let outcome = self.launch_repo.abort(flight_number)?;
        if outcome.changed() {
            info!(flight_number, "发射任务已中止");
        }
        Ok(outcome)
    }
}

// ==========================================
// 测试
// ==========================================
