// ==========================================
// 航天发射任务追踪系统 - 飞行编号分配器
// ==========================================
// 职责: 基于目录当前内容计算下一个飞行编号
// ==========================================

use crate::domain::launch::DEFAULT_FLIGHT_NUMBER;
use crate::repository::launch_repo::LaunchRepository;
use crate::repository::RepositoryResult;
use std::sync::Arc;

// ==========================================
// FlightNumberAllocator - 飞行编号分配器
// ==========================================

/// 飞行编号分配器
///
/// 返回值相对“调用瞬间”的全部记录唯一：目录为空返回基准值 100，
/// 否则返回 max(flight_number)+1。序列单调递增、容忍空洞。
///
/// # 并发契约
/// 读取 max 与后续写入之间不持有排他锁，两个并发排期可能读到
/// 相同 max 并计算出相同编号。本实现中所有存储访问经由共享连接
/// 互斥锁串行化，竞争窗口极小但并未根除；真正撞号时，第二次
/// 写入沿 put_launch 的 upsert 路径静默整行覆盖第一条排期记录，
/// 不产生任何错误。分配器自身不做检测或重试；需要根除时应把
/// 读 max 与写入收进同一串行化事务。
pub struct FlightNumberAllocator {
    launch_repo: Arc<LaunchRepository>,
}

impl FlightNumberAllocator {
    /// 创建新的分配器实例
    pub fn new(launch_repo: Arc<LaunchRepository>) -> Self {
        Self { launch_repo }
    }

    /// 计算下一个飞行编号
    ///
    /// # 返回
    /// - 目录为空: DEFAULT_FLIGHT_NUMBER (100)
    /// - 否则: 当前最大编号 + 1（不回填删除留下的空洞）
    pub fn next_flight_number(&self) -> RepositoryResult<i64> {
        match self.launch_repo.max_flight_number()? {
            Some(max) => Ok(max + 1),
            None => Ok(DEFAULT_FLIGHT_NUMBER),
        }
    }
}

// ==========================================
// 测试
// ==========================================
