// ==========================================
// 航天发射任务追踪系统 - 行星参考实体
// ==========================================
// 职责: 排期目标校验所用的参考数据集记录
// ==========================================

use serde::{Deserialize, Serialize};

/// 可居住候选行星（Kepler 参考数据集筛选结果）
///
/// 只读参考数据，仅用于排期时的目标天体存在性校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Kepler 正式命名，如 "Kepler-62 f"
    pub kepler_name: String,
}
