// ==========================================
// 航天发射任务追踪系统 - 发射任务实体
// ==========================================
// 职责: 发射任务主实体与排期请求定义
// 约束: flight_number 创建后不可变，仅 upcoming/success 可被中止流转修改
// ==========================================

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 空目录时分配器返回的基准飞行编号
///
/// 外部目录的历史编号从 1 起；本地排期编号从 100 起，
/// 两段编号共享同一单调序列（分配器永远取 max+1）。
pub const DEFAULT_FLIGHT_NUMBER: i64 = 100;

/// 排期请求未指定客户列表时的默认赞助方
pub const DEFAULT_CUSTOMERS: [&str; 2] = ["NASA", "ZTM"];

// ==========================================
// Launch - 发射任务
// ==========================================

/// 发射任务（历史目录记录或本地排期记录）
///
/// # 不变量
/// - flight_number 全局唯一，作为对外身份；存储层内部 rowid 永不外泄
/// - flight_number/mission/rocket/launch_date 创建后不可变
/// - upcoming/success 仅由中止流转修改（单向: Scheduled → Aborted）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
    /// 飞行编号（外部供应商分配 或 本地分配器分配）
    pub flight_number: i64,

    /// 任务名称
    pub mission: String,

    /// 火箭显示名称（非外键）
    pub rocket: String,

    /// 发射时间（供应商给出的当地时间，含时区偏移）
    pub launch_date: DateTime<FixedOffset>,

    /// 目标天体名称（仅排期记录携带；历史目录记录为空）
    pub target: Option<String>,

    /// 客户列表（保序、允许重复、可为空）
    pub customers: Vec<String>,

    /// 是否尚未发射
    pub upcoming: bool,

    /// 是否成功（排期时乐观置 true）
    pub success: bool,
}

// ==========================================
// ScheduleRequest - 排期请求
// ==========================================

/// 新发射排期请求
///
/// 边界层保证进入引擎前 mission/rocket/launch_date 已存在且日期可解析；
/// target 的有效性由排期引擎对照参考目录校验。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub mission: String,
    pub rocket: String,
    pub launch_date: DateTime<FixedOffset>,
    pub target: String,
    /// 未指定时引擎填入 DEFAULT_CUSTOMERS
    pub customers: Option<Vec<String>>,
}

// ==========================================
// AbortOutcome - 中止结果
// ==========================================

/// 中止操作的原始计数结果
///
/// matched/modified 按存储层原样上报：
/// - matched=0            → 飞行编号不存在
/// - matched=1 modified=1 → 本次完成中止
/// - matched=1 modified=0 → 此前已中止（幂等重放）
///
/// 区分“不存在”与“已中止”由调用方负责，引擎不折叠为单一布尔值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbortOutcome {
    pub matched: u64,
    pub modified: u64,
}

impl AbortOutcome {
    /// 是否命中了记录
    pub fn found(&self) -> bool {
        self.matched > 0
    }

    /// 本次调用是否实际改写了状态
    pub fn changed(&self) -> bool {
        self.modified > 0
    }
}
