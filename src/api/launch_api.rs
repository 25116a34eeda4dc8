// ==========================================
// 航天发射任务追踪系统 - 发射任务 API
// ==========================================
// 职责: 边界校验 + 分页约定换算 + 引擎调用编排
// 说明: HTTP 路由与请求编解码在系统外部；本层假定收到的是
//       已反序列化的载荷，负责字段级校验后才放行到引擎
// ==========================================

use crate::domain::launch::{AbortOutcome, Launch, ScheduleRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::engine::lifecycle::LaunchLifecycle;
use crate::engine::scheduler::LaunchScheduler;
use crate::repository::planet_repo::TargetCatalog;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

// 分页约定（与原目录服务一致）
const DEFAULT_PAGE_NUMBER: i64 = 1;
const DEFAULT_PAGE_LIMIT: i64 = 0; // 0 = 不限制

// ==========================================
// SchedulePayload - 排期载荷
// ==========================================

/// 未经校验的排期载荷（字段可缺失）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePayload {
    pub mission: Option<String>,
    pub rocket: Option<String>,
    pub launch_date: Option<String>,
    pub target: Option<String>,
    pub customers: Option<Vec<String>>,
}

// ==========================================
// LaunchApi - 发射任务 API
// ==========================================

/// 发射任务API
///
/// 职责：
/// 1. 排期载荷的必填字段与日期校验
/// 2. 分页参数（page/limit → skip/limit）换算
/// 3. 中止时区分“编号不存在”与原始中止计数
pub struct LaunchApi<C>
where
    C: TargetCatalog,
{
    scheduler: LaunchScheduler<C>,
    lifecycle: Arc<LaunchLifecycle>,
}

impl<C> LaunchApi<C>
where
    C: TargetCatalog,
{
    /// 创建新的LaunchApi实例
    ///
    /// # 参数
    /// - scheduler: 排期引擎
    /// - lifecycle: 生命周期引擎
    pub fn new(scheduler: LaunchScheduler<C>, lifecycle: Arc<LaunchLifecycle>) -> Self {
        Self {
            scheduler,
            lifecycle,
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 分页查询发射任务列表
    ///
    /// # 参数
    /// - page: 页码（1 起；缺省/非正值按 1）
    /// - limit: 每页上限（0 = 不限制）
    ///
    /// # 返回
    /// - Ok(Vec<Launch>): flight_number 升序
    pub fn list_launches(&self, page: Option<i64>, limit: Option<i64>) -> ApiResult<Vec<Launch>> {
        let page = page.unwrap_or(DEFAULT_PAGE_NUMBER).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(0);
        let skip = (page - 1) * limit;

        debug!(page, limit, skip, "查询发射任务列表");
        Ok(self.lifecycle.list(skip, limit)?)
    }

    // ==========================================
    // 排期接口
    // ==========================================

    /// 排期一次新发射（边界校验入口）
    ///
    /// # 校验顺序
    /// 1. mission/rocket/target/launch_date 必填且非空白
    /// 2. launch_date 必须可解析为有效日期
    /// 3. 目标天体有效性由引擎对照参考目录判定
    ///
    /// # 返回
    /// - Ok(Launch): 完整落库后的发射任务
    /// - Err(ApiError::InvalidInput): 缺字段或日期无效
    /// - Err(ApiError::UnknownTarget): 目标天体不存在
    pub fn schedule_launch(&self, payload: SchedulePayload) -> ApiResult<Launch> {
        let mission = required_field(payload.mission)?;
        let rocket = required_field(payload.rocket)?;
        let target = required_field(payload.target)?;
        let launch_date_raw = required_field(payload.launch_date)?;

        let launch_date = parse_launch_date(&launch_date_raw)
            .ok_or_else(|| ApiError::InvalidInput("无效的发射日期".to_string()))?;

        let request = ScheduleRequest {
            mission,
            rocket,
            launch_date,
            target,
            customers: payload.customers,
        };

        Ok(self.scheduler.schedule(request)?)
    }

    // ==========================================
    // 生命周期接口
    // ==========================================

    /// 中止发射任务
    ///
    /// # 返回
    /// - Ok(AbortOutcome): 原始 matched/modified 计数
    /// - Err(ApiError::NotFound): 飞行编号不存在
    pub fn abort_launch(&self, flight_number: i64) -> ApiResult<AbortOutcome> {
        if !self.lifecycle.exists(flight_number)? {
            return Err(ApiError::NotFound(format!(
                "飞行编号不存在: {}",
                flight_number
            )));
        }

        Ok(self.lifecycle.abort(flight_number)?)
    }
}

/// 必填字段校验（缺失或空白均拒绝）
fn required_field(value: Option<String>) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::InvalidInput("缺少必填的发射字段".to_string())),
    }
}

/// 解析发射日期
///
/// 接受 RFC 3339（保留偏移）或纯日期 YYYY-MM-DD（按 UTC 零点）。
fn parse_launch_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).fixed_offset());
    }
    None
}

// ==========================================
// 测试
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_rejects_missing_and_blank() {
        assert!(required_field(None).is_err());
        assert!(required_field(Some("   ".to_string())).is_err());
        assert_eq!(required_field(Some("ok".to_string())).unwrap(), "ok");
    }

    #[test]
    fn test_parse_launch_date_formats() {
        assert!(parse_launch_date("2028-01-04T12:00:00+08:00").is_some());
        assert!(parse_launch_date("2028-01-04").is_some());
        assert!(parse_launch_date("zoot").is_none());
    }

    #[test]
    fn test_plain_date_maps_to_utc_midnight() {
        let dt = parse_launch_date("2028-01-04").unwrap();
        assert_eq!(dt.to_rfc3339(), "2028-01-04T00:00:00+00:00");
    }
}
