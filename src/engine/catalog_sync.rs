// ==========================================
// 航天发射任务追踪系统 - 发射目录摄取引擎
// ==========================================
// 职责: 外部目录拉取 + 字段归一化 + 幂等落库 + 启动门控
// 红线: 所有数据库操作通过 Repository；批次失败即整体失败
// ==========================================

use crate::domain::launch::Launch;
use crate::engine::error::{EngineError, EngineResult};
use crate::importer::spacex_client::{ExternalLaunchDoc, LaunchProvider};
use crate::repository::catalog_meta_repo::CatalogMetaRepository;
use crate::repository::launch_repo::LaunchRepository;
use std::sync::Arc;
use tracing::info;

// ==========================================
// LaunchIngestor - 发射目录摄取引擎
// ==========================================

/// 发射目录摄取引擎
///
/// # 职责
/// 1. 经 LaunchProvider 单次取回全量外部目录
/// 2. 将外部文档归一化为 Launch 形状
/// 3. 经 put_launch 按 flight_number 幂等 upsert 落库
/// 4. 启动门控：装载标记存在则跳过摄取
///
/// # 失败语义
/// 任何传输/状态/解析/写入失败都以 Ingestion 错误整体上浮，
/// 无部分成功上报；因写路径幂等，残留的半次摄取可被下次自愈。
pub struct LaunchIngestor<P>
where
    P: LaunchProvider,
{
    provider: Arc<P>,
    launch_repo: Arc<LaunchRepository>,
    meta_repo: Arc<CatalogMetaRepository>,
}

impl<P> LaunchIngestor<P>
where
    P: LaunchProvider,
{
    /// 创建新的摄取引擎实例
    ///
    /// # 参数
    /// - provider: 外部目录供应方
    /// - launch_repo: 发射任务仓储
    /// - meta_repo: 目录装载标记仓储
    pub fn new(
        provider: Arc<P>,
        launch_repo: Arc<LaunchRepository>,
        meta_repo: Arc<CatalogMetaRepository>,
    ) -> Self {
        Self {
            provider,
            launch_repo,
            meta_repo,
        }
    }

    /// 启动入口：门控后的目录装载
    ///
    /// 装载标记已存在 → 跳过摄取；否则执行一次完整同步，
    /// 成功后写入标记。标记只在全量成功后落下，中途失败的
    /// 启动会在下次重新触发同步。
    pub async fn load_catalog(&self) -> EngineResult<()> {
        if self.meta_repo.is_catalog_loaded()? {
            info!("发射目录已装载，跳过摄取");
            return Ok(());
        }

        info!("发射目录未装载，开始摄取");
        self.sync().await?;
        self.meta_repo.mark_catalog_loaded()?;
        Ok(())
    }

    /// 执行一次完整目录同步（幂等，可重复执行）
    ///
    /// # 流程
    /// 1. 单次请求取回全量目录（含 rocket.name / payloads.customers）
    /// 2. 逐条归一化为 Launch
    /// 3. 逐条经 put_launch 幂等落库
    ///
    /// # 失败
    /// - Err(EngineError::Ingestion): 请求失败或任一写入失败，批次中止
    pub async fn sync(&self) -> EngineResult<()> {
        let docs = self
            .provider
            .fetch_catalog()
            .await
            .map_err(|e| EngineError::Ingestion(e.to_string()))?;

        let total = docs.len();
        for doc in &docs {
            let launch = normalize(doc);
            self.launch_repo
                .put_launch(&launch)
                .map_err(|e| EngineError::Ingestion(e.to_string()))?;
        }

        info!(count = total, "发射目录同步完成");
        Ok(())
    }
}

/// 外部文档 → Launch 归一化
///
/// 映射口径:
/// - flight_number ← 外部飞行序号
/// - mission ← 外部任务名 name
/// - rocket ← 联结的 rocket.name
/// - launch_date ← date_local（保留原时区偏移）
/// - upcoming/success 透传（success 为 null 视为 false）
/// - customers ← 各 payload 客户列表顺序拼接（保序、保留重复）
/// - target: 历史目录记录不携带目标天体
pub fn normalize(doc: &ExternalLaunchDoc) -> Launch {
    let customers = doc
        .payloads
        .iter()
        .flat_map(|payload| payload.customers.iter().cloned())
        .collect();

    Launch {
        flight_number: doc.flight_number,
        mission: doc.name.clone(),
        rocket: doc.rocket.name.clone(),
        launch_date: doc.date_local,
        target: None,
        customers,
        upcoming: doc.upcoming,
        success: doc.success.unwrap_or(false),
    }
}

// ==========================================
// 测试
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::spacex_client::{ExternalPayload, ExternalRocket};
    use chrono::DateTime;

    fn make_doc() -> ExternalLaunchDoc {
        ExternalLaunchDoc {
            flight_number: 1,
            name: "FalconSat".to_string(),
            rocket: ExternalRocket {
                name: "Falcon 1".to_string(),
            },
            payloads: vec![
                ExternalPayload {
                    customers: vec!["DARPA".to_string()],
                },
                ExternalPayload {
                    customers: vec!["NASA".to_string(), "DARPA".to_string()],
                },
            ],
            date_local: DateTime::parse_from_rfc3339("2006-03-25T10:30:00+12:00").unwrap(),
            upcoming: false,
            success: Some(false),
        }
    }

    #[test]
    fn test_normalize_field_mapping() {
        let launch = normalize(&make_doc());

        assert_eq!(launch.flight_number, 1);
        assert_eq!(launch.mission, "FalconSat");
        assert_eq!(launch.rocket, "Falcon 1");
        assert_eq!(
            launch.launch_date,
            DateTime::parse_from_rfc3339("2006-03-25T10:30:00+12:00").unwrap()
        );
        assert_eq!(launch.target, None);
        assert!(!launch.upcoming);
        assert!(!launch.success);
    }

    #[test]
    fn test_normalize_flattens_customers_in_order() {
        let launch = normalize(&make_doc());
        // 顺序拼接，重复保留
        assert_eq!(launch.customers, vec!["DARPA", "NASA", "DARPA"]);
    }

    #[test]
    fn test_normalize_null_success_maps_to_false() {
        let mut doc = make_doc();
        doc.upcoming = true;
        doc.success = None;

        let launch = normalize(&doc);
        assert!(launch.upcoming);
        assert!(!launch.success);
    }
}
