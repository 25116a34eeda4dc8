// ==========================================
// 航天发射任务追踪系统 - 发射排期引擎
// ==========================================
// 职责: 校验排期请求、分配飞行编号、补全默认字段、落库
// 红线: 目标校验不通过不得产生任何写入
// ==========================================

use crate::domain::launch::{Launch, ScheduleRequest, DEFAULT_CUSTOMERS};
use crate::engine::allocator::FlightNumberAllocator;
use crate::engine::error::{EngineError, EngineResult};
use crate::repository::launch_repo::LaunchRepository;
use crate::repository::planet_repo::TargetCatalog;
use std::sync::Arc;
use tracing::info;

// ==========================================
// LaunchScheduler - 发射排期引擎
// ==========================================

/// 发射排期引擎
///
/// # 流程
/// 1. 目标天体对照参考目录校验（失败 → UnknownTarget，不写库）
/// 2. 经分配器取下一个飞行编号
/// 3. 补全默认字段: upcoming=true, success=true（乐观假定），
///    customers 缺省时填入默认赞助方
/// 4. 经与摄取相同的 put_launch 路径落库（统一写入契约）
///
/// # 并发契约
/// 编号分配沿用“读 max 再写入”模式，契约见 FlightNumberAllocator。
pub struct LaunchScheduler<C>
where
    C: TargetCatalog,
{
    launch_repo: Arc<LaunchRepository>,
    allocator: FlightNumberAllocator,
    target_catalog: Arc<C>,
}

impl<C> LaunchScheduler<C>
where
    C: TargetCatalog,
{
    /// 创建新的排期引擎实例
    ///
    /// # 参数
    /// - launch_repo: 发射任务仓储
    /// - target_catalog: 目标天体参考目录
    pub fn new(launch_repo: Arc<LaunchRepository>, target_catalog: Arc<C>) -> Self {
        let allocator = FlightNumberAllocator::new(launch_repo.clone());
        Self {
            launch_repo,
            allocator,
            target_catalog,
        }
    }

    /// 排期一次新发射
    ///
    /// 边界层保证 mission/rocket/launch_date 已存在且日期有效。
    ///
    /// # 返回
    /// - Ok(Launch): 完整落库后的发射任务
    /// - Err(EngineError::UnknownTarget): 目标天体不在参考目录
    pub fn schedule(&self, request: ScheduleRequest) -> EngineResult<Launch> {
        // 目标校验必须先于一切写入
        if !self.target_catalog.contains(&request.target)? {
            return Err(EngineError::UnknownTarget(request.target));
        }

        let flight_number = self.allocator.next_flight_number()?;

        let launch = Launch {
            flight_number,
            mission: request.mission,
            rocket: request.rocket,
            launch_date: request.launch_date,
            target: Some(request.target),
            customers: request.customers.unwrap_or_else(|| {
                DEFAULT_CUSTOMERS.iter().map(|c| c.to_string()).collect()
            }),
            upcoming: true,
            success: true,
        };

        self.launch_repo.put_launch(&launch)?;
        info!(
            flight_number = launch.flight_number,
            mission = %launch.mission,
            "新发射已排期"
        );

        Ok(launch)
    }
}

// ==========================================
// 测试
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryResult;
    use chrono::DateTime;
    use rusqlite::Connection;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// 内存版目标目录（替换 PlanetRepository 的测试接缝）
    struct InMemoryCatalog {
        names: HashSet<String>,
    }

    impl InMemoryCatalog {
        fn with(names: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                names: names.iter().map(|s| s.to_string()).collect(),
            })
        }
    }

    impl TargetCatalog for InMemoryCatalog {
        fn contains(&self, kepler_name: &str) -> RepositoryResult<bool> {
            Ok(self.names.contains(kepler_name))
        }
    }

    fn setup_repo() -> Arc<LaunchRepository> {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::configure_sqlite_connection(&conn).unwrap();
        crate::db::init_schema(&conn).unwrap();
        Arc::new(LaunchRepository::from_connection(Arc::new(Mutex::new(conn))))
    }

    fn make_request(target: &str) -> ScheduleRequest {
        ScheduleRequest {
            mission: "USS Enterprise".to_string(),
            rocket: "NCC 1701-D".to_string(),
            launch_date: DateTime::parse_from_rfc3339("2028-01-04T00:00:00+00:00").unwrap(),
            target: target.to_string(),
            customers: None,
        }
    }

    fn seed_flight_one(repo: &LaunchRepository) {
        repo.put_launch(&Launch {
            flight_number: 1,
            mission: "FalconSat".to_string(),
            rocket: "Falcon 1".to_string(),
            launch_date: DateTime::parse_from_rfc3339("2006-03-25T10:30:00+12:00").unwrap(),
            target: None,
            customers: vec![],
            upcoming: false,
            success: false,
        })
        .unwrap();
    }

    #[test]
    fn test_schedule_allocates_next_number_and_defaults() {
        let repo = setup_repo();
        seed_flight_one(&repo);

        let scheduler = LaunchScheduler::new(repo.clone(), InMemoryCatalog::with(&["Kepler-62 f"]));
        let launch = scheduler.schedule(make_request("Kepler-62 f")).unwrap();

        assert_eq!(launch.flight_number, 2);
        assert_eq!(launch.mission, "USS Enterprise");
        assert_eq!(launch.rocket, "NCC 1701-D");
        assert_eq!(launch.target.as_deref(), Some("Kepler-62 f"));
        assert!(launch.upcoming);
        assert!(launch.success);
        assert_eq!(launch.customers, vec!["NASA", "ZTM"]);

        // 已落库
        let persisted = repo.find_by_flight_number(2).unwrap().unwrap();
        assert_eq!(persisted, launch);
    }

    #[test]
    fn test_schedule_on_empty_catalog_uses_base_number() {
        let repo = setup_repo();
        let scheduler = LaunchScheduler::new(repo, InMemoryCatalog::with(&["Kepler-62 f"]));

        let launch = scheduler.schedule(make_request("Kepler-62 f")).unwrap();
        assert_eq!(launch.flight_number, 100);
    }

    #[test]
    fn test_schedule_keeps_caller_customers() {
        let repo = setup_repo();
        let scheduler = LaunchScheduler::new(repo, InMemoryCatalog::with(&["Kepler-62 f"]));

        let mut request = make_request("Kepler-62 f");
        request.customers = Some(vec!["Starfleet".to_string()]);

        let launch = scheduler.schedule(request).unwrap();
        assert_eq!(launch.customers, vec!["Starfleet"]);
    }

    #[test]
    fn test_unknown_target_rejected_without_write() {
        let repo = setup_repo();
        seed_flight_one(&repo);

        let scheduler = LaunchScheduler::new(repo.clone(), InMemoryCatalog::with(&["Kepler-62 f"]));
        let err = scheduler.schedule(make_request("Vulcan")).unwrap_err();

        assert!(matches!(err, EngineError::UnknownTarget(name) if name == "Vulcan"));
        // 校验失败不得产生写入
        assert_eq!(repo.count().unwrap(), 1);
    }
}
