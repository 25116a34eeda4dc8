// ==========================================
// 航天发射任务追踪系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 说明: 所有仓储共享同一 SQLite 连接（互斥保护），
//       与各引擎在此一次性装配
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::api::LaunchApi;
use crate::engine::lifecycle::LaunchLifecycle;
use crate::engine::scheduler::LaunchScheduler;
use crate::repository::catalog_meta_repo::CatalogMetaRepository;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::launch_repo::LaunchRepository;
use crate::repository::planet_repo::PlanetRepository;

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 发射任务仓储
    pub launch_repo: Arc<LaunchRepository>,

    /// 行星参考数据仓储
    pub planet_repo: Arc<PlanetRepository>,

    /// 目录装载标记仓储
    pub meta_repo: Arc<CatalogMetaRepository>,

    /// 生命周期引擎
    pub lifecycle: Arc<LaunchLifecycle>,

    /// 发射任务API
    pub launch_api: Arc<LaunchApi<PlanetRepository>>,
}

impl AppState {
    /// 创建应用状态（打开数据库、初始化 schema、装配仓储与引擎）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_and_init(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let conn = Arc::new(Mutex::new(conn));

        Self::from_connection(db_path, conn)
    }

    /// 从已有连接装配应用状态（测试入口）
    pub fn from_connection(
        db_path: &str,
        conn: Arc<Mutex<Connection>>,
    ) -> RepositoryResult<Self> {
        let launch_repo = Arc::new(LaunchRepository::from_connection(conn.clone()));
        let planet_repo = Arc::new(PlanetRepository::from_connection(conn.clone()));
        let meta_repo = Arc::new(CatalogMetaRepository::from_connection(conn));

        let lifecycle = Arc::new(LaunchLifecycle::new(launch_repo.clone()));
        let scheduler = LaunchScheduler::new(launch_repo.clone(), planet_repo.clone());
        let launch_api = Arc::new(LaunchApi::new(scheduler, lifecycle.clone()));

        Ok(Self {
            db_path: db_path.to_string(),
            launch_repo,
            planet_repo,
            meta_repo,
            lifecycle,
            launch_api,
        })
    }
}
