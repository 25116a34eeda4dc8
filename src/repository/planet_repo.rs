// ==========================================
// 航天发射任务追踪系统 - 行星参考数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 职责: planets 表的写入与存在性查询
// ==========================================

use crate::domain::planet::Planet;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// TargetCatalog Trait - 目标天体查询接口
// ==========================================
// 用途: 排期引擎校验目标天体的接缝
// 实现者: PlanetRepository（测试中可用内存实现替换）

/// 目标天体参考目录（只读查询接缝）
pub trait TargetCatalog: Send + Sync {
    /// 名称是否存在于参考目录
    fn contains(&self, kepler_name: &str) -> RepositoryResult<bool>;
}

// ==========================================
// PlanetRepository - 行星参考数据仓储
// ==========================================

/// 行星参考数据仓储
///
/// 职责: 管理 planets 表；Kepler 参考数据集装载后对排期只读。
pub struct PlanetRepository {
    conn: Arc<Mutex<Connection>>,
}

impl PlanetRepository {
    /// 创建新的行星仓储实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 幂等写入行星记录（按 kepler_name 去重）
    pub fn upsert_planet(&self, planet: &Planet) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT OR IGNORE INTO planets (kepler_name) VALUES (?1)",
            params![planet.kepler_name],
        )?;
        Ok(())
    }

    /// 参考目录记录总数
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM planets", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl TargetCatalog for PlanetRepository {
    fn contains(&self, kepler_name: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM planets WHERE kepler_name = ?1 LIMIT 1",
                params![kepler_name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

// ==========================================
// 测试
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_repo() -> PlanetRepository {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::configure_sqlite_connection(&conn).unwrap();
        crate::db::init_schema(&conn).unwrap();
        PlanetRepository::from_connection(Arc::new(Mutex::new(conn)))
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let repo = setup_test_repo();
        let planet = Planet {
            kepler_name: "Kepler-62 f".to_string(),
        };

        repo.upsert_planet(&planet).unwrap();
        repo.upsert_planet(&planet).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_contains() {
        let repo = setup_test_repo();
        repo.upsert_planet(&Planet {
            kepler_name: "Kepler-442 b".to_string(),
        })
        .unwrap();

        assert!(repo.contains("Kepler-442 b").unwrap());
        assert!(!repo.contains("Vulcan").unwrap());
    }
}
