// ==========================================
// 航天发射任务追踪系统 - 目录装载标记仓储
// ==========================================
// 职责: catalog_meta 表的标记读写
// 约束: 标记拥有独立身份，不依赖任何具体发射记录的字段值
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

/// 发射目录已装载标记
const LAUNCH_CATALOG_MARKER: &str = "launch_catalog_loaded";

// ==========================================
// CatalogMetaRepository - 目录装载标记仓储
// ==========================================

/// 目录装载标记仓储
///
/// 启动门控依据：以显式标记判断外部目录是否已装载，
/// 而非通过匹配某条历史发射的内容字段推断。即便首条历史
/// 记录日后被合法改写，门控行为也不受影响。
pub struct CatalogMetaRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CatalogMetaRepository {
    /// 创建新的标记仓储实例
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

    /// 发射目录是否已装载
    pub fn is_catalog_loaded(&self) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM catalog_meta WHERE marker = ?1",
                params![LAUNCH_CATALOG_MARKER],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// 写入“目录已装载”标记（幂等）
    ///
    /// 仅在一次完整成功的同步之后调用；同步中途失败不会留下标记，
    /// 下次启动会重新触发同步（upsert 写路径保证重放安全）。
    pub fn mark_catalog_loaded(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT OR IGNORE INTO catalog_meta (marker) VALUES (?1)",
            params![LAUNCH_CATALOG_MARKER],
        )?;
        Ok(())
    }
}

// ==========================================
// 测试
// ==========================================
