// ==========================================
// 航天发射任务追踪系统 - 发射任务仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 职责: launches 表的查询与幂等写入
// ==========================================

use crate::domain::launch::{AbortOutcome, Launch};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, FixedOffset};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// LaunchRepository - 发射任务仓储
// ==========================================

/// 发射任务仓储
///
/// 职责: 管理 launches 表；摄取与排期共用唯一写入口 put_launch，
/// 按 flight_number 幂等 upsert。
pub struct LaunchRepository {
    conn: Arc<Mutex<Connection>>,
}

impl LaunchRepository {
    /// 创建新的发射任务仓储实例
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

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 行 → Launch 映射（内部 rowid 不出仓储层）
    ///
    /// 日期/客户列存的是文本编码，解码失败按数据损坏上浮
    /// （经错误分类器转为 SerializationError），不做静默兜底。
    fn map_row(row: &Row<'_>) -> rusqlite::Result<Launch> {
        let launch_date_str: String = row.get(3)?;
        let launch_date = DateTime::<FixedOffset>::parse_from_rfc3339(&launch_date_str)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?;

        let customers_json: String = row.get(5)?;
        let customers = serde_json::from_str(&customers_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
        })?;

        Ok(Launch {
            flight_number: row.get(0)?,
            mission: row.get(1)?,
            rocket: row.get(2)?,
            launch_date,
            target: row.get(4)?,
            customers,
            upcoming: row.get(6)?,
            success: row.get(7)?,
        })
    }

    const SELECT_COLUMNS: &'static str =
        "flight_number, mission, rocket, launch_date, target, customers_json, upcoming, success";

    // ==========================================
    // 写入接口
    // ==========================================

    /// 幂等写入发射任务（唯一写入口）
    ///
    /// 按 flight_number upsert：已存在则整行覆盖，不存在则插入。
    /// 摄取与排期共用此路径，重复摄取因此天然幂等且可自愈。
    ///
    /// # 参数
    /// - launch: 发射任务实体
    pub fn put_launch(&self, launch: &Launch) -> RepositoryResult<()> {
        let customers_json = serde_json::to_string(&launch.customers).map_err(|e| {
            RepositoryError::SerializationError {
                field: "customers".to_string(),
                message: e.to_string(),
            }
        })?;

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO launches (
                flight_number, mission, rocket, launch_date,
                target, customers_json, upcoming, success
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(flight_number) DO UPDATE SET
                mission = excluded.mission,
                rocket = excluded.rocket,
                launch_date = excluded.launch_date,
                target = excluded.target,
                customers_json = excluded.customers_json,
                upcoming = excluded.upcoming,
                success = excluded.success
            "#,
            params![
                launch.flight_number,
                launch.mission,
                launch.rocket,
                launch.launch_date.to_rfc3339(),
                launch.target,
                customers_json,
                launch.upcoming,
                launch.success,
            ],
        )?;

        Ok(())
    }

    /// 中止发射任务（单向流转: upcoming=false, success=false）
    ///
    /// # 返回
    /// - AbortOutcome: 原始 matched/modified 计数
    ///   matched 来自存在性检查，modified 仅统计实际被改写的行，
    ///   对已中止的记录重放得到 matched=1, modified=0。
    pub fn abort(&self, flight_number: i64) -> RepositoryResult<AbortOutcome> {
        let conn = self.get_conn()?;

        let matched: i64 = conn.query_row(
            "SELECT COUNT(*) FROM launches WHERE flight_number = ?1",
            params![flight_number],
            |row| row.get(0),
        )?;

        // 条件谓词使“重放同一中止”不计入 modified
        let modified = conn.execute(
            r#"
            UPDATE launches
            SET upcoming = 0, success = 0
            WHERE flight_number = ?1
              AND (upcoming <> 0 OR success <> 0)
            "#,
            params![flight_number],
        )?;

        Ok(AbortOutcome {
            matched: matched as u64,
            modified: modified as u64,
        })
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 按飞行编号查询单条发射任务
    ///
    /// # 返回
    /// - Ok(Some(Launch)): 找到记录
    /// - Ok(None): 未找到
    pub fn find_by_flight_number(&self, flight_number: i64) -> RepositoryResult<Option<Launch>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM launches WHERE flight_number = ?1",
            Self::SELECT_COLUMNS
        ))?;

        let launch = stmt
            .query_row(params![flight_number], Self::map_row)
            .optional()?;

        Ok(launch)
    }

    /// 飞行编号是否存在
    pub fn exists(&self, flight_number: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM launches WHERE flight_number = ?1 LIMIT 1",
                params![flight_number],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// 当前最大飞行编号（目录为空时返回 None）
    ///
    /// 供分配器做 max+1 计算。读取-写入两步之间不持有排他锁，
    /// 并发排期撞号时后写者经 upsert 静默覆盖先写者，
    /// 竞争契约见 FlightNumberAllocator。
    pub fn max_flight_number(&self) -> RepositoryResult<Option<i64>> {
        let conn = self.get_conn()?;
        let max: Option<i64> = conn.query_row("SELECT MAX(flight_number) FROM launches", [], |row| {
            row.get(0)
        })?;
        Ok(max)
    }

    /// 分页查询发射任务列表（按 flight_number 升序）
    ///
    /// # 参数
    /// - skip: 跳过的记录数
    /// - limit: 返回上限；<= 0 表示不限制
    pub fn list(&self, skip: i64, limit: i64) -> RepositoryResult<Vec<Launch>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {}
            FROM launches
            ORDER BY flight_number ASC
            LIMIT ?1 OFFSET ?2
            "#,
            Self::SELECT_COLUMNS
        ))?;

        // SQLite 约定 LIMIT -1 为不限制
        let effective_limit = if limit <= 0 { -1 } else { limit };
        let skip = skip.max(0);

        let launches = stmt
            .query_map(params![effective_limit, skip], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(launches)
    }

    /// 目录记录总数
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count)
    }
}

// ==========================================
// 测试
// ==========================================
