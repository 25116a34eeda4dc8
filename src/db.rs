// ==========================================
// 航天发射任务追踪系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 集中建表语句，保证所有入口使用同一份 schema
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 初始化数据库 schema（幂等，可重复执行）
///
/// 表结构：
/// - launches: 发射任务主表，flight_number 为唯一外部标识
/// - planets: 可居住行星参考数据集（排期目标校验）
/// - catalog_meta: 目录装载标记（与任何具体发射记录解耦）
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS launches (
            flight_number   INTEGER PRIMARY KEY,
            mission         TEXT NOT NULL,
            rocket          TEXT NOT NULL,
            launch_date     TEXT NOT NULL,
            target          TEXT,
            customers_json  TEXT NOT NULL,
            upcoming        INTEGER NOT NULL,
            success         INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS planets (
            kepler_name     TEXT PRIMARY KEY
        );

        CREATE TABLE IF NOT EXISTS catalog_meta (
            marker          TEXT PRIMARY KEY,
            applied_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}

/// 打开连接、应用 PRAGMA 并初始化 schema（应用启动入口）
pub fn open_and_init(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = open_sqlite_connection(db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}
