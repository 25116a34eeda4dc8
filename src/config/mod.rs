// ==========================================
// 航天发射任务追踪系统 - 配置层
// ==========================================
// 职责: 环境变量驱动的运行配置
// ==========================================

use crate::importer::spacex_client::SPACEX_API_URL;
use std::path::PathBuf;

/// 运行配置
///
/// # 环境变量
/// - LAUNCH_TRACKER_DB_PATH: 数据库文件路径（缺省用用户数据目录）
/// - LAUNCH_TRACKER_SPACEX_URL: 外部目录查询端点覆写
/// - LAUNCH_TRACKER_KEPLER_CSV: Kepler 参考数据集 CSV 路径
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub spacex_api_url: String,
    pub kepler_csv_path: String,
}

impl AppConfig {
    /// 从环境变量装配配置
    pub fn from_env() -> Self {
        Self {
            db_path: env_or("LAUNCH_TRACKER_DB_PATH", &get_default_db_path()),
            spacex_api_url: env_or("LAUNCH_TRACKER_SPACEX_URL", SPACEX_API_URL),
            kepler_csv_path: env_or("LAUNCH_TRACKER_KEPLER_CSV", "data/kepler_exoplanets.csv"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

/// 获取默认数据库路径
///
/// # 返回
/// - 用户数据目录/launch-tracker/launch_tracker.db（目录自动创建）
/// - 拿不到用户数据目录时回退为工作目录下的 ./launch_tracker.db
pub fn get_default_db_path() -> String {
    let mut path = PathBuf::from("./launch_tracker.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("launch-tracker");
        // 确保目录存在
        std::fs::create_dir_all(&dir).ok();
        path = dir.join("launch_tracker.db");
    }

    path.to_string_lossy().to_string()
}
