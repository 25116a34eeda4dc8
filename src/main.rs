// ==========================================
// 航天发射任务追踪系统 - 启动入口
// ==========================================
// 启动序列: 打开存储 → 装载行星参考数据 → 门控目录同步
// 约束: 摄取失败即启动失败，绝不带着半装载目录对外服务
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use launch_tracker::app::AppState;
use launch_tracker::config::AppConfig;
use launch_tracker::engine::catalog_sync::LaunchIngestor;
use launch_tracker::importer::kepler_loader::KeplerLoader;
use launch_tracker::importer::spacex_client::SpaceXLaunchClient;
use launch_tracker::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", launch_tracker::APP_NAME, launch_tracker::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env();
    tracing::info!(db_path = %config.db_path, "使用数据库");

    // 打开存储并装配仓储/引擎
    let state = AppState::new(&config.db_path).context("无法初始化应用状态")?;

    // 装载行星参考数据（排期目标校验依赖）
    let kepler_loader = KeplerLoader::new(state.planet_repo.clone());
    kepler_loader
        .load_from_csv(&config.kepler_csv_path)
        .with_context(|| format!("行星参考数据装载失败: {}", config.kepler_csv_path))?;

    // 门控目录同步: 已装载则跳过，否则全量摄取后落标记
    let provider = Arc::new(SpaceXLaunchClient::with_endpoint(&config.spacex_api_url));
    let ingestor = LaunchIngestor::new(
        provider,
        state.launch_repo.clone(),
        state.meta_repo.clone(),
    );
    ingestor.load_catalog().await.context("发射目录摄取失败")?;

    let launches = state.launch_repo.count()?;
    let planets = state.planet_repo.count()?;
    tracing::info!(launches, planets, "目录就绪");

    Ok(())
}
