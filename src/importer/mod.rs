// ==========================================
// 航天发射任务追踪系统 - 导入层
// ==========================================
// 职责: 外部数据获取（HTTP 目录查询 / 参考数据集 CSV 解析）
// 红线: 不含业务规则，落库一律经由 Repository
// ==========================================

pub mod error;
pub mod kepler_loader;
pub mod spacex_client;

// 重导出核心类型
pub use error::ImportError;
pub use kepler_loader::KeplerLoader;
pub use spacex_client::{
    ExternalLaunchDoc, ExternalPayload, ExternalRocket, LaunchProvider, QueryResponse,
    SpaceXLaunchClient, SPACEX_API_URL,
};
