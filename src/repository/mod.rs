// ==========================================
// 航天发射任务追踪系统 - 数据仓储层
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 红线: Repository 不含业务逻辑
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod catalog_meta_repo;
pub mod error;
pub mod launch_repo;
pub mod planet_repo;

// 重导出核心仓储
pub use catalog_meta_repo::CatalogMetaRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use launch_repo::LaunchRepository;
pub use planet_repo::{PlanetRepository, TargetCatalog};
