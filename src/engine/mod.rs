// ==========================================
// 航天发射任务追踪系统 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎,不拼 SQL
// 红线: Engine 不拼 SQL, 落库一律经由 Repository
// ==========================================

pub mod allocator;
pub mod catalog_sync;
pub mod error;
pub mod lifecycle;
pub mod scheduler;

// 重导出核心引擎
pub use allocator::FlightNumberAllocator;
pub use catalog_sync::LaunchIngestor;
pub use error::{EngineError, EngineResult};
pub use lifecycle::LaunchLifecycle;
pub use scheduler::LaunchScheduler;
