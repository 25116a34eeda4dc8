// ==========================================
// 航天发射任务追踪系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 外部目录请求错误 =====
    #[error("发射目录请求失败: {0}")]
    Transport(String),

    #[error("发射目录响应状态异常: HTTP {0}")]
    BadStatus(u16),

    #[error("发射目录响应解析失败: {0}")]
    DecodeError(String),

    // ===== 参考数据集文件错误 =====
    #[error("参考数据集文件不存在: {0}")]
    FileNotFound(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),
}
