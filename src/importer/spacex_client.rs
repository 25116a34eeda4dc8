// ==========================================
// 航天发射任务追踪系统 - 外部发射目录客户端
// ==========================================
// 职责: 调用 SpaceX v4 query 端点，取回完整历史发射目录
// 约束: 单次请求取全量（不分页），携带 rocket/payloads 两个关联子资源
// ==========================================

use crate::importer::error::ImportError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// 默认的外部目录查询端点
pub const SPACEX_API_URL: &str = "https://api.spacexdata.com/v4/launches/query";

// ==========================================
// 外部文档形状
// ==========================================

/// query 端点返回的分页外壳（pagination=false 时 docs 即全量）
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub docs: Vec<ExternalLaunchDoc>,
}

/// 外部发射文档（已按 populate 选项联结 rocket.name / payloads.customers）
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalLaunchDoc {
    pub flight_number: i64,
    /// 外部任务名
    pub name: String,
    pub rocket: ExternalRocket,
    #[serde(default)]
    pub payloads: Vec<ExternalPayload>,
    /// 当地发射时间（RFC 3339，含时区偏移）
    pub date_local: DateTime<FixedOffset>,
    pub upcoming: bool,
    /// 未发射的任务此字段为 null
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalRocket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalPayload {
    #[serde(default)]
    pub customers: Vec<String>,
}

// ==========================================
// LaunchProvider Trait - 发射目录供应接缝
// ==========================================
// 用途: 摄取引擎获取外部目录的接口
// 实现者: SpaceXLaunchClient（测试中可用内存实现替换）

/// 外部发射目录供应方
#[async_trait]
pub trait LaunchProvider: Send + Sync {
    /// 取回完整目录
    ///
    /// # 返回
    /// - Ok(Vec<ExternalLaunchDoc>): 未分页的全量文档
    /// - Err(ImportError): 传输失败、非 2xx 状态或响应解析失败
    async fn fetch_catalog(&self) -> Result<Vec<ExternalLaunchDoc>, ImportError>;
}

// ==========================================
// SpaceXLaunchClient - reqwest 实现
// ==========================================

/// SpaceX v4 query 端点客户端
///
/// 无超时与重试策略：网络故障即刻作为致命摄取错误上浮，
/// 重试与否由启动监督方决定。
pub struct SpaceXLaunchClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SpaceXLaunchClient {
    /// 创建指向默认端点的客户端
    pub fn new() -> Self {
        Self::with_endpoint(SPACEX_API_URL)
    }

    /// 创建指向指定端点的客户端（配置覆写/测试）
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            http: reqwest::Client::new(),
        }
    }
}

impl Default for SpaceXLaunchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LaunchProvider for SpaceXLaunchClient {
    async fn fetch_catalog(&self) -> Result<Vec<ExternalLaunchDoc>, ImportError> {
        debug!(endpoint = %self.endpoint, "请求外部发射目录");

        let body = json!({
            "query": {},
            "options": {
                "pagination": false,
                "populate": [
                    {
                        "path": "rocket",
                        "select": { "name": 1 }
                    },
                    {
                        "path": "payloads",
                        "select": { "customers": 1 }
                    }
                ]
            }
        });

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImportError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImportError::BadStatus(response.status().as_u16()));
        }

        let page: QueryResponse = response
            .json()
            .await
            .map_err(|e| ImportError::DecodeError(e.to_string()))?;

        debug!(count = page.docs.len(), "外部发射目录取回完成");
        Ok(page.docs)
    }
}

// ==========================================
// 测试
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_doc_deserialization() {
        // success 为 null 的未发射任务、payloads 多条目
        let raw = r#"
        {
            "docs": [
                {
                    "flight_number": 187,
                    "name": "Starlink 4-36",
                    "rocket": { "name": "Falcon 9" },
                    "payloads": [
                        { "customers": ["SpaceX"] },
                        { "customers": ["NASA", "NRO"] }
                    ],
                    "date_local": "2022-09-24T19:32:10-04:00",
                    "upcoming": true,
                    "success": null
                }
            ]
        }
        "#;

        let page: QueryResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(page.docs.len(), 1);

        let doc = &page.docs[0];
        assert_eq!(doc.flight_number, 187);
        assert_eq!(doc.rocket.name, "Falcon 9");
        assert_eq!(doc.payloads.len(), 2);
        assert!(doc.upcoming);
        assert_eq!(doc.success, None);
    }

    #[test]
    fn test_external_doc_missing_payloads_defaults_empty() {
        let raw = r#"
        {
            "flight_number": 1,
            "name": "FalconSat",
            "rocket": { "name": "Falcon 1" },
            "date_local": "2006-03-25T10:30:00+12:00",
            "upcoming": false,
            "success": false
        }
        "#;

        let doc: ExternalLaunchDoc = serde_json::from_str(raw).unwrap();
        assert!(doc.payloads.is_empty());
    }
}
