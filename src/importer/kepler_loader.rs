// ==========================================
// 航天发射任务追踪系统 - Kepler 参考数据集装载器
// ==========================================
// 职责: 解析 Kepler KOI 数据集 CSV，筛选可居住候选行星入库
// 红线: 不含排期逻辑，所有数据库操作通过 Repository
// ==========================================

use crate::domain::planet::Planet;
use crate::importer::error::ImportError;
use crate::repository::planet_repo::PlanetRepository;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

// 可居住判据（KOI 数据集口径）
const MIN_INSOLATION: f64 = 0.36;
const MAX_INSOLATION: f64 = 1.11;
const MAX_PLANETARY_RADIUS: f64 = 1.6;

/// KOI 数据集行（仅映射筛选所需字段）
#[derive(Debug, Deserialize)]
struct KoiRecord {
    koi_disposition: String,
    koi_insol: Option<f64>,
    koi_prad: Option<f64>,
    kepler_name: Option<String>,
}

impl KoiRecord {
    /// 可居住候选判定: 已确认 + 辐照量在液态水区间 + 类地半径
    fn is_habitable(&self) -> bool {
        self.koi_disposition == "CONFIRMED"
            && self
                .koi_insol
                .is_some_and(|insol| insol > MIN_INSOLATION && insol < MAX_INSOLATION)
            && self.koi_prad.is_some_and(|prad| prad < MAX_PLANETARY_RADIUS)
    }
}

// ==========================================
// KeplerLoader - 参考数据集装载器
// ==========================================

/// Kepler 参考数据集装载器
///
/// 与发射目录摄取同构：逐行筛选后经仓储幂等 upsert，
/// 重复装载不会产生重复记录。
pub struct KeplerLoader {
    planet_repo: Arc<PlanetRepository>,
}

impl KeplerLoader {
    /// 创建新的装载器实例
    ///
    /// # 参数
    /// - planet_repo: 行星参考数据仓储
    pub fn new(planet_repo: Arc<PlanetRepository>) -> Self {
        Self { planet_repo }
    }

    /// 从 CSV 文件装载可居住候选行星
    ///
    /// # 参数
    /// - file_path: KOI 数据集 CSV 路径（'#' 开头的注释行会被跳过）
    ///
    /// # 返回
    /// - Ok(usize): 入库的行星数量
    /// - Err(ImportError): 文件缺失或解析失败
    pub fn load_from_csv<P: AsRef<Path>>(&self, file_path: P) -> Result<usize, ImportError> {
        let path = file_path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .from_path(path)
            .map_err(|e| ImportError::CsvParseError(e.to_string()))?;

        let mut loaded = 0usize;
        for record in reader.deserialize::<KoiRecord>() {
            let record = record.map_err(|e| ImportError::CsvParseError(e.to_string()))?;

            if !record.is_habitable() {
                continue;
            }
            // 已确认的行星必有正式命名；缺名行按数据缺陷跳过
            let Some(kepler_name) = record.kepler_name else {
                continue;
            };

            self.planet_repo
                .upsert_planet(&Planet { kepler_name })
                .map_err(|e| ImportError::CsvParseError(e.to_string()))?;
            loaded += 1;
        }

        info!(count = loaded, "可居住候选行星装载完成");
        Ok(loaded)
    }
}

// ==========================================
// 测试
// ==========================================
