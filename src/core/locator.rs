// ============================================================================
// XCKit - 目录文件定位
// ============================================================================
//
// 文件: src/core/locator.rs
// 职责: 确定命令要操作的 .xcstrings 文件
// 边界:
//   - ✅ 命令行参数、配置文件、目录扫描三级解析
//   - ✅ 当前目录下 .xcstrings 文件查找
//   - ❌ 不应包含文件内容解析
//   - ❌ 不应包含 CLI 参数定义
//
// ============================================================================

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::config::Config;
use crate::models::error::CatalogError;
use crate::utils::constants::CATALOG_EXTENSION;

/// 目录文件定位器
pub struct CatalogLocator {
    search_dir: PathBuf,
}

impl CatalogLocator {
    /// 创建在指定目录下查找的定位器
    pub fn new(search_dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: search_dir.into(),
        }
    }

    /// 在当前工作目录下查找的定位器
    pub fn from_current_dir() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// 解析目标文件：命令行 > 配置文件 > 目录扫描
    ///
    /// 只负责确定路径，文件是否存在由加载时判断。
    pub fn resolve(
        &self,
        explicit: Option<&Path>,
        config: &Config,
    ) -> Result<PathBuf, CatalogError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "using catalog from --file");
            return Ok(path.to_path_buf());
        }

        if let Some(path) = &config.catalog.file {
            debug!(path = %path.display(), "using catalog from config");
            return Ok(path.clone());
        }

        let found = self.find_catalog().ok_or(CatalogError::NoCatalogFound)?;
        debug!(path = %found.display(), "discovered catalog");
        Ok(found)
    }

    /// 按文件名顺序返回搜索目录下第一个 .xcstrings 文件
    pub fn find_catalog(&self) -> Option<PathBuf> {
        let pattern = format!(
            "{}/*{}",
            glob::Pattern::escape(&self.search_dir.to_string_lossy()),
            CATALOG_EXTENSION
        );

        let mut candidates: Vec<PathBuf> = glob::glob(&pattern)
            .ok()?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.len() > CATALOG_EXTENSION.len())
            })
            .collect();

        candidates.sort();
        candidates.into_iter().next()
    }
}
