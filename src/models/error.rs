// ============================================================================
// XCKit - 错误类型
// ============================================================================
//
// 文件: src/models/error.rs
// 职责: 字符串目录读写与修改的错误定义
// 边界:
//   - ✅ 领域错误枚举定义
//   - ✅ 错误信息格式化
//   - ❌ 不应包含错误恢复逻辑
//   - ❌ 不应包含输出和退出码处理
//
// ============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 字符串目录操作错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse JSON: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("key '{0}' not found")]
    KeyNotFound(String),

    #[error("failed to write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to marshal JSON")]
    Serialize(#[source] serde_json::Error),

    #[error("no .xcstrings file found. Use -f flag to specify the file path")]
    NoCatalogFound,
}

impl CatalogError {
    /// 由读取失败构造错误，区分文件不存在
    pub fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound(path)
        } else {
            CatalogError::Read { path, source }
        }
    }
}
