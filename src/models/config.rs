// ============================================================================
// XCKit - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 运行时参数合并
//   - ❌ 不应包含配置应用逻辑（日志、颜色初始化）
//   - ❌ 不应包含 CLI 参数解析
//   - ❌ 不应包含字符串目录操作
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::utils::constants::{CONFIG_FILE_NAME, DEFAULT_VERSION};

/// XCKit 配置文件结构
///
/// 启动时加载一次并与命令行参数合并，之后以只读值的形式传给各命令。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 目录文件配置
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
    /// 构建版本号，启动时注入
    #[serde(skip, default = "Config::default_version")]
    pub version: String,
}

/// 目录文件配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 默认的 .xcstrings 文件路径
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否输出调试日志
    #[serde(default = "Config::default_verbose")]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
}

/// 配置默认值 trait
pub trait ConfigDefaults {
    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认语言
    fn default_language() -> String {
        "en_us".to_string()
    }

    /// 获取默认版本号
    fn default_version() -> String {
        DEFAULT_VERSION.to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 从工作目录加载配置文件，不存在时使用默认配置
    pub fn load_from_dir(dir: &Path) -> anyhow::Result<Self> {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }

    /// 加载配置文件
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("failed to parse {}: {}", config_path.display(), e)
        })?;
        debug!(path = %config_path.display(), "loaded config file");
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(mut self, args: RuntimeArgs) -> Self {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
        self
    }

    /// 注入构建版本号
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
            version: Self::default_version(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
