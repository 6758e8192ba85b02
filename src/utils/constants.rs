// ============================================================================
// XCKit - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 文件格式相关常量
//   - ✅ 输出图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "XCKIT";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "xckit.toml";

/// 未注入版本号时使用的版本
pub const DEFAULT_VERSION: &str = "dev";

/// String Catalog 文件扩展名
pub const CATALOG_EXTENSION: &str = ".xcstrings";

/// 唯一表示"已翻译"的状态值
pub const TRANSLATED_STATE: &str = "translated";

/// 输出图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 语言图标
    pub const LANGUAGE: &str = "◆";
}

/// 进度条字符
pub mod progress_chars {
    /// 已完成块
    pub const FILLED: &str = "█";
    /// 未完成块
    pub const EMPTY: &str = "░";
    /// 进度条宽度
    pub const WIDTH: usize = 20;
}
