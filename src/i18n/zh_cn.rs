// ============================================================================
// XCKit - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 列表相关
    ("list.no_keys", "未找到任何键"),
    ("list.no_translated", "语言 '{}' 下没有已翻译的键"),
    ("list.header_all", "所有键及其翻译状态:"),
    ("list.header_lang", "语言 '{}' 下已翻译的键:"),
    // 未翻译相关
    (
        "untranslated.none_prefix_lang",
        "未找到前缀为 '{}'、语言为 '{}' 的未翻译键",
    ),
    ("untranslated.none_prefix", "未找到前缀为 '{}' 的未翻译键"),
    ("untranslated.none_lang", "语言 '{}' 的所有键均已翻译"),
    ("untranslated.none_all", "所有键在所有语言下均已翻译"),
    (
        "untranslated.header_prefix_lang",
        "前缀为 '{}'、语言为 '{}' 的未翻译键:",
    ),
    ("untranslated.header_prefix", "前缀为 '{}' 的未翻译键:"),
    ("untranslated.header_lang", "语言 '{}' 下的未翻译键:"),
    ("untranslated.header_all", "存在未翻译内容的键:"),
    // 设置相关
    ("set.success", "已设置键 '{}' 在语言 '{}' 下的翻译"),
    // 状态相关
    ("status.title", "翻译状态"),
    ("status.source_language", "源语言: {}"),
    ("status.total_keys", "键总数: {}"),
    ("status.languages", "语言: {}"),
    ("status.no_languages", "(无)"),
    ("status.progress_title", "各语言进度:"),
    ("status.progress_row", "{}: {}/{} 已翻译 ({}%)"),
    // 键详情
    ("display.missing", "缺失"),
    ("display.empty", "(空)"),
    // 配置相关
    (
        "config.unknown_language",
        "无法识别的界面语言 '{}'，已回退到 en_us",
    ),
];
