// ============================================================================
// XCKit - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 界面文本的国际化支持
// 边界:
//   - ✅ 翻译表选择和查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 启动时的语言设置
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

use std::sync::OnceLock;

/// 启动时设定一次的界面语言
static LANGUAGE: OnceLock<Language> = OnceLock::new();

/// 支持的界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    EnUs,
    ZhCn,
}

impl Language {
    /// 从配置字符串解析语言
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "en_us" | "en" => Some(Language::EnUs),
            "zh_cn" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::EnUs => en_us::TRANSLATIONS,
            Language::ZhCn => zh_cn::TRANSLATIONS,
        }
    }
}

/// 设置界面语言，只在启动时调用一次
///
/// 无法识别的语言回退到英文并返回 `false`。
pub fn init(language: &str) -> bool {
    let (parsed, known) = match Language::parse(language) {
        Some(lang) => (lang, true),
        None => (Language::default(), false),
    };
    let _ = LANGUAGE.set(parsed);
    known
}

/// 当前界面语言
pub fn current_language() -> Language {
    LANGUAGE.get().copied().unwrap_or_default()
}

/// 在指定语言的翻译表中查找，缺失时回退到英文
pub fn translate(language: Language, key: &str) -> String {
    let lookup = |table: &[(&str, &str)]| {
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    };

    lookup(language.table())
        .or_else(|| lookup(Language::EnUs.table()))
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    translate(current_language(), key)
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带参数翻译的辅助函数
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    let mut search_from = 0;
    for arg in args.iter() {
        // 依次替换 {} 占位符，已替换的内容不再参与匹配
        match result[search_from..].find("{}") {
            Some(offset) => {
                let pos = search_from + offset;
                result.replace_range(pos..pos + 2, arg);
                search_from = pos + arg.len();
            }
            None => break,
        }
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}
