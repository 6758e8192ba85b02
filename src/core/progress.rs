// ============================================================================
// XCKit - 翻译进度统计
// ============================================================================
//
// 文件: src/core/progress.rs
// 职责: 按语言统计翻译完成度
// 边界:
//   - ✅ 各语言已翻译数量与百分比计算
//   - ✅ 状态报告数据结构定义
//   - ❌ 不应包含输出格式化
//   - ❌ 不应包含文件读写
//
// ============================================================================

use serde::Serialize;

use crate::models::Catalog;

/// 单个语言的翻译进度
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProgress {
    pub language: String,
    pub translated: usize,
    pub total: usize,
    pub percentage: f64,
}

/// 整个目录的翻译状态报告
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub source_language: String,
    pub total_keys: usize,
    /// 已排序的语言列表（不含源语言）
    pub languages: Vec<String>,
    pub progress: Vec<LanguageProgress>,
}

impl LanguageProgress {
    fn new(language: String, translated: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            translated as f64 / total as f64 * 100.0
        };
        Self {
            language,
            translated,
            total,
            percentage,
        }
    }
}

impl StatusReport {
    /// 生成状态报告
    ///
    /// 已翻译数 = 键总数 - 未翻译数，因此 `shouldTranslate = false` 的键计入已完成。
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let total_keys = catalog.strings.len();
        let languages = catalog.sorted_languages();

        let progress = languages
            .iter()
            .map(|lang| {
                let untranslated = catalog.untranslated_keys(lang).len();
                LanguageProgress::new(lang.clone(), total_keys - untranslated, total_keys)
            })
            .collect();

        Self {
            source_language: catalog.source_language.clone(),
            total_keys,
            languages,
            progress,
        }
    }
}
