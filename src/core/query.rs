// ============================================================================
// XCKit - 翻译状态查询
// ============================================================================
//
// 文件: src/core/query.rs
// 职责: 按语言查询已翻译/未翻译的键
// 边界:
//   - ✅ 单语言未翻译/已翻译查询
//   - ✅ 任意语言未翻译查询
//   - ✅ 键前缀过滤
//   - ❌ 不应包含文件读写
//   - ❌ 不应包含排序和输出格式化
//
// ============================================================================

use crate::models::Catalog;

impl Catalog {
    /// 指定语言下未翻译的键（无序）
    ///
    /// `shouldTranslate` 显式为 false 的键被排除。
    pub fn untranslated_keys(&self, language: &str) -> Vec<String> {
        self.strings
            .iter()
            .filter(|(_, entry)| entry.should_translate())
            .filter(|(_, entry)| !entry.is_translated_in(language))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// 指定语言下已翻译的键（无序）
    ///
    /// 与 `untranslated_keys` 不同，这里不检查 `shouldTranslate`。
    pub fn translated_keys(&self, language: &str) -> Vec<String> {
        self.strings
            .iter()
            .filter(|(_, entry)| entry.is_translated_in(language))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// 至少有一种语言未翻译的键（无序）
    pub fn keys_with_any_untranslated(&self) -> Vec<String> {
        let languages = self.languages();

        self.strings
            .iter()
            .filter(|(_, entry)| entry.should_translate())
            .filter(|(_, entry)| {
                languages
                    .iter()
                    .any(|lang| !entry.is_translated_in(lang))
            })
            .map(|(key, _)| key.clone())
            .collect()
    }
}

/// 按前缀过滤键（区分大小写）；空前缀原样返回
pub fn filter_keys_by_prefix(keys: Vec<String>, prefix: &str) -> Vec<String> {
    if prefix.is_empty() {
        return keys;
    }
    keys.into_iter()
        .filter(|key| key.starts_with(prefix))
        .collect()
}
