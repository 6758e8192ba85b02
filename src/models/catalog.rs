// ============================================================================
// XCKit - 字符串目录数据模型
// ============================================================================
//
// 文件: src/models/catalog.rs
// 职责: String Catalog 数据结构定义和基础操作
// 边界:
//   - ✅ 目录数据结构定义
//   - ✅ JSON 序列化/反序列化
//   - ✅ 文件加载与保存
//   - ✅ 单条翻译的修改
//   - ❌ 不应包含翻译状态统计逻辑
//   - ❌ 不应包含输出格式化
//   - ❌ 不应包含文件查找逻辑
//
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::models::error::CatalogError;
use crate::utils::constants::TRANSLATED_STATE;

/// .xcstrings 文件的根结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// 源语言代码
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_language: String,
    /// 所有字符串条目（键 -> 条目）
    pub strings: BTreeMap<String, StringEntry>,
    /// 文件格式版本，仅原样回写
    #[serde(default)]
    pub version: String,
}

/// 单个可翻译键
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_state: Option<String>,
    /// 语言代码 -> 本地化内容；null 或缺失时为空表
    #[serde(default, deserialize_with = "null_as_default")]
    pub localizations: BTreeMap<String, Localization>,
    /// 显式为 false 时不参与未翻译统计
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_translate: Option<bool>,
}

/// 某个键在某种语言下的本地化
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    #[serde(default, deserialize_with = "null_as_default")]
    pub string_unit: StringUnit,
}

/// 翻译状态与文本
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringUnit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// 显式 null 与缺失字段一样取默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl Localization {
    /// 创建已翻译的本地化
    pub fn translated(value: impl Into<String>) -> Self {
        Self {
            string_unit: StringUnit {
                state: TRANSLATED_STATE.to_string(),
                value: value.into(),
            },
        }
    }

    /// 只有状态字面量为 "translated" 才算已翻译
    pub fn is_translated(&self) -> bool {
        self.string_unit.state == TRANSLATED_STATE
    }
}

impl StringEntry {
    /// 是否参与翻译完成度统计（缺失或 true 均参与）
    pub fn should_translate(&self) -> bool {
        self.should_translate != Some(false)
    }

    /// 指定语言是否已翻译；没有该语言的条目视为未翻译
    pub fn is_translated_in(&self, language: &str) -> bool {
        self.localizations
            .get(language)
            .is_some_and(Localization::is_translated)
    }
}

impl FromStr for Catalog {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl Catalog {
    /// 从文件加载目录
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| CatalogError::from_read(path.to_path_buf(), source))?;

        let catalog: Catalog = content.parse().map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            path = %path.display(),
            keys = catalog.strings.len(),
            "loaded string catalog"
        );
        Ok(catalog)
    }

    /// 序列化为两空格缩进的 JSON
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(self).map_err(CatalogError::Serialize)
    }

    /// 整体写回文件（非原子写入）
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let content = self.to_json_pretty()?;
        fs::write(path, content).map_err(|source| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "saved string catalog");
        Ok(())
    }

    /// 所有键，无序
    pub fn keys(&self) -> Vec<String> {
        self.strings.keys().cloned().collect()
    }

    /// 所有出现过的语言代码（不含源语言），无序
    pub fn languages(&self) -> HashSet<String> {
        self.strings
            .values()
            .flat_map(|entry| entry.localizations.keys())
            .filter(|lang| **lang != self.source_language)
            .cloned()
            .collect()
    }

    /// 排序后的语言列表，供展示使用
    pub fn sorted_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.languages().into_iter().collect();
        languages.sort();
        languages
    }

    /// 设置某个键在指定语言下的翻译，状态置为 translated
    pub fn set_translation(
        &mut self,
        key: &str,
        language: &str,
        value: &str,
    ) -> Result<(), CatalogError> {
        let entry = self
            .strings
            .get_mut(key)
            .ok_or_else(|| CatalogError::KeyNotFound(key.to_string()))?;

        entry
            .localizations
            .insert(language.to_string(), Localization::translated(value));

        debug!(key, language, "set translation");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "sourceLanguage": "en",
        "strings": {
            "hello": {
                "comment": "Greeting",
                "extractionState": "manual",
                "localizations": {
                    "en": {"stringUnit": {"state": "translated", "value": "Hello"}},
                    "ja": {"stringUnit": {"state": "new", "value": "こんにちは"}}
                }
            },
            "app_name": {
                "shouldTranslate": false,
                "localizations": null
            },
            "goodbye": {
                "localizations": {
                    "fr": {"stringUnit": {"state": "translated", "value": "Au revoir"}}
                }
            }
        },
        "version": "1.0"
    }"#;

    fn sample() -> Catalog {
        SAMPLE.parse().unwrap()
    }

    #[test]
    fn parses_modeled_fields() {
        let catalog = sample();
        assert_eq!(catalog.source_language, "en");
        assert_eq!(catalog.version, "1.0");
        assert_eq!(catalog.strings.len(), 3);

        let hello = &catalog.strings["hello"];
        assert_eq!(hello.comment.as_deref(), Some("Greeting"));
        assert_eq!(hello.extraction_state.as_deref(), Some("manual"));
        assert_eq!(hello.localizations["ja"].string_unit.value, "こんにちは");
        assert_eq!(catalog.strings["app_name"].should_translate, Some(false));
    }

    #[test]
    fn null_and_missing_localizations_become_empty() {
        let catalog: Catalog = r#"{"strings": {"a": {"localizations": null}, "b": {}}}"#
            .parse()
            .unwrap();
        assert!(catalog.strings["a"].localizations.is_empty());
        assert!(catalog.strings["b"].localizations.is_empty());

        let json = catalog.to_json_pretty().unwrap();
        assert!(!json.contains("null"));
        assert!(json.contains("\"localizations\": {}"));
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let catalog: Catalog = r#"{
            "sourceLanguage": null,
            "strings": {
                "k": {"localizations": {
                    "ja": {"stringUnit": {"state": null, "value": "x"}},
                    "fr": {"stringUnit": {"state": "translated", "value": null}},
                    "de": {"stringUnit": null}
                }}
            }
        }"#
        .parse()
        .unwrap();

        assert_eq!(catalog.source_language, "");
        let entry = &catalog.strings["k"];
        assert_eq!(entry.localizations["ja"].string_unit.state, "");
        assert_eq!(entry.localizations["ja"].string_unit.value, "x");
        assert!(entry.is_translated_in("fr"));
        assert_eq!(entry.localizations["fr"].string_unit.value, "");
        assert_eq!(entry.localizations["de"].string_unit, StringUnit::default());
        assert!(!entry.is_translated_in("ja"));
        assert!(!entry.is_translated_in("de"));
    }

    #[test]
    fn missing_strings_is_a_parse_error() {
        assert!(r#"{"sourceLanguage": "en"}"#.parse::<Catalog>().is_err());
    }

    #[test]
    fn localization_without_string_unit_is_not_translated() {
        let catalog: Catalog = r#"{
            "strings": {"items": {"localizations": {"de": {"variations": {}}}}}
        }"#
        .parse()
        .unwrap();
        assert!(!catalog.strings["items"].is_translated_in("de"));
    }

    #[test]
    fn keys_returns_every_key() {
        let mut keys = sample().keys();
        keys.sort();
        assert_eq!(keys, vec!["app_name", "goodbye", "hello"]);
    }

    #[test]
    fn languages_exclude_source_language() {
        let languages = sample().languages();
        assert_eq!(languages.len(), 2);
        assert!(languages.contains("ja"));
        assert!(languages.contains("fr"));
        assert!(!languages.contains("en"));
        assert_eq!(sample().sorted_languages(), vec!["fr", "ja"]);
    }

    #[test]
    fn set_translation_overwrites_and_marks_translated() {
        let mut catalog = sample();
        catalog.set_translation("hello", "ja", "やあ").unwrap();

        let ja = &catalog.strings["hello"].localizations["ja"];
        assert_eq!(ja.string_unit.state, "translated");
        assert_eq!(ja.string_unit.value, "やあ");
    }

    #[test]
    fn set_translation_creates_new_language() {
        let mut catalog = sample();
        catalog.set_translation("app_name", "ko", "앱").unwrap();
        assert!(catalog.strings["app_name"].is_translated_in("ko"));
        assert!(catalog.languages().contains("ko"));
    }

    #[test]
    fn set_translation_is_idempotent() {
        let mut once = sample();
        once.set_translation("goodbye", "ja", "さようなら").unwrap();
        let mut twice = once.clone();
        twice.set_translation("goodbye", "ja", "さようなら").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn set_translation_on_missing_key_fails() {
        let mut catalog = sample();
        let err = catalog.set_translation("missing_key", "ja", "x").unwrap_err();
        assert!(matches!(err, CatalogError::KeyNotFound(ref key) if key == "missing_key"));
        assert_eq!(err.to_string(), "key 'missing_key' not found");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Localizable.xcstrings");

        let original = sample();
        original.save_to_file(&path).unwrap();
        let reloaded = Catalog::load(&path).unwrap();
        assert_eq!(original, reloaded);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\n  \"sourceLanguage\": \"en\""));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = Catalog::load(dir.path().join("nope.xcstrings")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
        assert!(err.to_string().starts_with("file not found:"));
    }

    #[test]
    fn load_reports_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.xcstrings");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Catalog::load(&path).unwrap_err(),
            CatalogError::Parse { .. }
        ));
    }

    #[test]
    fn save_reports_write_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.xcstrings");
        assert!(matches!(
            sample().save_to_file(&path).unwrap_err(),
            CatalogError::Write { .. }
        ));
    }
}
