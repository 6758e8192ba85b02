// ============================================================================
// XCKit - 键详情显示
// ============================================================================
//
// 文件: src/ui/display.rs
// 职责: 按语言展示每个键的翻译详情
// 边界:
//   - ✅ 键详情数据结构（文本/JSON 共用）
//   - ✅ 文本格式渲染
//   - ✅ JSON 格式渲染
//   - ❌ 不应包含翻译状态判断逻辑
//   - ❌ 不应包含键的排序和过滤
//
// ============================================================================

use anyhow::Result;
use serde::Serialize;

use crate::models::Catalog;
use crate::t;

/// 单个键的展示数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyDetails<'a> {
    pub key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'a str>,
    pub localizations: Vec<LanguageDetail<'a>>,
}

/// 某个语言下的展示数据；缺失时 state/value 均为空
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageDetail<'a> {
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
}

/// 收集键详情，语言按字母顺序，键保持传入顺序
pub fn collect_key_details<'a>(catalog: &'a Catalog, keys: &[String]) -> Vec<KeyDetails<'a>> {
    let languages = catalog.sorted_languages();

    keys.iter()
        .filter_map(|key| catalog.strings.get_key_value(key))
        .map(|(key, entry)| KeyDetails {
            key,
            comment: entry.comment.as_deref(),
            localizations: languages
                .iter()
                .map(move |lang| {
                    let unit = entry.localizations.get(lang).map(|l| &l.string_unit);
                    LanguageDetail {
                        language: lang.clone(),
                        state: unit.map(|u| u.state.as_str()),
                        value: unit.map(|u| u.value.as_str()),
                    }
                })
                .collect(),
        })
        .collect()
}

/// 渲染为文本
pub fn render_text(details: &[KeyDetails<'_>]) -> String {
    let missing = t!("display.missing");
    let empty = t!("display.empty");
    let mut out = String::new();

    for detail in details {
        out.push_str(&format!("\n{}:\n", detail.key));
        for loc in &detail.localizations {
            match (loc.state, loc.value) {
                (Some(state), Some(value)) => {
                    let value = if value.is_empty() { empty.as_str() } else { value };
                    out.push_str(&format!("  {}: {} - {}\n", loc.language, state, value));
                }
                _ => out.push_str(&format!("  {}: {}\n", loc.language, missing)),
            }
        }
    }
    out
}

/// 渲染为 JSON
pub fn render_json(details: &[KeyDetails<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(details)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Catalog {
        r#"{
            "sourceLanguage": "en",
            "strings": {
                "farewell": {
                    "comment": "Shown on exit",
                    "localizations": {
                        "en": {"stringUnit": {"state": "translated", "value": "Goodbye"}},
                        "ja": {"stringUnit": {"state": "new", "value": ""}}
                    }
                },
                "greeting": {
                    "localizations": {
                        "en": {"stringUnit": {"state": "translated", "value": "Hello"}},
                        "es": {"stringUnit": {"state": "translated", "value": "Hola"}},
                        "ja": {"stringUnit": {"state": "translated", "value": "こんにちは"}}
                    }
                }
            }
        }"#
        .parse()
        .unwrap()
    }

    #[test]
    fn collects_languages_in_sorted_order_with_missing_marked() {
        let catalog = fixture();
        let keys = vec!["farewell".to_string()];
        let details = collect_key_details(&catalog, &keys);

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].comment, Some("Shown on exit"));
        let langs: Vec<&str> = details[0]
            .localizations
            .iter()
            .map(|l| l.language.as_str())
            .collect();
        assert_eq!(langs, vec!["es", "ja"]);
        assert_eq!(details[0].localizations[0].state, None);
        assert_eq!(details[0].localizations[1].state, Some("new"));
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let catalog = fixture();
        let keys = vec!["nope".to_string(), "greeting".to_string()];
        let details = collect_key_details(&catalog, &keys);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].key, "greeting");
    }

    #[test]
    fn text_rendering_matches_layout() {
        let catalog = fixture();
        let keys = vec!["farewell".to_string(), "greeting".to_string()];
        let text = render_text(&collect_key_details(&catalog, &keys));

        assert_eq!(
            text,
            "\nfarewell:\n  es: missing\n  ja: new - (empty)\n\
             \ngreeting:\n  es: translated - Hola\n  ja: translated - こんにちは\n"
        );
    }

    #[test]
    fn json_rendering_omits_missing_fields() {
        let catalog = fixture();
        let keys = vec!["farewell".to_string()];
        let json = render_json(&collect_key_details(&catalog, &keys)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["key"], "farewell");
        assert_eq!(value[0]["localizations"][0]["language"], "es");
        assert!(value[0]["localizations"][0].get("state").is_none());
        assert_eq!(value[0]["localizations"][1]["value"], "");
    }
}
