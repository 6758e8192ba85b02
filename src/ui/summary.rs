// ============================================================================
// XCKit - 翻译状态汇总显示
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 渲染 status 命令的汇总输出
// 边界:
//   - ✅ 状态报告文本渲染
//   - ✅ 状态报告 JSON 渲染
//   - ✅ 进度条绘制
//   - ❌ 不应包含进度计算逻辑
//   - ❌ 不应包含文件读写
//
// ============================================================================

use anyhow::Result;

use crate::core::StatusReport;
use crate::utils::constants::{icons, progress_chars};
use crate::{t, tf};

/// 渲染状态报告文本
///
/// `decorated` 为 false 时省略图标和进度条，每行保持可被脚本解析的纯文本。
pub fn render_status_text(report: &StatusReport, decorated: bool) -> String {
    let title = t!("status.title");
    let progress_title = t!("status.progress_title");
    let languages = if report.languages.is_empty() {
        t!("status.no_languages")
    } else {
        report.languages.join(", ")
    };

    let mut lines = vec![
        title.clone(),
        "=".repeat(title.chars().count()),
        tf!("status.source_language", report.source_language),
        tf!("status.total_keys", report.total_keys),
        tf!("status.languages", languages),
        String::new(),
    ];
    if decorated {
        lines.push(format!("{} {}", icons::LANGUAGE, progress_title));
        lines.push("-".repeat(progress_title.chars().count() + 2));
    } else {
        lines.push(progress_title.clone());
        lines.push("-".repeat(progress_title.chars().count()));
    }

    for row in &report.progress {
        let text = tf!(
            "status.progress_row",
            format!("{:<6}", row.language),
            format!("{:>3}", row.translated),
            row.total,
            format!("{:.1}", row.percentage)
        );
        if decorated {
            lines.push(format!("{} {}", text, progress_bar(row.percentage)));
        } else {
            lines.push(text);
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// 渲染状态报告 JSON
pub fn render_status_json(report: &StatusReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// 绘制固定宽度的进度条
pub fn progress_bar(percentage: f64) -> String {
    let ratio = (percentage / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * progress_chars::WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        progress_chars::FILLED.repeat(filled),
        progress_chars::EMPTY.repeat(progress_chars::WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::progress::LanguageProgress;

    fn report() -> StatusReport {
        StatusReport {
            source_language: "en".to_string(),
            total_keys: 2,
            languages: vec!["fr".to_string(), "ja".to_string()],
            progress: vec![
                LanguageProgress {
                    language: "fr".to_string(),
                    translated: 2,
                    total: 2,
                    percentage: 100.0,
                },
                LanguageProgress {
                    language: "ja".to_string(),
                    translated: 1,
                    total: 2,
                    percentage: 50.0,
                },
            ],
        }
    }

    #[test]
    fn text_contains_header_and_rows() {
        let text = render_status_text(&report(), true);
        assert!(text.starts_with("Translation Status\n==================\n"));
        assert!(text.contains("Source Language: en\n"));
        assert!(text.contains("Total Keys: 2\n"));
        assert!(text.contains("Languages: fr, ja\n"));
        assert!(text.contains("Progress by Language:"));
        assert!(text.contains("fr    :   2/2 translated (100.0%)"));
        assert!(text.contains("ja    :   1/2 translated (50.0%)"));
    }

    #[test]
    fn text_without_languages() {
        let mut empty = report();
        empty.languages.clear();
        empty.progress.clear();
        assert!(render_status_text(&empty, false).contains("Languages: (none)"));
    }

    #[test]
    fn plain_text_rows_have_no_decoration() {
        let text = render_status_text(&report(), false);
        assert!(text.contains("\nProgress by Language:\n---------------------\n"));
        assert!(!text.contains(icons::LANGUAGE));
        assert!(!text.contains(progress_chars::FILLED));
        assert!(text.ends_with("fr    :   2/2 translated (100.0%)\nja    :   1/2 translated (50.0%)\n"));
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), progress_chars::EMPTY.repeat(progress_chars::WIDTH));
        assert_eq!(
            progress_bar(100.0),
            progress_chars::FILLED.repeat(progress_chars::WIDTH)
        );
        assert_eq!(progress_bar(50.0).chars().count(), progress_chars::WIDTH);
        assert_eq!(progress_bar(250.0), progress_bar(100.0));
    }

    #[test]
    fn json_has_progress_rows() {
        let value: serde_json::Value =
            serde_json::from_str(&render_status_json(&report()).unwrap()).unwrap();
        assert_eq!(value["progress"][1]["language"], "ja");
        assert_eq!(value["progress"][1]["translated"], 1);
    }
}
