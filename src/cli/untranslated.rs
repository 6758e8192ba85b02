// ============================================================================
// XCKit - CLI Untranslated 命令
// ============================================================================
//
// 文件: src/cli/untranslated.rs
// 职责: 列出未翻译的键
// 边界:
//   - ✅ 命令行参数定义
//   - ✅ 按语言/前缀选择未翻译键
//   - ✅ 结果输出（文本/JSON）
//   - ❌ 不应包含翻译状态判断逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use super::{CatalogArgs, OutputFormat};
use crate::core::filter_keys_by_prefix;
use crate::models::config::Config;
use crate::ui::display::{collect_key_details, render_json, render_text};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 未翻译键命令参数
#[derive(Debug, Args)]
pub struct UntranslatedArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Target language code (e.g., ja, fr, de) - optional
    #[arg(long = "lang", value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Filter keys by prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle_untranslated(args: UntranslatedArgs, config: &Config) -> Result<()> {
    let (_, catalog) = args.catalog.load(config)?;

    // 空字符串的语言或前缀等同于未指定
    let prefix = args.prefix.as_deref().filter(|p| !p.is_empty());
    let language = args.language.as_deref().filter(|lang| !lang.is_empty());

    let keys = match language {
        Some(lang) => catalog.untranslated_keys(lang),
        None => catalog.keys_with_any_untranslated(),
    };
    let mut keys = filter_keys_by_prefix(keys, prefix.unwrap_or_default());
    keys.sort();

    let details = collect_key_details(&catalog, &keys);
    if args.format == OutputFormat::Json {
        println!("{}", render_json(&details)?);
        return Ok(());
    }

    if keys.is_empty() {
        Logger::info(empty_message(prefix, language));
        return Ok(());
    }

    println!("{}", Colors::bold(&header(prefix, language)));
    print!("{}", render_text(&details));
    Ok(())
}

fn empty_message(prefix: Option<&str>, language: Option<&str>) -> String {
    match (prefix, language) {
        (Some(prefix), Some(lang)) => tf!("untranslated.none_prefix_lang", prefix, lang),
        (Some(prefix), None) => tf!("untranslated.none_prefix", prefix),
        (None, Some(lang)) => tf!("untranslated.none_lang", lang),
        (None, None) => t!("untranslated.none_all"),
    }
}

fn header(prefix: Option<&str>, language: Option<&str>) -> String {
    match (prefix, language) {
        (Some(prefix), Some(lang)) => tf!("untranslated.header_prefix_lang", prefix, lang),
        (Some(prefix), None) => tf!("untranslated.header_prefix", prefix),
        (None, Some(lang)) => tf!("untranslated.header_lang", lang),
        (None, None) => t!("untranslated.header_all"),
    }
}
