// ============================================================================
// XCKit - CLI List 命令
// ============================================================================
//
// 文件: src/cli/list.rs
// 职责: 列出键及其翻译状态
// 边界:
//   - ✅ 命令行参数定义
//   - ✅ 调用目录查询并排序
//   - ✅ 结果输出（文本/JSON）
//   - ❌ 不应包含翻译状态判断逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use super::{CatalogArgs, OutputFormat};
use crate::models::config::Config;
use crate::ui::display::{collect_key_details, render_json, render_text};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 列出键命令参数
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Only list keys translated in this language (e.g., ja, fr, de)
    #[arg(long = "lang", value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle_list(args: ListArgs, config: &Config) -> Result<()> {
    let (_, catalog) = args.catalog.load(config)?;

    // 空语言代码等同于未指定
    let language = args.language.as_deref().filter(|lang| !lang.is_empty());
    let mut keys = match language {
        Some(lang) => catalog.translated_keys(lang),
        None => catalog.keys(),
    };
    keys.sort();

    let details = collect_key_details(&catalog, &keys);
    if args.format == OutputFormat::Json {
        println!("{}", render_json(&details)?);
        return Ok(());
    }

    if keys.is_empty() {
        match language {
            Some(lang) => Logger::info(tf!("list.no_translated", lang)),
            None => Logger::info(t!("list.no_keys")),
        }
        return Ok(());
    }

    let header = match language {
        Some(lang) => tf!("list.header_lang", lang),
        None => t!("list.header_all"),
    };
    println!("{}", Colors::bold(&header));
    print!("{}", render_text(&details));
    Ok(())
}
