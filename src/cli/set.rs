// ============================================================================
// XCKit - CLI Set 命令
// ============================================================================
//
// 文件: src/cli/set.rs
// 职责: 设置单个键在指定语言下的翻译
// 边界:
//   - ✅ 命令行参数定义和必填校验
//   - ✅ 加载、修改、写回目录文件
//   - ❌ 不应包含 JSON 结构处理
//
// ============================================================================

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Args;

use super::CatalogArgs;
use crate::models::config::Config;
use crate::tf;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;

/// 设置翻译命令参数
#[derive(Debug, Args)]
pub struct SetArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Target language code (e.g., ja, fr, de)
    #[arg(long = "lang", value_name = "LANGUAGE", value_parser = NonEmptyStringValueParser::new())]
    pub language: String,

    /// Key to translate
    pub key: String,

    /// Translated text
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

pub fn handle_set(args: SetArgs, config: &Config) -> Result<()> {
    let (path, mut catalog) = args.catalog.load(config)?;

    catalog.set_translation(&args.key, &args.language, &args.value)?;
    catalog.save_to_file(&path)?;

    Logger::success(format!(
        "{} {}",
        icons::SUCCESS,
        tf!("set.success", args.key, args.language)
    ));
    Ok(())
}
