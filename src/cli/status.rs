// ============================================================================
// XCKit - CLI Status 命令
// ============================================================================
//
// 文件: src/cli/status.rs
// 职责: 显示各语言翻译进度汇总
// 边界:
//   - ✅ 命令行参数定义
//   - ✅ 调用进度统计并输出
//   - ❌ 不应包含进度计算逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use super::{CatalogArgs, OutputFormat};
use crate::core::StatusReport;
use crate::models::config::Config;
use crate::ui::summary::{render_status_json, render_status_text};
use crate::utils::colors::Colors;

/// 状态命令参数
#[derive(Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle_status(args: StatusArgs, config: &Config) -> Result<()> {
    let (_, catalog) = args.catalog.load(config)?;
    let report = StatusReport::from_catalog(&catalog);

    match args.format {
        OutputFormat::Json => println!("{}", render_status_json(&report)?),
        OutputFormat::Text => {
            print!("{}", render_status_text(&report, Colors::stdout_is_terminal()))
        }
    }
    Ok(())
}
