// ============================================================================
// XCKit - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 解析命令行、执行命令并映射退出码
// 边界:
//   - ✅ 模块声明
//   - ✅ 错误输出与退出码（0 成功，1 运行失败，2 用法错误由 clap 处理）
//   - ❌ 不应包含命令实现逻辑
//
// ============================================================================

mod cli;
mod core;
mod i18n;
mod models;
mod ui;
mod utils;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::{run_cli, Cli};
use crate::utils::logger::Logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Logger::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
