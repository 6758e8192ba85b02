// ============================================================================
// XCKit - CLI Version 命令
// ============================================================================
//
// 文件: src/cli/version.rs
// 职责: 输出启动时注入的版本号
//
// ============================================================================

use anyhow::Result;

use crate::models::config::Config;

pub fn handle_version(config: &Config) -> Result<()> {
    println!("{}", config.version);
    Ok(())
}
