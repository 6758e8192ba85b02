// ============================================================================
// XCKit - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 启动时配置加载与注入
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含翻译状态查询逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod list;
pub mod set;
pub mod status;
pub mod untranslated;
pub mod version;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::CatalogLocator;
use crate::i18n;
use crate::models::config::{Config, RuntimeArgs};
use crate::models::Catalog;
use crate::tf;
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use list::{handle_list, ListArgs};
use set::{handle_set, SetArgs};
use status::{handle_status, StatusArgs};
use untranslated::{handle_untranslated, UntranslatedArgs};
use version::handle_version;

/// 构建时注入的版本号
pub const BUILD_VERSION: &str = env!("XCKIT_VERSION");

/// XCKit - Xcode String Catalog toolkit
#[derive(Debug, Parser)]
#[command(name = "xckit")]
#[command(about = "Inspect and edit Xcode String Catalog (.xcstrings) files")]
#[command(version = BUILD_VERSION)]
pub struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Interface language (en_us, zh_cn)
    #[arg(long, global = true, value_name = "LANGUAGE")]
    pub locale: Option<String>,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all keys with translation status
    List(ListArgs),
    /// List untranslated keys for a specific language
    Untranslated(UntranslatedArgs),
    /// Set translation for a specific key and language
    Set(SetArgs),
    /// Show translation progress summary
    Status(StatusArgs),
    /// Print xckit version
    Version,
}

/// 各命令共用的目录文件参数
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Path to the .xcstrings file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl CatalogArgs {
    /// 解析目标文件路径并加载
    pub fn load(&self, config: &Config) -> Result<(PathBuf, Catalog)> {
        let path = CatalogLocator::from_current_dir().resolve(self.file.as_deref(), config)?;
        let catalog = Catalog::load(&path)?;
        Ok((path, catalog))
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run_cli(cli: Cli) -> Result<()> {
    // 构建运行时参数覆盖配置文件
    let runtime_args = build_runtime_args(&cli);
    let config = Config::load_from_dir(&std::env::current_dir()?)?
        .merge_runtime_args(runtime_args)
        .with_version(BUILD_VERSION);

    Logger::init_tracing(config.output.verbose);
    Colors::init(config.output.colored);
    if !i18n::init(&config.i18n.language) {
        Logger::warn(tf!("config.unknown_language", config.i18n.language));
    }

    match cli.command {
        Commands::List(args) => handle_list(args, &config),
        Commands::Untranslated(args) => handle_untranslated(args, &config),
        Commands::Set(args) => handle_set(args, &config),
        Commands::Status(args) => handle_status(args, &config),
        Commands::Version => handle_version(&config),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.locale.clone(),
    }
}
