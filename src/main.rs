//! envsync 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 日志走 stderr，stdout 只放命令结果
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use envsync::app::{AppConfig, Application};
use envsync::cli::{Cli, Commands};
use envsync::commands::{
    CommandContext, CommandHandler, backup::BackupCommand, create::CreateCommand,
    diff::DiffCommand, init::InitCommand, keygen::KeygenCommand, list::ListCommand,
    restore::RestoreCommand, set::SetCommand, show::ShowCommand, sync::SyncCommand,
};
use envsync::domain::models::{MergeStrategy, SyncOptions};
use envsync::error::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let app_config = AppConfig {
        verbose: cli.verbose,
        config_path: cli.config.clone(),
        key_override: cli.key.clone().filter(|k| !k.is_empty()),
    };

    if let Err(e) = run_command(cli.command, &app_config) {
        e.report(app_config.verbose);
        std::process::exit(e.exit_code());
    }
}

/// 初始化日志：RUST_LOG 优先，否则 --verbose 时为 debug
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "envsync=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// 运行具体命令
fn run_command(command: Commands, app_config: &AppConfig) -> Result<()> {
    let ctx = CommandContext {
        verbose: app_config.verbose,
    };

    // 不需要项目配置的命令
    match command {
        Commands::Init { project, force } => {
            let store = app_config.config_store()?;
            return InitCommand::new(store, project, force).execute(&ctx);
        }
        Commands::Keygen => return KeygenCommand.execute(&ctx),
        _ => {}
    }

    let app = Application::new(app_config)?;

    match command {
        Commands::Create { name } => CreateCommand::new(&app, name).execute(&ctx),
        Commands::List => ListCommand::new(&app).execute(&ctx),
        Commands::Show { name, format } => ShowCommand::new(&app, name, format).execute(&ctx),
        Commands::Set { name, key, value } => {
            SetCommand::new(&app, name, key, value).execute(&ctx)
        }
        Commands::Diff { from, to, format } => {
            DiffCommand::new(&app, from, to, format).execute(&ctx)
        }
        Commands::Sync {
            source,
            target,
            force,
            dry_run,
            replace,
        } => {
            let options = SyncOptions {
                force,
                dry_run,
                strategy: if replace {
                    MergeStrategy::Replace
                } else {
                    MergeStrategy::Append
                },
            };
            SyncCommand::new(&app, source, target, options).execute(&ctx)
        }
        Commands::Backup {
            name,
            output,
            plain,
        } => BackupCommand::new(&app, name, output, plain).execute(&ctx),
        Commands::Restore { file, rename } => {
            RestoreCommand::new(&app, file, rename).execute(&ctx)
        }
        Commands::Init { .. } | Commands::Keygen => Ok(()),
    }
}
