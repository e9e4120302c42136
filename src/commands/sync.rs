//! sync 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::domain::models::SyncOptions;
use crate::error::{EnvSyncError, Result};

/// sync 命令
pub struct SyncCommand<'a> {
    app: &'a Application,
    source: String,
    target: String,
    options: SyncOptions,
}

impl<'a> SyncCommand<'a> {
    pub fn new(app: &'a Application, source: String, target: String, options: SyncOptions) -> Self {
        Self {
            app,
            source,
            target,
            options,
        }
    }
}

impl CommandHandler for SyncCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if self.source == self.target {
            return Err(EnvSyncError::InvalidArgument(
                "source 与 target 不能相同".to_string(),
            ));
        }
        self.app.ensure_known(&self.source)?;
        self.app.ensure_known(&self.target)?;

        let report = self
            .app
            .sync_service
            .sync(&self.source, &self.target, self.options)?;

        let verb = if self.options.dry_run { "将同步" } else { "已同步" };
        println!(
            "✓ {} {} 个变量 ({} -> {})，跳过 {} 个",
            verb, report.synced, self.source, self.target, report.skipped
        );

        if ctx.verbose || self.options.dry_run {
            for key in &report.keys {
                println!("  {}", key);
            }
        }
        if report.skipped > 0 && !self.options.force {
            println!("提示：使用 --force 覆盖值不同的变量");
        }

        Ok(())
    }
}
