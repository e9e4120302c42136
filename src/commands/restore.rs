//! restore 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::{Application, validate_env_name};
use crate::application::services::BackupService;
use crate::domain::repositories::EnvironmentRepository;
use crate::error::Result;
use std::path::PathBuf;

/// restore 命令
pub struct RestoreCommand<'a> {
    app: &'a Application,
    file: PathBuf,
    rename: Option<String>,
}

impl<'a> RestoreCommand<'a> {
    pub fn new(app: &'a Application, file: PathBuf, rename: Option<String>) -> Self {
        Self { app, file, rename }
    }
}

impl CommandHandler for RestoreCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let backup = BackupService::read(&self.file)?;
        let name = self.rename.as_deref().unwrap_or(&backup.name);
        validate_env_name(name)?;

        let encryption = self.app.encryption()?;
        let env = self.app.backup_service.restore_backup(
            &backup,
            self.rename.as_deref(),
            encryption.as_ref(),
        )?;

        println!("✓ 已还原环境 {} ({} 个变量)", env.name, env.len());
        if ctx.verbose {
            println!("  文件: {}", self.app.repository.path(&env.name).display());
        }

        Ok(())
    }
}
