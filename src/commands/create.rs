//! create 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::{Application, validate_env_name};
use crate::domain::repositories::EnvironmentRepository;
use crate::domain::models::Environment;
use crate::error::{EnvSyncError, Result};

/// create 命令：在配置中声明环境并创建空文件
pub struct CreateCommand<'a> {
    app: &'a Application,
    name: String,
}

impl<'a> CreateCommand<'a> {
    pub fn new(app: &'a Application, name: String) -> Self {
        Self { app, name }
    }
}

impl CommandHandler for CreateCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        validate_env_name(&self.name)?;
        if self.app.config.declares(&self.name) {
            return Err(EnvSyncError::EnvironmentExists(self.name.clone()));
        }

        let config = self.app.config.with_environment(&self.name);
        self.app.config_store.save(&config)?;

        if !self.app.repository.exists(&self.name) {
            self.app.repository.save(&Environment::empty(&self.name))?;
        }

        println!("✓ 已创建环境 {}", self.name);
        if ctx.verbose {
            println!("  文件: {}", self.app.repository.path(&self.name).display());
        }

        Ok(())
    }
}
