//! init 命令处理器

use super::{CommandContext, CommandHandler};
use crate::error::Result;
use crate::infrastructure::ConfigStore;

/// init 命令
pub struct InitCommand {
    config_store: ConfigStore,
    project: String,
    force: bool,
}

impl InitCommand {
    pub fn new(config_store: ConfigStore, project: String, force: bool) -> Self {
        Self {
            config_store,
            project,
            force,
        }
    }
}

impl CommandHandler for InitCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let config = self.config_store.init(&self.project, self.force)?;
        println!("✓ 已初始化项目 {}", config.project);

        if ctx.verbose {
            println!("  配置文件: {}", self.config_store.path().display());
            println!("  存储目录: {}", self.config_store.storage_root(&config).display());
            println!("  环境: {}", config.environments.join(", "));
        }

        Ok(())
    }
}
