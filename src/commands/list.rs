//! list 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::domain::repositories::EnvironmentRepository;
use crate::error::Result;

/// list 命令：已声明的环境 + 存储目录中未声明的环境文件
pub struct ListCommand<'a> {
    app: &'a Application,
}

impl<'a> ListCommand<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }
}

impl CommandHandler for ListCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let on_disk = self.app.repository.list()?;

        for name in &self.app.config.environments {
            if !on_disk.contains(name) {
                println!("{} (未创建)", name);
                continue;
            }
            if ctx.verbose {
                let env = self.app.repository.load(name)?;
                println!("{} [{} 个变量, {}]", name, env.len(), env.last_modified.to_rfc3339());
            } else {
                println!("{}", name);
            }
        }

        for name in on_disk.iter().filter(|n| !self.app.config.declares(n)) {
            println!("{} (未声明)", name);
        }

        Ok(())
    }
}
