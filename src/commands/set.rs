//! set 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::{Application, validate_variable};
use crate::domain::repositories::EnvironmentRepository;
use crate::error::Result;

/// set 命令：更新或添加单个变量
pub struct SetCommand<'a> {
    app: &'a Application,
    name: String,
    key: String,
    value: String,
}

impl<'a> SetCommand<'a> {
    pub fn new(app: &'a Application, name: String, key: String, value: String) -> Self {
        Self {
            app,
            name,
            key,
            value,
        }
    }
}

impl CommandHandler for SetCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let key = self.key.trim();
        validate_variable(key, &self.value)?;
        self.app.ensure_known(&self.name)?;

        let mut env = self.app.repository.load(&self.name)?;
        env.set(key, self.value.as_str());
        self.app.repository.save(&env)?;

        if ctx.verbose {
            println!("✓ 设置变量 {}.{} = {}", self.name, key, self.value);
        }

        Ok(())
    }
}
