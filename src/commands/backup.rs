//! backup 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::application::services::BackupService;
use crate::error::Result;
use std::path::PathBuf;

/// backup 命令
pub struct BackupCommand<'a> {
    app: &'a Application,
    name: String,
    output: Option<PathBuf>,
    plain: bool,
}

impl<'a> BackupCommand<'a> {
    pub fn new(app: &'a Application, name: String, output: Option<PathBuf>, plain: bool) -> Self {
        Self {
            app,
            name,
            output,
            plain,
        }
    }
}

impl CommandHandler for BackupCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        self.app.ensure_known(&self.name)?;

        let encryption = if self.plain {
            None
        } else {
            self.app.encryption()?
        };

        let output = match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from("backups").join(BackupService::default_file_name(&self.name)),
        };

        let path = self
            .app
            .backup_service
            .backup(&self.name, &output, encryption.as_ref())?;

        println!("{}", path.display());
        if ctx.verbose {
            let mode = if encryption.is_some() { "加密" } else { "明文" };
            println!("✓ 已备份 {} ({})", self.name, mode);
        }

        Ok(())
    }
}
