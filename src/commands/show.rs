//! show 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::domain::repositories::EnvironmentRepository;
use crate::cli::ShowFormat;
use crate::config::format::DotenvParser;
use crate::error::Result;

/// show 命令
pub struct ShowCommand<'a> {
    app: &'a Application,
    name: String,
    format: ShowFormat,
}

impl<'a> ShowCommand<'a> {
    pub fn new(app: &'a Application, name: String, format: ShowFormat) -> Self {
        Self { app, name, format }
    }
}

impl CommandHandler for ShowCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        self.app.ensure_known(&self.name)?;
        let env = self.app.repository.load(&self.name)?;

        match self.format {
            ShowFormat::Env => {
                if ctx.verbose {
                    println!("# {} ({})", env.name, env.checksum);
                }
                if !env.is_empty() {
                    print!("{}", DotenvParser::serialize(&env.variables));
                }
            }
            ShowFormat::Json => println!("{}", serde_json::to_string_pretty(&env)?),
        }

        Ok(())
    }
}
