//! keygen 命令处理器

use super::{CommandContext, CommandHandler};
use crate::error::Result;
use crate::utils::encryption::generate_secret_key;

/// keygen 命令
pub struct KeygenCommand;

impl CommandHandler for KeygenCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("{}", generate_secret_key());
        Ok(())
    }
}
