//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait

use crate::error::Result;

pub mod backup;
pub mod create;
pub mod diff;
pub mod init;
pub mod keygen;
pub mod list;
pub mod restore;
pub mod set;
pub mod show;
pub mod sync;

/// 命令上下文
#[derive(Debug)]
pub struct CommandContext {
    pub verbose: bool,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
