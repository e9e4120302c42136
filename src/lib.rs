//! envsync - 多环境配置变量管理
//!
//! 每个环境是一个 `.env.{name}` 文件；核心能力是差异比较、单向同步和值加密。

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 文件格式
pub mod config;

// 工具（加密）
pub mod utils;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

pub mod error;

// 重新导出常用类型
pub use application::{diff, merge};
pub use domain::{
    DiffResult, EnvSyncConfig, Environment, EnvironmentRepository, EnvironmentVariable,
    MergeStrategy, ModifiedVariable, SyncOptions, SyncReport,
};
pub use error::{EnvSyncError, Result};
pub use infrastructure::FileEnvironmentStore;
pub use utils::encryption::{EncryptionService, generate_secret_key};
