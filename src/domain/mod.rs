//! Domain Layer - 核心业务模型
//!
//! 包含：
//! - models: 领域实体
//! - repositories: 存储接口（输出端口）

pub mod models;
pub mod repositories;

pub use models::{
    DiffResult, EnvSyncConfig, Environment, EnvironmentVariable, MergeStrategy, ModifiedVariable,
    SyncOptions, SyncReport,
};
pub use repositories::EnvironmentRepository;
