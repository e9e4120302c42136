//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - storage: 文件系统存储实现
//! - config_store: 项目配置读写
//! - paths: 路径工具

pub mod config_store;
pub mod paths;
pub mod storage;

pub use config_store::ConfigStore;
pub use storage::FileEnvironmentStore;
