//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 差异、同步、备份

pub mod services;

pub use services::{BackupService, SyncService, diff, merge};
