pub mod config;
pub mod diff;
pub mod environment;
pub mod sync;

pub use config::{EncryptionConfig, EnvSyncConfig, StorageConfig, StorageType};
pub use diff::{DiffResult, ModifiedVariable};
pub use environment::{Environment, EnvironmentVariable};
pub use sync::{MergeStrategy, SyncOptions, SyncReport};
