pub mod backup;
pub mod diff;
pub mod sync;

pub use backup::BackupService;
pub use diff::diff;
pub use sync::{SyncService, merge};
