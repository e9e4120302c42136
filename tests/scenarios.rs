//! 端到端场景：存储 + diff + 同步 + 加密

use envsync::{
    EncryptionService, EnvSyncError, EnvironmentRepository, EnvironmentVariable,
    FileEnvironmentStore, MergeStrategy, SyncOptions, application::SyncService, diff,
};
use std::sync::Arc;
use tempfile::TempDir;

fn setup() -> (TempDir, Arc<FileEnvironmentStore>) {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileEnvironmentStore::new(temp_dir.path().join("env")));
    std::fs::create_dir_all(store.root()).unwrap();
    std::fs::write(store.path("dev"), "A=1\nB=2\n").unwrap();
    std::fs::write(store.path("prod"), "A=1\nC=3\n").unwrap();
    (temp_dir, store)
}

#[test]
fn dev_prod_diff_and_sync() {
    let (_temp, store) = setup();

    let dev = store.load("dev").unwrap();
    let prod = store.load("prod").unwrap();
    let result = diff(&dev, &prod);
    assert_eq!(result.added, vec![EnvironmentVariable::new("C", "3")]);
    assert_eq!(result.removed, vec![EnvironmentVariable::new("B", "2")]);
    assert!(result.modified.is_empty());
    assert_eq!(result.unchanged, vec![EnvironmentVariable::new("A", "1")]);

    let service = SyncService::new(store.clone());
    let report = service.sync("prod", "dev", SyncOptions::default()).unwrap();
    assert_eq!((report.synced, report.skipped), (1, 0));

    let dev = store.load("dev").unwrap();
    let keys: Vec<_> = dev.variables.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys, ["A", "B", "C"]);

    // 第二次同步没有需要写入的变量
    let again = service.sync("prod", "dev", SyncOptions::default()).unwrap();
    assert_eq!(again.synced, 0);
}

#[test]
fn checksum_changes_after_sync() {
    let (_temp, store) = setup();
    let before = store.load("dev").unwrap().checksum;

    SyncService::new(store.clone())
        .sync("prod", "dev", SyncOptions::default())
        .unwrap();

    let after = store.load("dev").unwrap().checksum;
    assert_ne!(before, after);
}

#[test]
fn forced_replace_keeps_single_entry() {
    let (_temp, store) = setup();
    std::fs::write(store.path("prod"), "A=9\n").unwrap();

    let options = SyncOptions::forced().with_strategy(MergeStrategy::Replace);
    SyncService::new(store.clone())
        .sync("prod", "dev", options)
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(store.path("dev")).unwrap(),
        "A=9\nB=2\n"
    );
}

#[test]
fn encrypted_values_survive_a_store_round_trip() {
    let (_temp, store) = setup();
    let service = EncryptionService::new("passphrase").unwrap();

    let dev = store.load("dev").unwrap();
    let sealed = service.encrypt_environment(&dev).unwrap();
    store.save(&sealed).unwrap();

    // 文件格式不记录 encrypted 标记，重新加载后值仍是令牌
    let reloaded = store.load("dev").unwrap();
    assert!(reloaded.variables.iter().all(|v| !v.encrypted));
    for (plain, token) in dev.variables.iter().zip(&reloaded.variables) {
        assert_eq!(service.decrypt(&token.value).unwrap(), plain.value);
    }
}

#[test]
fn empty_plaintext_round_trip() {
    let service = EncryptionService::new("k").unwrap();
    let token = service.encrypt("").unwrap();
    assert_eq!(service.decrypt(&token).unwrap(), "");
}

#[test]
fn decrypt_with_other_key_fails() {
    let token = EncryptionService::new("one")
        .unwrap()
        .encrypt("top secret payload")
        .unwrap();
    let result = EncryptionService::new("two").unwrap().decrypt(&token);
    assert!(matches!(result, Err(EnvSyncError::DecryptionFailed(_))));
}
