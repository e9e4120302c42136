//! 文件存储实现

use crate::config::format::DotenvParser;
use crate::domain::models::Environment;
use crate::domain::repositories::EnvironmentRepository;
use crate::error::Result;
use crate::infrastructure::paths;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 文件环境存储：每个环境一个 `{root}/.env.{name}` 文件
#[derive(Debug, Clone)]
pub struct FileEnvironmentStore {
    root: PathBuf,
}

impl FileEnvironmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 原始内容的 SHA-256 十六进制
    pub fn checksum(content: &[u8]) -> String {
        hex::encode(Sha256::digest(content))
    }
}

impl EnvironmentRepository for FileEnvironmentStore {
    fn path(&self, name: &str) -> PathBuf {
        paths::env_file_path(&self.root, name)
    }

    fn load(&self, name: &str) -> Result<Environment> {
        let path = self.path(name);

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(environment = name, path = %path.display(), "环境文件不存在，返回空环境");
                return Ok(Environment::empty(name));
            }
            Err(e) => return Err(e.into()),
        };

        let content = std::str::from_utf8(&bytes)
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
        let modified = std::fs::metadata(&path)?.modified()?;

        let environment = Environment {
            name: name.to_string(),
            variables: DotenvParser::parse(content),
            last_modified: DateTime::<Utc>::from(modified),
            checksum: Self::checksum(&bytes),
        };

        debug!(
            environment = name,
            variables = environment.variables.len(),
            checksum = %environment.checksum,
            "已加载环境"
        );

        Ok(environment)
    }

    fn save(&self, environment: &Environment) -> Result<()> {
        paths::ensure_dir(&self.root)?;
        let path = self.path(&environment.name);

        let content = DotenvParser::serialize(&environment.variables);
        paths::write_file_safe(&path, &content)?;

        info!(
            environment = %environment.name,
            variables = environment.variables.len(),
            path = %path.display(),
            "已保存环境"
        );

        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            if let Some(name) = file_name.to_str().and_then(paths::env_name_from_file) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EnvironmentVariable;
    use crate::error::EnvSyncError;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn create_store() -> (TempDir, FileEnvironmentStore) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileEnvironmentStore::new(temp_dir.path().join("env"));
        (temp_dir, store)
    }

    #[test]
    fn test_path_is_deterministic() {
        let store = FileEnvironmentStore::new("/data/env");
        assert_eq!(store.path("dev"), PathBuf::from("/data/env/.env.dev"));
        assert_eq!(store.path("dev"), store.path("dev"));
    }

    #[test]
    fn test_load_missing_returns_empty() {
        let (_temp, store) = create_store();
        let env = store.load("ghost").unwrap();
        assert_eq!(env.name, "ghost");
        assert!(env.variables.is_empty());
        assert_eq!(env.checksum, "");
        assert!(!store.exists("ghost"));
    }

    #[test]
    fn test_load_parses_and_checksums() {
        let (_temp, store) = create_store();
        fs::create_dir_all(store.root()).unwrap();
        let content = "# header\nA=1\nB=\"two\"\n";
        fs::write(store.path("dev"), content).unwrap();

        let env = store.load("dev").unwrap();
        assert_eq!(env.variables.len(), 2);
        assert_eq!(env.variables[1].value, "two");
        assert_eq!(env.checksum, FileEnvironmentStore::checksum(content.as_bytes()));
        assert_eq!(env.checksum.len(), 64);
    }

    #[test]
    fn test_load_uses_file_mtime() {
        let (_temp, store) = create_store();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.path("dev"), "A=1\n").unwrap();

        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        fs::File::options()
            .write(true)
            .open(store.path("dev"))
            .unwrap()
            .set_modified(mtime)
            .unwrap();

        let env = store.load("dev").unwrap();
        assert_eq!(env.last_modified, DateTime::<Utc>::from(mtime));
        assert_eq!(env.last_modified.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_load_rejects_non_utf8() {
        let (_temp, store) = create_store();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.path("dev"), [b'A', b'=', 0xff, 0xfe, b'\n']).unwrap();

        match store.load("dev") {
            Err(EnvSyncError::Io(e)) => assert_eq!(e.kind(), ErrorKind::InvalidData),
            other => panic!("expected InvalidData, got {other:?}"),
        }
    }

    #[test]
    fn test_checksum_known_value() {
        assert_eq!(
            FileEnvironmentStore::checksum(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_save_creates_directory_and_overwrites() {
        let (_temp, store) = create_store();
        let mut env = Environment::empty("dev");
        env.variables.push(EnvironmentVariable::new("A", "1"));
        store.save(&env).unwrap();
        assert_eq!(fs::read_to_string(store.path("dev")).unwrap(), "A=1\n");

        env.variables.clear();
        env.variables.push(EnvironmentVariable::new("B", "2"));
        store.save(&env).unwrap();
        assert_eq!(fs::read_to_string(store.path("dev")).unwrap(), "B=2\n");
    }

    #[test]
    fn test_save_then_load() {
        let (_temp, store) = create_store();
        let mut env = Environment::empty("staging");
        env.set("HOST", "example.com");
        env.set("PORT", "8080");
        store.save(&env).unwrap();

        let loaded = store.load("staging").unwrap();
        assert_eq!(loaded.variables, env.variables);
        assert!(!loaded.checksum.is_empty());
    }

    #[test]
    fn test_list() {
        let (_temp, store) = create_store();
        assert!(store.list().unwrap().is_empty());

        for name in ["production", "dev"] {
            store.save(&Environment::empty(name)).unwrap();
        }
        fs::write(store.root().join("README.md"), "x").unwrap();
        fs::write(store.root().join(".env"), "x").unwrap();
        fs::create_dir_all(store.root().join(".env.dir")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["dev", "production"]);
    }
}
