//! 项目配置文档 (`.envsync.json`)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_STORAGE_PATH: &str = "./env";
pub const CONFIG_VERSION: &str = "1.0.0";

/// 存储类型；cloud 仅作为文档值保留，没有实现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    #[default]
    Local,
    Cloud,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(rename = "type", default)]
    pub kind: StorageType,
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_PATH)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            kind: StorageType::Local,
            path: default_storage_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncryptionConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// 项目描述：每次调用视为不可变值，修改通过返回新值完成
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvSyncConfig {
    pub project: String,
    #[serde(default)]
    pub environments: Vec<String>,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub encryption: EncryptionConfig,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

impl EnvSyncConfig {
    /// 新项目的默认配置
    #[must_use]
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            environments: ["development", "staging", "production"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            storage: StorageConfig::default(),
            encryption: EncryptionConfig::default(),
            version: default_version(),
        }
    }

    /// 环境是否已声明
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.environments.iter().any(|e| e == name)
    }

    /// 返回追加了环境名的新配置（已存在则原样返回）
    #[must_use]
    pub fn with_environment(&self, name: &str) -> Self {
        let mut next = self.clone();
        if !next.declares(name) {
            next.environments.push(name.to_string());
        }
        next
    }

    /// 返回启用加密并设置密钥的新配置
    #[must_use]
    pub fn with_encryption(&self, key: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.encryption = EncryptionConfig {
            enabled: true,
            key: Some(key.into()),
        };
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: EnvSyncConfig = serde_json::from_str(r#"{"project": "demo"}"#).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("./env"));
        assert_eq!(config.storage.kind, StorageType::Local);
        assert!(!config.encryption.enabled);
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_storage_type_field_name() {
        let json = r#"{"project":"p","storage":{"type":"cloud","path":"/tmp/x"}}"#;
        let config: EnvSyncConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.storage.kind, StorageType::Cloud);

        let out = serde_json::to_string(&config).unwrap();
        assert!(out.contains(r#""type":"cloud""#));
    }

    #[test]
    fn test_with_environment_is_pure() {
        let config = EnvSyncConfig::new("demo");
        let next = config.with_environment("qa");
        assert!(!config.declares("qa"));
        assert!(next.declares("qa"));
        assert_eq!(next.with_environment("qa").environments.len(), 4);
    }

    #[test]
    fn test_with_encryption() {
        let next = EnvSyncConfig::new("demo").with_encryption("secret");
        assert!(next.encryption.enabled);
        assert_eq!(next.encryption.key.as_deref(), Some("secret"));
    }
}
