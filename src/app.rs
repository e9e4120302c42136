//! 应用程序容器
//!
//! 负责依赖注入：配置 -> 存储 -> 服务

use crate::application::services::{BackupService, SyncService};
use crate::domain::models::EnvSyncConfig;
use crate::domain::repositories::EnvironmentRepository;
use crate::error::{EnvSyncError, Result};
use crate::infrastructure::{ConfigStore, FileEnvironmentStore};
use crate::utils::encryption::EncryptionService;
use std::path::PathBuf;
use std::sync::Arc;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub verbose: bool,
    /// 配置文件路径，None 时使用当前目录下的 `.envsync.json`
    pub config_path: Option<PathBuf>,
    /// 命令行或 ENVSYNC_KEY 提供的口令，优先于配置文件中的 key
    pub key_override: Option<String>,
}

impl AppConfig {
    pub fn config_store(&self) -> Result<ConfigStore> {
        match &self.config_path {
            Some(path) => Ok(ConfigStore::new(path.clone())),
            None => Ok(ConfigStore::in_dir(&std::env::current_dir()?)),
        }
    }
}

/// 应用程序容器
pub struct Application {
    pub config: EnvSyncConfig,
    pub config_store: ConfigStore,
    pub repository: Arc<dyn EnvironmentRepository>,
    pub sync_service: SyncService,
    pub backup_service: BackupService,
    key_override: Option<String>,
}

impl Application {
    /// 加载项目配置并创建服务
    pub fn new(app_config: &AppConfig) -> Result<Self> {
        let config_store = app_config.config_store()?;
        let config = config_store.load()?;
        Ok(Self::with_config(
            config_store,
            config,
            app_config.key_override.clone(),
        ))
    }

    pub fn with_config(
        config_store: ConfigStore,
        config: EnvSyncConfig,
        key_override: Option<String>,
    ) -> Self {
        let root = config_store.storage_root(&config);
        let repository: Arc<dyn EnvironmentRepository> = Arc::new(FileEnvironmentStore::new(root));

        Self {
            sync_service: SyncService::new(repository.clone()),
            backup_service: BackupService::new(repository.clone()),
            repository,
            config,
            config_store,
            key_override,
        }
    }

    /// 加密服务：命令行口令优先；否则按配置决定
    pub fn encryption(&self) -> Result<Option<EncryptionService>> {
        match self.key_override.as_deref() {
            Some(secret) => EncryptionService::new(secret).map(Some),
            None => EncryptionService::from_config(&self.config.encryption),
        }
    }

    /// 必须可用的加密服务
    pub fn require_encryption(&self) -> Result<EncryptionService> {
        self.encryption()?.ok_or(EnvSyncError::MissingKey)
    }

    /// 确认环境名合法，且已声明或已存在
    pub fn ensure_known(&self, name: &str) -> Result<()> {
        validate_env_name(name)?;
        if self.config.declares(name) || self.repository.exists(name) {
            Ok(())
        } else {
            Err(EnvSyncError::UnknownEnvironment(name.to_string()))
        }
    }
}

/// 校验环境名：环境名直接拼进文件路径，不能逃出存储目录
pub fn validate_env_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(EnvSyncError::InvalidArgument(format!(
            "无效的环境名 {:?}: {}",
            name, reason
        )))
    };

    if name.trim().is_empty() {
        return invalid("不能为空");
    }
    if name.contains(['/', '\\']) {
        return invalid("不能包含路径分隔符");
    }
    if name.contains("..") {
        return invalid("不能包含 ..");
    }
    if name.chars().any(char::is_control) {
        return invalid("不能包含控制字符");
    }
    Ok(())
}

/// 校验变量：文件格式按行解析，换行会拆出额外的变量
pub fn validate_variable(key: &str, value: &str) -> Result<()> {
    let has_line_break = |s: &str| s.contains(['\n', '\r']);

    if key.is_empty() || key.contains('=') || key.starts_with('#') || has_line_break(key) {
        return Err(EnvSyncError::InvalidArgument(format!(
            "无效的变量名: {:?}",
            key
        )));
    }
    if has_line_break(value) {
        return Err(EnvSyncError::InvalidArgument(format!(
            "变量 {} 的值不能包含换行",
            key
        )));
    }
    Ok(())
}
