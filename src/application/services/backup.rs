//! 环境备份：JSON 文档，值可选加密

use crate::domain::models::Environment;
use crate::domain::repositories::EnvironmentRepository;
use crate::error::{EnvSyncError, Result};
use crate::infrastructure::paths;
use crate::utils::encryption::EncryptionService;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// 备份服务
pub struct BackupService {
    repository: Arc<dyn EnvironmentRepository>,
}

impl BackupService {
    pub fn new(repository: Arc<dyn EnvironmentRepository>) -> Self {
        Self { repository }
    }

    /// 生成备份副本；提供加密服务时加密所有尚未加密的值
    pub fn create(
        environment: &Environment,
        encryption: Option<&EncryptionService>,
    ) -> Result<Environment> {
        match encryption {
            Some(service) => service.encrypt_environment(environment),
            None => Ok(environment.clone()),
        }
    }

    /// 还原备份：解密所有标记为加密的变量
    pub fn restore(backup: &Environment, encryption: Option<&EncryptionService>) -> Result<Environment> {
        match encryption {
            Some(service) => service.decrypt_environment(backup),
            None if backup.variables.iter().any(|v| v.encrypted) => Err(EnvSyncError::MissingKey),
            None => Ok(backup.clone()),
        }
    }

    /// 写入备份文件（格式化 JSON）
    pub fn write(path: &Path, backup: &Environment) -> Result<()> {
        let mut content = serde_json::to_string_pretty(backup)?;
        content.push('\n');
        paths::write_file_safe(path, &content)
    }

    /// 读取备份文件
    pub fn read(path: &Path) -> Result<Environment> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 默认备份文件名：{name}-{时间戳}.json
    pub fn default_file_name(name: &str) -> String {
        format!("{}-{}.json", name, Utc::now().format("%Y%m%d%H%M%S"))
    }

    /// 从存储加载环境并写出备份
    pub fn backup(
        &self,
        name: &str,
        output: &Path,
        encryption: Option<&EncryptionService>,
    ) -> Result<PathBuf> {
        let environment = self.repository.load(name)?;
        let backup = Self::create(&environment, encryption)?;
        Self::write(output, &backup)?;

        info!(
            environment = name,
            variables = backup.variables.len(),
            encrypted = encryption.is_some(),
            path = %output.display(),
            "已写入备份"
        );
        Ok(output.to_path_buf())
    }

    /// 读取备份文件并写回存储；`rename` 指定新的环境名
    pub fn restore_file(
        &self,
        input: &Path,
        rename: Option<&str>,
        encryption: Option<&EncryptionService>,
    ) -> Result<Environment> {
        let backup = Self::read(input)?;
        let environment = self.restore_backup(&backup, rename, encryption)?;
        info!(path = %input.display(), "已读取备份文件");
        Ok(environment)
    }

    /// 还原已读取的备份并写回存储；rename 覆盖备份中的环境名
    pub fn restore_backup(
        &self,
        backup: &Environment,
        rename: Option<&str>,
        encryption: Option<&EncryptionService>,
    ) -> Result<Environment> {
        let mut environment = Self::restore(backup, encryption)?;
        if let Some(name) = rename {
            environment.name = name.to_string();
        }
        environment.last_modified = Utc::now();

        self.repository.save(&environment)?;
        info!(
            environment = %environment.name,
            variables = environment.variables.len(),
            "已还原备份"
        );
        Ok(environment)
    }
}
