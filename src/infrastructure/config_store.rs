//! 项目配置文档的读写

use crate::domain::models::EnvSyncConfig;
use crate::error::{EnvSyncError, Result};
use crate::infrastructure::paths;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `.envsync.json` 读写器
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 当前目录下的默认配置文件
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(paths::CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// 读取配置；文件不存在是错误（与环境文件不同）
    pub fn load(&self) -> Result<EnvSyncConfig> {
        if !self.exists() {
            return Err(EnvSyncError::ConfigNotFound(self.path.clone()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let config: EnvSyncConfig = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), project = %config.project, "已加载配置");
        Ok(config)
    }

    /// 整体写回配置
    pub fn save(&self, config: &EnvSyncConfig) -> Result<()> {
        let mut content = serde_json::to_string_pretty(config)?;
        content.push('\n');
        paths::write_file_safe(&self.path, &content)?;
        debug!(path = %self.path.display(), "已保存配置");
        Ok(())
    }

    /// 创建新项目配置
    pub fn init(&self, project: &str, force: bool) -> Result<EnvSyncConfig> {
        if self.exists() && !force {
            return Err(EnvSyncError::ConfigExists(self.path.clone()));
        }
        let config = EnvSyncConfig::new(project);
        self.save(&config)?;
        info!(path = %self.path.display(), project, "已初始化项目");
        Ok(config)
    }

    /// 存储根目录：相对路径按配置文件所在目录解析
    pub fn storage_root(&self, config: &EnvSyncConfig) -> PathBuf {
        let base = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        paths::resolve(base, &config.storage.path)
    }
}
