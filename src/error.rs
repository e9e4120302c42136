//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvSyncError {
    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    // === 加密相关 ===
    #[error("缺少加密密钥")]
    MissingKey,

    #[error("加密失败: {0}")]
    EncryptionFailed(String),

    #[error("解密失败: {0}")]
    DecryptionFailed(String),

    // === 配置与环境 ===
    #[error("配置文件不存在: {0}")]
    ConfigNotFound(PathBuf),

    #[error("配置文件已存在: {0}")]
    ConfigExists(PathBuf),

    #[error("未声明的环境: {0}")]
    UnknownEnvironment(String),

    #[error("环境已存在: {0}")]
    EnvironmentExists(String),

    #[error("无效参数: {0}")]
    InvalidArgument(String),
}

/// 详细的错误报告函数 (透明原则)
impl EnvSyncError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);

            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            match self {
                EnvSyncError::Io(err) => eprintln!("文件错误: {}", err),
                EnvSyncError::MissingKey => {
                    eprintln!("缺少加密密钥 (使用 --key 或设置 ENVSYNC_KEY)")
                }
                EnvSyncError::ConfigNotFound(path) => {
                    eprintln!("配置文件不存在: {} (先运行 envsync init)", path.display())
                }
                EnvSyncError::UnknownEnvironment(name) => eprintln!("未声明的环境: {}", name),
                _ => eprintln!("错误: {}", self),
            }
        }
    }

    /// 进程退出码
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvSyncError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, EnvSyncError>;
