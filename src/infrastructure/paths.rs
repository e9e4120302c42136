//! 路径管理工具

use crate::error::Result;
use std::path::{Path, PathBuf};

/// 环境文件名前缀
pub const ENV_FILE_PREFIX: &str = ".env.";

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = ".envsync.json";

/// 环境文件路径：{root}/.env.{name}
pub fn env_file_path(root: &Path, name: &str) -> PathBuf {
    root.join(format!("{ENV_FILE_PREFIX}{name}"))
}

/// 从文件名提取环境名，不符合命名约定时返回 None
pub fn env_name_from_file(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(ENV_FILE_PREFIX)
        .filter(|name| !name.is_empty())
}

/// 相对路径按 base 解析
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// 确保目录存在 (幂等操作)
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// 安全写入文件 (使用临时文件 + 原子替换)
///
/// 临时文件名以 `.tmp` 开头，不会被当作环境文件列出。
pub fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    ensure_dir(parent)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = parent.join(format!(".tmp{file_name}"));
    std::fs::write(&temp_path, content)?;

    std::fs::rename(&temp_path, path)?;

    Ok(())
}
