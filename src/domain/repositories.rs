//! 存储接口定义（输出端口）

use crate::domain::models::Environment;
use crate::error::Result;
use std::path::PathBuf;

/// 环境存储接口
///
/// 每次调用都从后端重新读取，不跨调用缓存。
pub trait EnvironmentRepository: Send + Sync {
    /// 环境对应的文件路径（纯函数，不访问文件系统）
    fn path(&self, name: &str) -> PathBuf;

    /// 读取环境；不存在时返回空环境而不是错误
    fn load(&self, name: &str) -> Result<Environment>;

    /// 覆盖写入环境
    fn save(&self, environment: &Environment) -> Result<()>;

    /// 列出已存在的环境名
    fn list(&self) -> Result<Vec<String>>;

    /// 环境文件是否存在
    fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }
}
