//! 差异结果模型

use super::environment::EnvironmentVariable;
use serde::Serialize;

/// 两个环境中值不同的同名变量
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedVariable {
    /// 第二个环境中的变量
    pub variable: EnvironmentVariable,
    pub old_value: String,
    pub new_value: String,
}

impl ModifiedVariable {
    pub fn key(&self) -> &str {
        &self.variable.key
    }
}

/// 结构化差异：每个键恰好落在其中一个分类
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub added: Vec<EnvironmentVariable>,
    pub removed: Vec<EnvironmentVariable>,
    pub modified: Vec<ModifiedVariable>,
    pub unchanged: Vec<EnvironmentVariable>,
}

impl DiffResult {
    /// 没有新增、删除或修改
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// 两个环境键的并集大小
    #[must_use]
    pub fn total_keys(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len() + self.unchanged.len()
    }
}
