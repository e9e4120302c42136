//! 同步选项与结果

use serde::Serialize;

/// 强制同步时，已存在键的写入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// 追加到末尾，目标文件中会出现重复键（解析时后者生效）
    #[default]
    Append,
    /// 原位替换已存在的键，保持原有顺序
    Replace,
}

/// 同步策略
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// 覆盖目标中值不同的键
    pub force: bool,
    /// 只计算，不写入
    pub dry_run: bool,
    pub strategy: MergeStrategy,
}

impl SyncOptions {
    #[must_use]
    pub fn forced() -> Self {
        Self {
            force: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// 同步结果摘要
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// 写入（或 dry-run 下将要写入）的变量数
    pub synced: usize,
    /// 值不同但未指定 force 而跳过的变量数
    pub skipped: usize,
    /// 候选键，按写入顺序
    pub keys: Vec<String>,
}
