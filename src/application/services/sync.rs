//! 单向同步：把 source 中新增（以及 force 时修改）的变量写入 target

use super::diff::diff;
use crate::domain::models::{Environment, EnvironmentVariable, MergeStrategy, SyncOptions, SyncReport};
use crate::domain::repositories::EnvironmentRepository;
use crate::error::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// 在内存中把 source 合并进 target
///
/// 以 target 为旧、source 为新计算差异：added 是 source 有而 target 没有的变量。
/// dry_run 时 target 保持不变。
pub fn merge(source: &Environment, target: &mut Environment, options: SyncOptions) -> SyncReport {
    let delta = diff(target, source);

    let mut candidates: Vec<EnvironmentVariable> = delta.added;
    let skipped = if options.force {
        candidates.extend(delta.modified.into_iter().map(|m| m.variable));
        0
    } else {
        delta.modified.len()
    };

    let report = SyncReport {
        synced: candidates.len(),
        skipped,
        keys: candidates.iter().map(|v| v.key.clone()).collect(),
    };

    if options.dry_run {
        return report;
    }

    match options.strategy {
        MergeStrategy::Append => target.variables.extend(candidates),
        MergeStrategy::Replace => {
            for candidate in candidates {
                let mut replaced = false;
                for existing in target.variables.iter_mut().filter(|v| v.key == candidate.key) {
                    existing.value.clone_from(&candidate.value);
                    existing.encrypted = candidate.encrypted;
                    replaced = true;
                }
                if !replaced {
                    target.variables.push(candidate);
                }
            }
        }
    }
    target.last_modified = Utc::now();

    report
}

/// 同步服务
pub struct SyncService {
    repository: Arc<dyn EnvironmentRepository>,
}

impl SyncService {
    pub fn new(repository: Arc<dyn EnvironmentRepository>) -> Self {
        Self { repository }
    }

    /// 从存储加载两个环境，合并后写回 target（dry_run 时不写）
    pub fn sync(&self, source: &str, target: &str, options: SyncOptions) -> Result<SyncReport> {
        let source_env = self.repository.load(source)?;
        let mut target_env = self.repository.load(target)?;

        let report = merge(&source_env, &mut target_env, options);

        if options.dry_run {
            debug!(source, target, synced = report.synced, "dry-run，不写入");
            return Ok(report);
        }

        self.repository.save(&target_env)?;
        info!(
            source,
            target,
            synced = report.synced,
            skipped = report.skipped,
            strategy = ?options.strategy,
            "同步完成"
        );

        Ok(report)
    }
}
