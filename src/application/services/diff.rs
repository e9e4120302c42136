//! 差异计算（纯函数，无副作用）

use crate::domain::models::{DiffResult, Environment, EnvironmentVariable, ModifiedVariable};
use std::collections::HashMap;
use tracing::warn;

/// 按键索引的变量视图
///
/// 重复键时后者覆盖前者，但保留首次出现的位置。
pub(crate) struct KeyIndex<'a> {
    order: Vec<&'a EnvironmentVariable>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> KeyIndex<'a> {
    pub(crate) fn build(environment: &'a Environment) -> Self {
        let mut order: Vec<&'a EnvironmentVariable> =
            Vec::with_capacity(environment.variables.len());
        let mut positions: HashMap<&'a str, usize> =
            HashMap::with_capacity(environment.variables.len());

        for var in &environment.variables {
            let existing = positions.get(var.key.as_str()).copied();
            match existing {
                Some(pos) => {
                    warn!(environment = %environment.name, key = %var.key, "重复的键，以后者为准");
                    order[pos] = var;
                }
                None => {
                    positions.insert(var.key.as_str(), order.len());
                    order.push(var);
                }
            }
        }

        Self { order, positions }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a EnvironmentVariable> {
        self.positions.get(key).map(|&pos| self.order[pos])
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &'a EnvironmentVariable> + '_ {
        self.order.iter().copied()
    }
}

/// 计算 env1 -> env2 的差异
///
/// - added: 只在 env2 中
/// - removed: 只在 env1 中
/// - modified: 两边都有但值不同（携带 env2 的变量）
/// - unchanged: 两边值完全相同
///
/// 值按字符串精确比较。各分类内的顺序跟随各自环境的键首次出现顺序。
#[must_use]
pub fn diff(env1: &Environment, env2: &Environment) -> DiffResult {
    let map1 = KeyIndex::build(env1);
    let map2 = KeyIndex::build(env2);
    let mut result = DiffResult::default();

    for var in map2.iter() {
        match map1.get(&var.key) {
            None => result.added.push(var.clone()),
            Some(old) if old.value == var.value => result.unchanged.push(var.clone()),
            Some(old) => result.modified.push(ModifiedVariable {
                variable: var.clone(),
                old_value: old.value.clone(),
                new_value: var.value.clone(),
            }),
        }
    }

    for var in map1.iter() {
        if !map2.contains(&var.key) {
            result.removed.push(var.clone());
        }
    }

    result
}
