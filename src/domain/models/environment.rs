//! 环境与环境变量实体模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 环境变量条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    pub key: String,
    pub value: String,
    /// `value` 当前是否为密文
    #[serde(default)]
    pub encrypted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl EnvironmentVariable {
    /// 创建明文变量
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            encrypted: false,
            comment: None,
        }
    }

    /// 附加行内注释
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl fmt::Display for EnvironmentVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// 一个命名环境（对应一个 `.env.{name}` 文件）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub name: String,
    /// 文件顺序，允许重复键（后者覆盖前者）
    pub variables: Vec<EnvironmentVariable>,
    pub last_modified: DateTime<Utc>,
    /// 原始文件内容的 SHA-256（十六进制），文件不存在时为空
    #[serde(default)]
    pub checksum: String,
}

impl Environment {
    /// 创建空环境（文件不存在时 load 的结果）
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            last_modified: Utc::now(),
            checksum: String::new(),
        }
    }

    /// 按键查找，重复键时取最后一个
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EnvironmentVariable> {
        self.variables.iter().rev().find(|v| v.key == key)
    }

    /// 更新或添加变量
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(existing) = self.variables.iter_mut().rev().find(|v| v.key == key) {
            existing.value = value;
            existing.encrypted = false;
        } else {
            self.variables.push(EnvironmentVariable::new(key, value));
        }
        self.last_modified = Utc::now();
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }
}
