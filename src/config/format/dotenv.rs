//! .env 格式解析器 (简单原则：透明的文本解析)

use crate::domain::models::EnvironmentVariable;

/// .env 格式解析器
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 忽略空行和以 # 开头的注释行
    /// - 格式：KEY=VALUE，以第一个 = 分割，两侧去空白
    /// - 没有 = 或键名为空的行直接丢弃，不报错
    /// - 值两端成对的 " 或 ' 去掉一层
    /// - 不去重，重复键保持文件顺序
    #[must_use]
    pub fn parse(content: &str) -> Vec<EnvironmentVariable> {
        let mut vars = Vec::new();

        for line in content.lines() {
            let line = line.trim();

            // 跳过空行和注释
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            vars.push(EnvironmentVariable::new(key, strip_quotes(value.trim())));
        }

        vars
    }

    /// 序列化为 .env 格式
    ///
    /// 值一律不加引号；有注释时追加 ` # comment`。结尾总有一个换行。
    #[must_use]
    pub fn serialize(vars: &[EnvironmentVariable]) -> String {
        let mut content = vars
            .iter()
            .map(|v| match &v.comment {
                Some(comment) => format!("{}={} # {}", v.key, v.value, comment),
                None => format!("{}={}", v.key, v.value),
            })
            .collect::<Vec<_>>()
            .join("\n");
        content.push('\n');
        content
    }
}

/// 去掉一层成对的引号
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}
