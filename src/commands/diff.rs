//! diff 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::domain::repositories::EnvironmentRepository;
use crate::application::services::diff;
use crate::cli::DiffFormat;
use crate::domain::models::DiffResult;
use crate::error::Result;

/// diff 命令
pub struct DiffCommand<'a> {
    app: &'a Application,
    from: String,
    to: String,
    format: DiffFormat,
}

impl<'a> DiffCommand<'a> {
    pub fn new(app: &'a Application, from: String, to: String, format: DiffFormat) -> Self {
        Self {
            app,
            from,
            to,
            format,
        }
    }
}

/// 文本格式：+ 新增，- 删除，~ 修改
pub fn render_text(result: &DiffResult, verbose: bool) -> String {
    let mut lines = Vec::new();

    for var in &result.added {
        lines.push(format!("+ {}={}", var.key, var.value));
    }
    for var in &result.removed {
        lines.push(format!("- {}={}", var.key, var.value));
    }
    for m in &result.modified {
        lines.push(format!("~ {}: {} -> {}", m.key(), m.old_value, m.new_value));
    }
    if verbose {
        for var in &result.unchanged {
            lines.push(format!("  {}={}", var.key, var.value));
        }
    }

    lines.push(format!(
        "新增 {}，删除 {}，修改 {}，相同 {}",
        result.added.len(),
        result.removed.len(),
        result.modified.len(),
        result.unchanged.len()
    ));

    lines.join("\n")
}

impl CommandHandler for DiffCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        self.app.ensure_known(&self.from)?;
        self.app.ensure_known(&self.to)?;

        let env1 = self.app.repository.load(&self.from)?;
        let env2 = self.app.repository.load(&self.to)?;
        let result = diff(&env1, &env2);

        match self.format {
            DiffFormat::Text => println!("{}", render_text(&result, ctx.verbose)),
            DiffFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        }

        Ok(())
    }
}
