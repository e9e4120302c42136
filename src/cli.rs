//! CLI 参数定义

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// envsync - 多环境配置变量管理工具
#[derive(Parser)]
#[command(
    name = "envsync",
    version,
    about = "多环境配置变量管理工具",
    long_about = "管理项目的多个环境（development/staging/production），支持差异比较、单向同步和加密备份"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 配置文件路径（默认 ./.envsync.json）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 加密口令，优先于配置文件
    #[arg(long, global = true, env = "ENVSYNC_KEY", hide_env_values = true)]
    pub key: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 初始化项目配置
    Init {
        /// 项目名称
        project: String,
        /// 覆盖已有配置
        #[arg(short, long)]
        force: bool,
    },

    /// 声明并创建新环境
    Create {
        /// 环境名称
        name: String,
    },

    /// 列出环境
    List,

    /// 显示环境中的变量
    Show {
        /// 环境名称
        name: String,
        /// 输出格式
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Env)]
        format: ShowFormat,
    },

    /// 设置环境变量
    Set {
        /// 环境名称
        name: String,
        /// 变量名称
        key: String,
        /// 变量值
        value: String,
    },

    /// 比较两个环境
    Diff {
        /// 旧环境
        from: String,
        /// 新环境
        to: String,
        /// 输出格式
        #[arg(short, long, value_enum, default_value_t = DiffFormat::Text)]
        format: DiffFormat,
    },

    /// 把 source 中的变量同步到 target
    Sync {
        source: String,
        target: String,
        /// 覆盖值不同的已有变量
        #[arg(short, long)]
        force: bool,
        /// 只显示将要进行的修改
        #[arg(short = 'n', long)]
        dry_run: bool,
        /// 强制同步时原位替换，而不是追加新行
        #[arg(long, requires = "force")]
        replace: bool,
    },

    /// 生成新的加密密钥
    Keygen,

    /// 备份环境到 JSON 文件
    Backup {
        /// 环境名称
        name: String,
        /// 输出文件（默认 backups/{name}-{时间}.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// 不加密，即使配置了密钥
        #[arg(long)]
        plain: bool,
    },

    /// 从备份文件还原环境
    Restore {
        /// 备份文件
        file: PathBuf,
        /// 还原为指定环境名
        #[arg(long = "as")]
        rename: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Env,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiffFormat {
    Text,
    Json,
}
