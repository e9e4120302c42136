//! 文件格式

pub mod format;
