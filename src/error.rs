//! # 统一错误处理模块
//!
//! 定义 wordcount 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 打开失败：文件不存在、无权限或是目录
//! - 扫描失败：行超过缓冲区上限，或读取中途出错
//! - 用法错误：未提供任何文件
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// wordcount 统一错误类型
#[derive(Error, Debug)]
pub enum WcError {
    // ─────────────────────────────────────────────────────────────
    // 单文件错误（经错误通道传递，不影响其他文件）
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to open file: {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} of {path} exceeds the maximum line length of {limit} bytes")]
    LineTooLong {
        path: String,
        line: usize,
        limit: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 用法错误
    // ─────────────────────────────────────────────────────────────
    #[error("Please provide file names as arguments")]
    NoInputFiles,
}

impl WcError {
    /// 是否为用法错误（决定进程退出码）
    pub fn is_usage(&self) -> bool {
        matches!(self, WcError::NoInputFiles)
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, WcError>;
