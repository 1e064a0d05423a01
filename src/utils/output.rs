//! # 输出工具
//!
//! 提供统一的终端输出样式。计数行输出到标准输出，不着色；
//! 诊断信息输出到标准错误。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印计数行
///
/// 整行一次写出，并发的工作线程不会在行内交错。
pub fn print_counts(line: &str) {
    println!("{}", line);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    eprintln!("{} {}", "[DONE]".green().bold(), msg);
}
