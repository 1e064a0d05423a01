//! # 批量处理模块
//!
//! 提供多文件并发计数能力。
//!
//! ## 功能
//! - 每个文件一个工作线程
//! - 并发闸门限制同时处理的文件数
//! - 等待所有文件完成并汇总统计
//!
//! ## 依赖关系
//! - 被 `commands/word_count.rs` 使用
//! - 使用 `counting/` 完成单文件计数

pub mod gate;
pub mod runner;

pub use runner::BatchRunner;
