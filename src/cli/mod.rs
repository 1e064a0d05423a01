//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `word-count`: 统计文件的词数、字符数、行数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: word_count

pub mod word_count;

use clap::{Parser, Subcommand};

/// wordcount - 并发文本计数工具
#[derive(Parser)]
#[command(name = "wordcount")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Count words, characters and lines in files concurrently", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Count the number of words, characters and lines in files
    WordCount(word_count::WordCountArgs),
}
