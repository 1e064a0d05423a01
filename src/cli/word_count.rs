//! # word-count 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/word_count.rs`

use crate::counting::CountOptions;

use clap::Args;
use std::path::PathBuf;

/// word-count 子命令参数
#[derive(Args, Debug)]
pub struct WordCountArgs {
    /// Files to count
    pub files: Vec<PathBuf>,

    /// Print the word count
    #[arg(short, long, default_value_t = false)]
    pub words: bool,

    /// Print the character count
    #[arg(short, long, default_value_t = false)]
    pub chars: bool,

    /// Print the line count
    #[arg(short, long, default_value_t = false)]
    pub lines: bool,

    /// Maximum number of files processed at once (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Print a succeeded/failed summary to stderr when done
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

impl WordCountArgs {
    /// 需要输出的计数项
    pub fn count_options(&self) -> CountOptions {
        CountOptions {
            words: self.words,
            chars: self.chars,
            lines: self.lines,
        }
    }
}
